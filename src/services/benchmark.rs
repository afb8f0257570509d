//! Peer benchmarking
//!
//! Compares a monthly cost against the reference average for the user's
//! location. Deviations beyond a fixed ±15% band produce an insight; a
//! tighter ±10% band marks individual inputs in listings.

use tracing::debug;

use super::frequency::normalize_to_monthly;
use crate::models::{
    normalize_location, BenchmarkKey, BillEntry, GeoData, GeoStats, Insight, Severity, KNOWN_BILLS,
    NATIONAL_CODE,
};

/// Relative deviation that must be exceeded before a cost is flagged
pub const DEVIATION_THRESHOLD: f64 = 0.15;

/// Narrower band used to mark individual inputs in profile listings
pub const MARK_THRESHOLD: f64 = 0.10;

/// Outcome of comparing a cost to its reference average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub severity: Severity,
    /// Absolute deviation in whole percent
    pub percent: u32,
}

/// Classify a monthly cost against a reference average.
///
/// Returns None when either value is not positive or when the deviation is
/// within the threshold band.
pub fn classify(user_monthly: f64, reference_average: f64) -> Option<Benchmark> {
    if user_monthly <= 0.0 || reference_average <= 0.0 {
        return None;
    }

    let deviation = (user_monthly - reference_average) / reference_average;
    let severity = if deviation > DEVIATION_THRESHOLD {
        Severity::Warn
    } else if deviation < -DEVIATION_THRESHOLD {
        Severity::Good
    } else {
        return None;
    };

    Some(Benchmark {
        severity,
        percent: (deviation.abs() * 100.0).round() as u32,
    })
}

/// Reference statistics for a location.
///
/// "US" always resolves to national averages; an unknown location falls back
/// to them as well.
pub fn resolve_geo_stats<'a>(location: &str, geo: &'a GeoData) -> &'a GeoStats {
    let code = normalize_location(location);
    if code == NATIONAL_CODE {
        return &geo.national;
    }
    match geo.state(&code) {
        Some(stats) => stats,
        None => {
            debug!(location = %code, "no geo stats for location, using national");
            &geo.national
        }
    }
}

/// Build the insight for one labelled cost, if it deviates enough
pub fn benchmark_insight(
    label: &str,
    user_monthly: f64,
    stats: &GeoStats,
    key: BenchmarkKey,
) -> Option<Insight> {
    let benchmark = classify(user_monthly, stats.average(key))?;
    let direction = match benchmark.severity {
        Severity::Warn => "above",
        Severity::Good => "below",
    };
    Some(Insight {
        severity: benchmark.severity,
        message: format!("{} is {}% {} avg.", label, benchmark.percent, direction),
    })
}

/// Mark a single monthly input against its reference average.
///
/// Below 90% of the average is good, above 110% is a warning. Nothing is
/// marked when either value is not positive.
pub fn mark(user_monthly: f64, reference_average: f64) -> Option<Severity> {
    if user_monthly <= 0.0 || reference_average <= 0.0 {
        return None;
    }
    if user_monthly < reference_average * (1.0 - MARK_THRESHOLD) {
        Some(Severity::Good)
    } else if user_monthly > reference_average * (1.0 + MARK_THRESHOLD) {
        Some(Severity::Warn)
    } else {
        None
    }
}

/// Statistic a bill is compared against: its own key, or the key of the
/// catalogue entry whose label is exactly the bill's name
pub fn bill_benchmark_key(bill: &BillEntry) -> Option<BenchmarkKey> {
    bill.key.or_else(|| {
        KNOWN_BILLS
            .iter()
            .find(|known| known.label == bill.name)
            .map(|known| known.key)
    })
}

/// Mark a bill's monthly cost against the resolved statistics
pub fn mark_bill(bill: &BillEntry, stats: &GeoStats) -> Option<Severity> {
    let key = bill_benchmark_key(bill)?;
    mark(normalize_to_monthly(bill.amount, bill.cadence), stats.average(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cadence;

    fn geo() -> GeoData {
        serde_json::from_str(
            r#"{
                "national": {"housing_rent": 1400.0, "internet": 75.0},
                "states": {"OH": {"name": "Ohio", "housing_rent": 1000.0}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_mark_band() {
        assert_eq!(mark(890.0, 1000.0), Some(Severity::Good));
        assert_eq!(mark(1110.5, 1000.0), Some(Severity::Warn));
        assert_eq!(mark(900.0, 1000.0), None);
        assert_eq!(mark(1100.0, 1000.0), None);
        // Inside the insight band but outside the mark band
        assert_eq!(mark(1120.0, 1000.0), Some(Severity::Warn));
        assert!(classify(1120.0, 1000.0).is_none());
    }

    #[test]
    fn test_mark_needs_positive_values() {
        assert_eq!(mark(0.0, 1000.0), None);
        assert_eq!(mark(500.0, 0.0), None);
    }

    #[test]
    fn test_bill_key_falls_back_to_catalogue_label() {
        let keyed =
            BillEntry::new("Fiber", 60.0, Cadence::Monthly).with_key(BenchmarkKey::Internet);
        assert_eq!(bill_benchmark_key(&keyed), Some(BenchmarkKey::Internet));

        let labelled = BillEntry::new("Internet", 60.0, Cadence::Monthly);
        assert_eq!(bill_benchmark_key(&labelled), Some(BenchmarkKey::Internet));

        let lowercase = BillEntry::new("internet", 60.0, Cadence::Monthly);
        assert_eq!(bill_benchmark_key(&lowercase), None);
    }

    #[test]
    fn test_mark_bill_uses_monthly_amount() {
        let geo = geo();
        let stats = resolve_geo_stats("US", &geo);

        // 270 a quarter is 90 a month against a 75 average
        let bill = BillEntry::new("Internet", 270.0, Cadence::Quarterly);
        assert_eq!(mark_bill(&bill, stats), Some(Severity::Warn));

        let cheap = BillEntry::new("Internet", 50.0, Cadence::Monthly);
        assert_eq!(mark_bill(&cheap, stats), Some(Severity::Good));

        let unknown = BillEntry::new("Gym", 500.0, Cadence::Monthly);
        assert_eq!(mark_bill(&unknown, stats), None);
    }

    #[test]
    fn test_classify_warn() {
        let b = classify(1200.0, 1000.0).unwrap();
        assert_eq!(b.severity, Severity::Warn);
        assert_eq!(b.percent, 20);
    }

    #[test]
    fn test_classify_good() {
        let b = classify(700.0, 1000.0).unwrap();
        assert_eq!(b.severity, Severity::Good);
        assert_eq!(b.percent, 30);
    }

    #[test]
    fn test_classify_at_reference() {
        assert!(classify(1000.0, 1000.0).is_none());
    }

    #[test]
    fn test_classify_inside_band() {
        assert!(classify(1100.0, 1000.0).is_none());
        assert!(classify(900.0, 1000.0).is_none());
    }

    #[test]
    fn test_classify_needs_positive_values() {
        assert!(classify(0.0, 1000.0).is_none());
        assert!(classify(500.0, 0.0).is_none());
        assert!(classify(-5.0, 100.0).is_none());
    }

    #[test]
    fn test_resolve_known_state() {
        let geo = geo();
        let stats = resolve_geo_stats("oh", &geo);
        assert_eq!(stats.name.as_deref(), Some("Ohio"));
    }

    #[test]
    fn test_resolve_us_and_unknown_use_national() {
        let geo = geo();
        assert_eq!(resolve_geo_stats("US", &geo), &geo.national);
        assert_eq!(resolve_geo_stats("ZZ", &geo), &geo.national);
        assert_eq!(resolve_geo_stats("", &geo), &geo.national);
    }

    #[test]
    fn test_insight_message() {
        let geo = geo();
        let stats = resolve_geo_stats("OH", &geo);

        let insight =
            benchmark_insight("Housing", 1500.0, stats, BenchmarkKey::HousingRent).unwrap();
        assert_eq!(insight.severity, Severity::Warn);
        assert_eq!(insight.message, "Housing is 50% above avg.");

        let insight =
            benchmark_insight("Housing", 600.0, stats, BenchmarkKey::HousingRent).unwrap();
        assert_eq!(insight.message, "Housing is 40% below avg.");
    }

    #[test]
    fn test_missing_stat_yields_no_insight() {
        let geo = geo();
        let stats = resolve_geo_stats("OH", &geo);
        assert!(benchmark_insight("Internet", 500.0, stats, BenchmarkKey::Internet).is_none());
    }
}
