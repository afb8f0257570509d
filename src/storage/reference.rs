//! Reference data loading
//!
//! Tax tables and geo statistics are read from the data directory. A missing
//! file falls back to the copy bundled into the binary, so a fresh install
//! works before `budgeter init` has been run. A file that exists but cannot
//! be parsed is an error rather than a silent fallback.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::paths::BudgeterPaths;
use crate::error::BudgeterError;
use crate::models::{GeoData, TaxTables, NATIONAL_CODE};

use super::file_io::read_json_required;

/// Bundled tax tables
pub const BUNDLED_TAX_TABLES: &str = include_str!("../../data/tax_tables.json");

/// Bundled geo statistics
pub const BUNDLED_GEO_STATS: &str = include_str!("../../data/geo_stats.json");

/// Both reference datasets, loaded once and borrowed by the engine
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceData {
    pub tax: TaxTables,
    pub geo: GeoData,
}

impl ReferenceData {
    /// Load from the data directory, falling back to bundled copies
    pub fn load(paths: &BudgeterPaths) -> Result<Self, BudgeterError> {
        let tax: TaxTables =
            load_dataset(&paths.tax_tables_file(), BUNDLED_TAX_TABLES, "tax tables")?;
        let geo: GeoData =
            load_dataset(&paths.geo_stats_file(), BUNDLED_GEO_STATS, "geo stats")?;
        debug!(
            tax_states = tax.states.len(),
            geo_states = geo.states.len(),
            "loaded reference data"
        );
        Ok(Self { tax, geo })
    }

    /// The datasets compiled into the binary
    pub fn bundled() -> Result<Self, BudgeterError> {
        Ok(Self {
            tax: parse_bundled(BUNDLED_TAX_TABLES, "tax tables")?,
            geo: parse_bundled(BUNDLED_GEO_STATS, "geo stats")?,
        })
    }

    /// Sorted state codes with their display names
    pub fn states(&self) -> Vec<(&str, &str)> {
        self.geo
            .states
            .keys()
            .map(|code| (code.as_str(), self.geo.state_name(code)))
            .collect()
    }

    /// Whether a location code is "US" or a state present in either dataset
    pub fn is_known_location(&self, code: &str) -> bool {
        code == NATIONAL_CODE
            || self.geo.state(code).is_some()
            || self.tax.state(code).is_some()
    }
}

fn parse_bundled<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T, BudgeterError> {
    serde_json::from_str(raw)
        .map_err(|e| BudgeterError::ReferenceData(format!("Bundled {} are invalid: {}", what, e)))
}

fn load_dataset<T: DeserializeOwned>(
    path: &Path,
    bundled: &str,
    what: &str,
) -> Result<T, BudgeterError> {
    if !path.exists() {
        info!(path = %path.display(), "{} not found, using bundled copy", what);
        return parse_bundled(bundled, what);
    }

    read_json_required(path).map_err(|e| {
        BudgeterError::ReferenceData(format!("Failed to load {}: {}", what, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BenchmarkKey, FilingStatus};
    use tempfile::TempDir;

    #[test]
    fn test_bundled_data_parses() {
        let data = ReferenceData::bundled().unwrap();

        assert_eq!(data.tax.federal.fica_rate, 0.0765);
        assert_eq!(data.tax.federal.deduction(FilingStatus::Single), 15000.0);
        assert_eq!(data.tax.federal.deduction(FilingStatus::Married), 30000.0);
        assert_eq!(data.tax.federal.brackets(FilingStatus::Single).len(), 7);
        assert!(data.geo.national.get(BenchmarkKey::HousingRent).is_some());
        assert!(!data.geo.states.is_empty());
    }

    #[test]
    fn test_bundled_brackets_ascending() {
        let data = ReferenceData::bundled().unwrap();
        let schedules = std::iter::once(&data.tax.federal.brackets)
            .chain(data.tax.states.values().map(|s| &s.brackets));
        for by_status in schedules {
            for status in [FilingStatus::Single, FilingStatus::Married] {
                let caps: Vec<f64> = by_status
                    .get(status)
                    .map(|b| b.iter().map(|b| b.cap).collect())
                    .unwrap_or_default();
                assert!(caps.windows(2).all(|w| w[0] < w[1]), "{caps:?}");
            }
        }
    }

    #[test]
    fn test_missing_files_fall_back_to_bundled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = ReferenceData::load(&paths).unwrap();
        assert_eq!(loaded, ReferenceData::bundled().unwrap());
    }

    #[test]
    fn test_files_on_disk_take_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.geo_stats_file(),
            r#"{"national": {"internet": 99.0}, "states": {}}"#,
        )
        .unwrap();

        let loaded = ReferenceData::load(&paths).unwrap();
        assert_eq!(loaded.geo.national.average(BenchmarkKey::Internet), 99.0);
        assert!(loaded.geo.states.is_empty());
        // Tax tables still come from the bundled copy
        assert_eq!(loaded.tax, ReferenceData::bundled().unwrap().tax);
    }

    #[test]
    fn test_unreadable_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.tax_tables_file(), "not json").unwrap();

        let err = ReferenceData::load(&paths).unwrap_err();
        assert!(matches!(err, BudgeterError::ReferenceData(_)));
    }

    #[test]
    fn test_states_listing_and_known_locations() {
        let data = ReferenceData::bundled().unwrap();
        let states = data.states();
        assert!(states.contains(&("OH", "Ohio")));
        assert!(data.is_known_location("US"));
        assert!(data.is_known_location("TX"));
        assert!(!data.is_known_location("ZZ"));
    }
}
