//! Sample profile seeding
//!
//! Builds a plausible starting profile from one state's reference averages,
//! so a first run has something to show.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::{
    BenchmarkKey, BillEntry, Cadence, GeoData, KnownBill, UserProfile, KNOWN_BILLS, NATIONAL_CODE,
};

/// Most bills a seeded profile starts with
pub const MAX_SEEDED_BILLS: usize = 5;

/// A freshly seeded profile and the state its figures came from
#[derive(Debug, Clone, PartialEq)]
pub struct SeededProfile {
    pub profile: UserProfile,
    pub state_name: String,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Seed a profile from a random state's averages.
///
/// Housing and premium take the state's `housing_rent` and `health_insurance`
/// averages. Up to five known bills with a stat for that state are added as
/// monthly bills. The profile's location stays national so the seeded costs
/// are benchmarked against US averages. Returns None when the dataset has no
/// states.
pub fn seed_random_profile<R: Rng + ?Sized>(geo: &GeoData, rng: &mut R) -> Option<SeededProfile> {
    let codes: Vec<&String> = geo.states.keys().collect();
    let code = *codes.choose(rng)?;
    let stats = geo.state(code)?;

    let mut profile = UserProfile::new(NATIONAL_CODE, Cadence::Annual);
    profile.housing_cost = round_cents(stats.average(BenchmarkKey::HousingRent));
    profile.medical_premium = round_cents(stats.average(BenchmarkKey::HealthInsurance));

    let mut available: Vec<&KnownBill> = KNOWN_BILLS
        .iter()
        .filter(|kb| stats.get(kb.key).is_some_and(|v| v > 0.0))
        .collect();
    available.shuffle(rng);

    for known in available.into_iter().take(MAX_SEEDED_BILLS) {
        let amount = round_cents(stats.average(known.key));
        profile.bills.push(BillEntry::from_known(known, amount, Cadence::Monthly));
    }

    let state_name = geo.state_name(code).to_string();
    debug!(state = %code, bills = profile.bills.len(), "seeded sample profile");

    Some(SeededProfile {
        profile,
        state_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn geo() -> GeoData {
        serde_json::from_str(
            r#"{
                "national": {"housing_rent": 1400.0},
                "states": {
                    "OH": {
                        "name": "Ohio",
                        "housing_rent": 1012.346,
                        "health_insurance": 480.129,
                        "internet": 70.0,
                        "electricity": 120.0,
                        "water": 55.0,
                        "garbage": 25.0,
                        "cell_phone": 90.0,
                        "streaming": 30.0,
                        "retirement": 0.0
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_seed_uses_state_averages() {
        let geo = geo();
        let mut rng = StdRng::seed_from_u64(7);
        let seeded = seed_random_profile(&geo, &mut rng).unwrap();

        assert_eq!(seeded.state_name, "Ohio");
        assert_eq!(seeded.profile.location, "US");
        assert_eq!(seeded.profile.housing_cost, 1012.35);
        assert_eq!(seeded.profile.medical_premium, 480.13);
        assert_eq!(seeded.profile.income, 0.0);
    }

    #[test]
    fn test_seed_picks_at_most_five_known_bills() {
        let geo = geo();
        let mut rng = StdRng::seed_from_u64(42);
        let seeded = seed_random_profile(&geo, &mut rng).unwrap();

        let bills = &seeded.profile.bills;
        assert_eq!(bills.len(), MAX_SEEDED_BILLS);
        for bill in bills {
            let key = bill.key.unwrap();
            assert_ne!(key, BenchmarkKey::Retirement);
            assert_eq!(bill.cadence, Cadence::Monthly);
            assert_eq!(bill.category, KnownBill::find_by_key(key).unwrap().category);
            assert!(bill.amount > 0.0);
        }
        assert!(bills.iter().all(|b| b.category != Category::Leftover));
    }

    #[test]
    fn test_same_seed_same_profile_shape() {
        let geo = geo();
        let a = seed_random_profile(&geo, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = seed_random_profile(&geo, &mut StdRng::seed_from_u64(3)).unwrap();
        let names_a: Vec<_> = a.profile.bills.iter().map(|b| b.name.clone()).collect();
        let names_b: Vec<_> = b.profile.bills.iter().map(|b| b.name.clone()).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn test_no_states_no_seed() {
        let geo = GeoData::default();
        assert!(seed_random_profile(&geo, &mut StdRng::seed_from_u64(1)).is_none());
    }
}
