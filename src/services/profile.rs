//! Profile service
//!
//! Business logic for editing the remembered profile and its bills. Every
//! mutating call loads, edits and saves the profile in one go.

use rand::Rng;
use tracing::info;

use super::seed::seed_random_profile;
use crate::config::settings::Settings;
use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{
    normalize_location, sanitize_amount, BenchmarkKey, BillEntry, Cadence, Category, FilingStatus,
    GeoData, HousingType, UserProfile,
};
use crate::storage::Storage;

/// Where the profile used for a computation came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Loaded from profile.json
    Remembered,
    /// Nothing remembered and no states to seed from; settings defaults
    Blank,
    /// Sample data drawn from a state's averages
    Seeded { state_name: String },
}

/// A profile together with its origin
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub profile: UserProfile,
    pub source: ProfileSource,
}

/// Partial update to the profile's scalar fields
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub income: Option<f64>,
    pub income_cadence: Option<Cadence>,
    pub filing_status: Option<FilingStatus>,
    pub location: Option<String>,
    pub housing_type: Option<HousingType>,
    pub housing_cost: Option<f64>,
    pub housing_cadence: Option<Cadence>,
    pub medical_premium: Option<f64>,
    pub premium_cadence: Option<Cadence>,
    pub medical_oop_max: Option<f64>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.income.is_none()
            && self.income_cadence.is_none()
            && self.filing_status.is_none()
            && self.location.is_none()
            && self.housing_type.is_none()
            && self.housing_cost.is_none()
            && self.housing_cadence.is_none()
            && self.medical_premium.is_none()
            && self.premium_cadence.is_none()
            && self.medical_oop_max.is_none()
    }

    /// Apply the set fields; amounts are sanitized and the location normalized
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(v) = self.income {
            profile.income = sanitize_amount(v);
        }
        if let Some(v) = self.income_cadence {
            profile.income_cadence = v;
        }
        if let Some(v) = self.filing_status {
            profile.filing_status = v;
        }
        if let Some(v) = &self.location {
            profile.location = normalize_location(v);
        }
        if let Some(v) = self.housing_type {
            profile.housing_type = v;
        }
        if let Some(v) = self.housing_cost {
            profile.housing_cost = sanitize_amount(v);
        }
        if let Some(v) = self.housing_cadence {
            profile.housing_cadence = v;
        }
        if let Some(v) = self.medical_premium {
            profile.medical_premium = sanitize_amount(v);
        }
        if let Some(v) = self.premium_cadence {
            profile.premium_cadence = v;
        }
        if let Some(v) = self.medical_oop_max {
            profile.medical_oop_max = sanitize_amount(v);
        }
    }
}

/// Partial update to one bill
#[derive(Debug, Clone, Default)]
pub struct BillUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub cadence: Option<Cadence>,
    pub category: Option<Category>,
    pub key: Option<BenchmarkKey>,
    pub clear_key: bool,
}

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    fn require_remembering(&self) -> BudgeterResult<()> {
        if self.settings.remember_profile {
            Ok(())
        } else {
            Err(BudgeterError::Validation(
                "Profile is not remembered; enable it with `budgeter config remember on`".into(),
            ))
        }
    }

    fn blank(&self) -> UserProfile {
        UserProfile::new(
            normalize_location(&self.settings.default_location),
            self.settings.default_income_cadence,
        )
    }

    /// The remembered profile, or a blank one built from settings
    pub fn current(&self) -> BudgeterResult<UserProfile> {
        self.storage.profile.load()?;
        Ok(self.storage.profile.get()?.unwrap_or_else(|| self.blank()))
    }

    /// The profile a summary should be computed from.
    ///
    /// A saved profile is used only while remembering is on. Otherwise a
    /// sample is seeded from a random state; blank is left for geo data
    /// without states.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        geo: &GeoData,
        rng: &mut R,
    ) -> BudgeterResult<ResolvedProfile> {
        if self.settings.remember_profile {
            self.storage.profile.load()?;
            if let Some(profile) = self.storage.profile.get()? {
                return Ok(ResolvedProfile {
                    profile,
                    source: ProfileSource::Remembered,
                });
            }
        }

        Ok(match seed_random_profile(geo, rng) {
            Some(seeded) => ResolvedProfile {
                profile: seeded.profile,
                source: ProfileSource::Seeded {
                    state_name: seeded.state_name,
                },
            },
            None => ResolvedProfile {
                profile: self.blank(),
                source: ProfileSource::Blank,
            },
        })
    }

    fn modify<T>(
        &self,
        edit: impl FnOnce(&mut UserProfile) -> BudgeterResult<T>,
    ) -> BudgeterResult<T> {
        self.require_remembering()?;
        let mut profile = self.current()?;
        let out = edit(&mut profile)?;
        self.storage.profile.set(profile)?;
        self.storage.profile.save()?;
        Ok(out)
    }

    /// Apply a partial update to the profile's scalar fields
    pub fn update(&self, update: &ProfileUpdate) -> BudgeterResult<UserProfile> {
        if update.is_empty() {
            return Err(BudgeterError::Validation("Nothing to update".into()));
        }
        self.modify(|profile| {
            update.apply(profile);
            Ok(profile.clone())
        })
    }

    /// Forget the remembered profile
    pub fn reset(&self) -> BudgeterResult<bool> {
        self.storage.profile.clear()
    }

    /// Replace the profile with seeded sample data, returning the state name
    pub fn seed<R: Rng + ?Sized>(&self, geo: &GeoData, rng: &mut R) -> BudgeterResult<String> {
        self.require_remembering()?;
        let seeded = seed_random_profile(geo, rng).ok_or_else(|| {
            BudgeterError::ReferenceData("Geo stats contain no states to seed from".into())
        })?;

        self.storage.profile.set(seeded.profile)?;
        self.storage.profile.save()?;
        info!(state = %seeded.state_name, "seeded profile");
        Ok(seeded.state_name)
    }

    /// Add a bill to the top of the list.
    ///
    /// When neither category nor key is given, the name is matched against
    /// the known-bill catalogue to fill them in.
    pub fn add_bill(
        &self,
        name: &str,
        amount: f64,
        cadence: Cadence,
        category: Option<Category>,
        key: Option<BenchmarkKey>,
    ) -> BudgeterResult<BillEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgeterError::Validation("Bill name cannot be empty".into()));
        }

        let mut bill = BillEntry::new(name, amount, cadence);
        match (category, key) {
            (None, None) => {
                bill.auto_detect();
            }
            (category, key) => {
                if let Some(category) = category {
                    bill.category = category;
                }
                bill.key = key;
            }
        }

        self.modify(|profile| {
            profile.add_bill(bill.clone());
            Ok(())
        })?;
        info!(bill = %bill.id, name = %bill.name, "added bill");
        Ok(bill)
    }

    /// Apply a partial update to a bill found by ID or name
    pub fn update_bill(&self, query: &str, update: &BillUpdate) -> BudgeterResult<BillEntry> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(BudgeterError::Validation("Bill name cannot be empty".into()));
            }
        }

        self.modify(|profile| {
            let bill = profile
                .find_bill_mut(query)
                .ok_or_else(|| BudgeterError::bill_not_found(query))?;

            if let Some(name) = &update.name {
                bill.name = name.trim().to_string();
            }
            if let Some(amount) = update.amount {
                bill.amount = sanitize_amount(amount);
            }
            if let Some(cadence) = update.cadence {
                bill.cadence = cadence;
            }
            if let Some(category) = update.category {
                bill.category = category;
            }
            if update.clear_key {
                bill.key = None;
            } else if let Some(key) = update.key {
                bill.key = Some(key);
            }
            Ok(bill.clone())
        })
    }

    /// Remove a bill found by ID or name
    pub fn remove_bill(&self, query: &str) -> BudgeterResult<BillEntry> {
        self.modify(|profile| {
            profile
                .remove_bill(query)
                .ok_or_else(|| BudgeterError::bill_not_found(query))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgeterPaths;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn geo() -> GeoData {
        serde_json::from_str(
            r#"{
                "national": {},
                "states": {"OH": {"name": "Ohio", "housing_rent": 900.0, "internet": 60.0}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_current_defaults_from_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            default_location: "oh".into(),
            default_income_cadence: Cadence::BiWeekly,
            ..Settings::default()
        };
        let service = ProfileService::new(&storage, &settings);

        let profile = service.current().unwrap();
        assert_eq!(profile.location, "OH");
        assert_eq!(profile.income_cadence, Cadence::BiWeekly);
    }

    #[test]
    fn test_update_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        let update = ProfileUpdate {
            income: Some(72000.0),
            location: Some(" ca ".into()),
            housing_cost: Some(-50.0),
            ..ProfileUpdate::default()
        };
        service.update(&update).unwrap();

        let profile = service.current().unwrap();
        assert_eq!(profile.income, 72000.0);
        assert_eq!(profile.location, "CA");
        assert_eq!(profile.housing_cost, 0.0);
    }

    #[test]
    fn test_empty_update_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        let err = service.update(&ProfileUpdate::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_edits_rejected_when_not_remembering() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            remember_profile: false,
            ..Settings::default()
        };
        let service = ProfileService::new(&storage, &settings);

        let err = service
            .add_bill("Gym", 30.0, Cadence::Monthly, None, None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_bill_auto_detects_known_bill() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        let bill = service
            .add_bill("  internet ", 65.0, Cadence::Monthly, None, None)
            .unwrap();
        assert_eq!(bill.name, "Internet");
        assert_eq!(bill.category, Category::Util);
        assert_eq!(bill.key, Some(BenchmarkKey::Internet));

        let custom = service
            .add_bill("Internet", 65.0, Cadence::Monthly, Some(Category::Bill), None)
            .unwrap();
        assert_eq!(custom.category, Category::Bill);
        assert!(custom.key.is_none());

        assert_eq!(service.current().unwrap().bills.len(), 2);
    }

    #[test]
    fn test_add_bill_requires_name() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        assert!(service
            .add_bill("   ", 10.0, Cadence::Monthly, None, None)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_update_and_remove_bill() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        let bill = service
            .add_bill("Car Insurance", 900.0, Cadence::BiAnnual, None, None)
            .unwrap();

        let update = BillUpdate {
            amount: Some(960.0),
            clear_key: true,
            ..BillUpdate::default()
        };
        let updated = service.update_bill(&bill.id.to_string(), &update).unwrap();
        assert_eq!(updated.amount, 960.0);
        assert!(updated.key.is_none());
        assert_eq!(updated.cadence, Cadence::BiAnnual);

        let removed = service.remove_bill("car insurance").unwrap();
        assert_eq!(removed.id, bill.id);

        let err = service.remove_bill("car insurance").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_seeds_until_a_profile_is_saved() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = service.resolve(&geo(), &mut rng).unwrap();
        assert_eq!(
            resolved.source,
            ProfileSource::Seeded {
                state_name: "Ohio".into()
            }
        );
        // Seeding for a summary does not save anything
        assert!(!storage.paths().profile_file().exists());

        service
            .update(&ProfileUpdate {
                income: Some(50000.0),
                ..ProfileUpdate::default()
            })
            .unwrap();
        let resolved = service.resolve(&geo(), &mut rng).unwrap();
        assert_eq!(resolved.source, ProfileSource::Remembered);
        assert_eq!(resolved.profile.income, 50000.0);
    }

    #[test]
    fn test_resolve_blank_without_states() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        let resolved = service
            .resolve(&GeoData::default(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(resolved.source, ProfileSource::Blank);
        assert_eq!(resolved.profile.location, "US");
    }

    #[test]
    fn test_resolve_seeds_when_not_remembering() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            remember_profile: false,
            ..Settings::default()
        };
        let service = ProfileService::new(&storage, &settings);

        let resolved = service
            .resolve(&geo(), &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(
            resolved.source,
            ProfileSource::Seeded {
                state_name: "Ohio".into()
            }
        );
        assert_eq!(resolved.profile.housing_cost, 900.0);
        assert_eq!(resolved.profile.bills.len(), 1);
    }

    #[test]
    fn test_seed_and_reset() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ProfileService::new(&storage, &settings);

        let state = service.seed(&geo(), &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(state, "Ohio");
        assert!(storage.paths().profile_file().exists());

        assert!(service.reset().unwrap());
        assert!(!storage.paths().profile_file().exists());
        assert_eq!(service.current().unwrap().housing_cost, 0.0);
    }
}
