//! Profile repository for JSON storage
//!
//! Manages the remembered profile in profile.json

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BudgeterError;
use crate::models::UserProfile;

use super::file_io::{read_json_required, remove_if_exists, write_json_atomic};

/// On-disk form of the remembered profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProfile {
    pub saved_at: DateTime<Utc>,
    pub profile: UserProfile,
}

/// Repository for profile persistence
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Option<SavedProfile>>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the profile from disk; a missing file leaves the repository empty
    pub fn load(&self) -> Result<(), BudgeterError> {
        let saved = if self.path.exists() {
            Some(read_json_required::<SavedProfile, _>(&self.path)?)
        } else {
            None
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgeterError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = saved;
        Ok(())
    }

    /// Save the profile to disk; an empty repository writes nothing
    pub fn save(&self) -> Result<(), BudgeterError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgeterError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        if let Some(saved) = data.as_ref() {
            write_json_atomic(&self.path, saved)?;
            info!(bills = saved.profile.bills.len(), "saved profile");
        }
        Ok(())
    }

    /// The remembered profile, if any
    pub fn get(&self) -> Result<Option<UserProfile>, BudgeterError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgeterError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.as_ref().map(|s| s.profile.clone()))
    }

    /// When the remembered profile was last saved
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>, BudgeterError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgeterError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.as_ref().map(|s| s.saved_at))
    }

    /// Replace the remembered profile in memory (call `save` to persist)
    pub fn set(&self, profile: UserProfile) -> Result<(), BudgeterError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgeterError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = Some(SavedProfile {
            saved_at: Utc::now(),
            profile,
        });
        Ok(())
    }

    /// Forget the profile and delete its file
    pub fn clear(&self) -> Result<bool, BudgeterError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgeterError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = None;

        let removed = remove_if_exists(&self.path)?;
        if removed {
            info!("cleared remembered profile");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillEntry, Cadence};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        let repo = ProfileRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get().unwrap().is_none());
        assert!(repo.saved_at().unwrap().is_none());
    }

    #[test]
    fn test_set_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let mut profile = UserProfile::new("OH", Cadence::Monthly);
        profile.income = 4200.0;
        profile.add_bill(BillEntry::new("Gym", 35.0, Cadence::Monthly));
        repo.set(profile.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = ProfileRepository::new(temp_dir.path().join("profile.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), Some(profile));
        assert!(repo2.saved_at().unwrap().is_some());
    }

    #[test]
    fn test_save_empty_writes_nothing() {
        let (temp_dir, repo) = create_test_repo();
        repo.save().unwrap();
        assert!(!temp_dir.path().join("profile.json").exists());
    }

    #[test]
    fn test_clear_deletes_file() {
        let (temp_dir, repo) = create_test_repo();
        repo.set(UserProfile::default()).unwrap();
        repo.save().unwrap();
        assert!(temp_dir.path().join("profile.json").exists());

        assert!(repo.clear().unwrap());
        assert!(repo.get().unwrap().is_none());
        assert!(!temp_dir.path().join("profile.json").exists());
        assert!(!repo.clear().unwrap());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("profile.json"), "[1, 2").unwrap();
        assert!(repo.load().is_err());
    }
}
