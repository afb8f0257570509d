//! Storage layer for Budgeter
//!
//! Provides JSON file storage with atomic writes, the remembered-profile
//! repository, and reference-data loading with bundled fallbacks.

pub mod file_io;
pub mod init;
pub mod profile;
pub mod reference;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization, InitReport};
pub use profile::{ProfileRepository, SavedProfile};
pub use reference::ReferenceData;

use crate::config::paths::BudgeterPaths;
use crate::error::BudgeterError;

/// Main storage coordinator
pub struct Storage {
    paths: BudgeterPaths,
    pub profile: ProfileRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgeterPaths) -> Result<Self, BudgeterError> {
        paths.ensure_directories()?;

        Ok(Self {
            profile: ProfileRepository::new(paths.profile_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgeterPaths {
        &self.paths
    }

    /// Load all persisted data from disk
    pub fn load_all(&self) -> Result<(), BudgeterError> {
        self.profile.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgeterError> {
        self.profile.save()
    }

    /// Load the reference datasets for this installation
    pub fn reference_data(&self) -> Result<ReferenceData, BudgeterError> {
        ReferenceData::load(&self.paths)
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
