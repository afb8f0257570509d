//! User settings for Budgeter
//!
//! Manages user preferences: whether the profile is remembered between runs,
//! currency symbol, export naming, and input defaults.

use serde::{Deserialize, Serialize};

use super::paths::BudgeterPaths;
use crate::error::BudgeterError;
use crate::models::Cadence;

/// User settings for Budgeter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether the profile is persisted between runs. When off, every
    /// summary is computed from a freshly seeded sample profile.
    #[serde(default = "default_remember_profile")]
    pub remember_profile: bool,

    /// Currency symbol used for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Base file name for exports (extension is added per format)
    #[serde(default = "default_export_basename")]
    pub export_basename: String,

    /// Location code assigned to new profiles
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Income cadence assigned to new profiles
    #[serde(default = "default_income_cadence")]
    pub default_income_cadence: Cadence,
}

fn default_schema_version() -> u32 {
    1
}

fn default_remember_profile() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_export_basename() -> String {
    "budgeter".to_string()
}

fn default_location() -> String {
    "US".to_string()
}

fn default_income_cadence() -> Cadence {
    Cadence::Annual
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            remember_profile: default_remember_profile(),
            currency_symbol: default_currency(),
            export_basename: default_export_basename(),
            default_location: default_location(),
            default_income_cadence: default_income_cadence(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgeterPaths) -> Result<Self, BudgeterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgeterError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgeterError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgeterPaths) -> Result<(), BudgeterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgeterError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgeterError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
