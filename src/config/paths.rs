//! Path management for Budgeter
//!
//! Provides XDG-compliant path resolution for configuration, data, and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETER_DATA_DIR` environment variable (if set)
//! 2. Platform config directory: `$XDG_CONFIG_HOME/budgeter` or
//!    `~/.config/budgeter` on Unix, `%APPDATA%\budgeter` on Windows

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BudgeterError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGETER_DATA_DIR";

/// Manages all paths used by Budgeter
#[derive(Debug, Clone)]
pub struct BudgeterPaths {
    /// Base directory for all Budgeter data
    base_dir: PathBuf,
}

impl BudgeterPaths {
    /// Create a new BudgeterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, BudgeterError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgeterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budgeter/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/budgeter/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the export directory (~/.config/budgeter/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the remembered profile
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Get the path to the tax reference tables
    pub fn tax_tables_file(&self) -> PathBuf {
        self.data_dir().join("tax_tables.json")
    }

    /// Get the path to the geographic cost statistics
    pub fn geo_stats_file(&self) -> PathBuf {
        self.data_dir().join("geo_stats.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgeterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgeterError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgeterError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| BudgeterError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if Budgeter has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgeterError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BudgeterError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("budgeter"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = BudgeterPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.export_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgeterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.profile_file(),
            temp_dir.path().join("data").join("profile.json")
        );
        assert_eq!(
            paths.tax_tables_file(),
            temp_dir.path().join("data").join("tax_tables.json")
        );
    }
}
