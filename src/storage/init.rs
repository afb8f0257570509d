//! Storage initialization
//!
//! Handles first-run setup: directories, default settings, and copies of
//! the bundled reference data that users can edit in place.

use tracing::info;

use crate::config::paths::BudgeterPaths;
use crate::config::settings::Settings;
use crate::error::BudgeterError;

use super::file_io::write_bytes_atomic;
use super::reference::{BUNDLED_GEO_STATS, BUNDLED_TAX_TABLES};

/// What `initialize_storage` actually created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub settings_created: bool,
    pub tax_tables_created: bool,
    pub geo_stats_created: bool,
}

impl InitReport {
    pub fn created_anything(&self) -> bool {
        self.settings_created || self.tax_tables_created || self.geo_stats_created
    }
}

/// Initialize storage for a fresh installation.
///
/// Existing files are never overwritten, so running this twice is harmless.
pub fn initialize_storage(paths: &BudgeterPaths) -> Result<InitReport, BudgeterError> {
    paths.ensure_directories()?;

    let mut report = InitReport::default();

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        report.settings_created = true;
    }

    if !paths.tax_tables_file().exists() {
        write_bytes_atomic(paths.tax_tables_file(), BUNDLED_TAX_TABLES.as_bytes())?;
        report.tax_tables_created = true;
    }

    if !paths.geo_stats_file().exists() {
        write_bytes_atomic(paths.geo_stats_file(), BUNDLED_GEO_STATS.as_bytes())?;
        report.geo_stats_created = true;
    }

    info!(base = %paths.base_dir().display(), ?report, "initialized storage");
    Ok(report)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgeterPaths) -> bool {
    !paths.is_initialized()
}
