//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod config;
pub mod data;
pub mod export;
pub mod profile;
pub mod summary;

pub use bill::{handle_bill_command, BillCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use data::{handle_data_command, DataCommands};
pub use export::{handle_export_command, ExportArgs};
pub use profile::{handle_profile_command, ProfileCommands};
pub use summary::{handle_summary_command, SummaryArgs};

use std::io::IsTerminal;

use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{
    normalize_location, BenchmarkKey, Cadence, FilingStatus, HousingType, NATIONAL_CODE,
};
use crate::storage::ReferenceData;

/// Display name for a location code
pub(crate) fn location_name(location: &str, reference: &ReferenceData) -> String {
    let code = normalize_location(location);
    if code == NATIONAL_CODE {
        "National".to_string()
    } else {
        reference.geo.state_name(&code).to_string()
    }
}

/// Parse a benchmark key given on the command line
pub(crate) fn parse_key(s: &str) -> BudgeterResult<BenchmarkKey> {
    BenchmarkKey::parse(s).ok_or_else(|| {
        BudgeterError::Validation(format!(
            "Unknown benchmark key '{}'; see 'budgeter data bills'",
            s
        ))
    })
}

/// Cadence typed on the command line.
///
/// Case and surrounding space are ignored and a few common spellings are
/// mapped onto the canonical keys before the monthly fallback applies.
pub(crate) fn parse_cadence_arg(s: &str) -> Cadence {
    let lowered = s.trim().to_lowercase();
    let key = match lowered.as_str() {
        "yearly" => "annual",
        "bi-weekly" => "biweekly",
        "semi-monthly" => "semimonthly",
        "bi-annual" | "semiannual" | "semi-annual" => "biannual",
        other => other,
    };
    Cadence::parse_or_default(key)
}

/// Filing status typed on the command line, case-insensitive
pub(crate) fn parse_filing_arg(s: &str) -> FilingStatus {
    FilingStatus::parse(&s.trim().to_lowercase())
}

/// Housing type typed on the command line, case-insensitive
pub(crate) fn parse_housing_arg(s: &str) -> HousingType {
    HousingType::parse(&s.trim().to_lowercase())
}

/// Whether stdout should receive ANSI colors
pub(crate) fn use_color(disabled: bool) -> bool {
    !disabled && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
