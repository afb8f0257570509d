//! Export module for Budgeter
//!
//! Writes the computed budget out in several formats:
//! - CSV: the summary rows, spreadsheet-compatible
//! - JSON: profile and result, machine-readable
//! - YAML: profile and result, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

use clap::ValueEnum;
use tracing::info;

pub use self::csv::export_summary_csv;
pub use json::{export_json, import_from_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};

use crate::error::BudgeterResult;
use crate::reports::BudgetSummaryReport;
use crate::storage::file_io::write_atomic;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Summary rows with normalized monthly amounts
    #[default]
    Csv,
    /// Profile and computed result
    Json,
    /// Profile and computed result, human-readable
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Write a report to `path` in the given format, replacing any existing file
pub fn write_export(
    report: &BudgetSummaryReport,
    format: ExportFormat,
    path: &Path,
) -> BudgeterResult<()> {
    write_atomic(path, |writer| match format {
        ExportFormat::Csv => export_summary_csv(report, writer),
        ExportFormat::Json => export_json(report, writer, true),
        ExportFormat::Yaml => export_yaml(report, writer),
    })?;

    info!(path = %path.display(), format = format.extension(), "exported budget");
    Ok(())
}
