//! YAML Export functionality
//!
//! Same document as the JSON export, in a form that is easier to read and
//! hand-edit.

use std::io::Write;

use crate::error::{BudgeterError, BudgeterResult};
use crate::export::json::BudgetExport;
use crate::reports::BudgetSummaryReport;

/// Export a report to YAML with a short comment header
pub fn export_yaml<W: Write>(report: &BudgetSummaryReport, writer: &mut W) -> BudgeterResult<()> {
    let export = BudgetExport::from_report(report);

    writeln!(writer, "# Budgeter Budget Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

/// Read a YAML export back (for verification)
pub fn import_from_yaml(yaml_str: &str) -> BudgeterResult<BudgetExport> {
    let export: BudgetExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(BudgeterError::Validation)?;
    Ok(export)
}
