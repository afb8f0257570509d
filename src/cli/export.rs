//! Export CLI command
//!
//! Writes the computed budget to a file in the chosen format.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgeterResult;
use crate::export::{write_export, ExportFormat};
use crate::reports::BudgetSummaryReport;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Options for `budgeter export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> BudgeterResult<()> {
    let reference = storage.reference_data()?;
    let resolved =
        ProfileService::new(storage, settings).resolve(&reference.geo, &mut rand::thread_rng())?;
    let report = BudgetSummaryReport::generate(resolved.profile, resolved.source, &reference);

    let output = args.output.unwrap_or_else(|| {
        storage.paths().export_dir().join(format!(
            "{}.{}",
            settings.export_basename,
            args.format.extension()
        ))
    });

    write_export(&report, args.format, &output)?;
    println!("Budget exported to: {}", output.display());

    Ok(())
}
