//! Summary CLI command
//!
//! Computes the budget for the current profile and prints the dashboard.

use clap::Args;

use super::use_color;
use crate::config::settings::Settings;
use crate::error::BudgeterResult;
use crate::reports::BudgetSummaryReport;
use crate::services::{ProfileService, ProfileSource};
use crate::storage::Storage;

/// Options for `budgeter summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Print the computed budget as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> BudgeterResult<()> {
    let reference = storage.reference_data()?;
    let resolved =
        ProfileService::new(storage, settings).resolve(&reference.geo, &mut rand::thread_rng())?;
    let report = BudgetSummaryReport::generate(resolved.profile, resolved.source, &reference);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
        return Ok(());
    }

    print!(
        "{}",
        report.format_terminal(&settings.currency_symbol, use_color(args.no_color))
    );

    if report.source != ProfileSource::Remembered && report.profile.income <= 0.0 {
        println!();
        println!("No income set. Start with 'budgeter profile set --income <amount>'.");
    }

    Ok(())
}
