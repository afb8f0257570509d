//! CSV Export functionality
//!
//! Writes the budget summary as spreadsheet rows: the inputs as entered,
//! their cadence, and the normalized monthly figure next to each.

use std::io::Write;

use crate::error::BudgeterResult;
use crate::reports::BudgetSummaryReport;

/// Export the budget summary to CSV
pub fn export_summary_csv<W: Write>(
    report: &BudgetSummaryReport,
    writer: &mut W,
) -> BudgeterResult<()> {
    report.export_csv(writer)
}
