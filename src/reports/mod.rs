//! Reports module for Budgeter
//!
//! Provides the budget summary: the terminal dashboard and the CSV export
//! built from one computed budget.

pub mod budget_summary;

pub use budget_summary::{BudgetSummaryReport, CSV_HEADER};
