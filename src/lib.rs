//! Budgeter - terminal personal budgeting calculator
//!
//! This library turns a household profile (income, filing status, location,
//! housing, health coverage and recurring bills) into a monthly budget:
//! estimated payroll, federal and state taxes, fixed costs, discretionary
//! cash, and insights comparing each cost with regional averages.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Profile, reference data and budget result types
//! - `services`: The budget engine and profile editing
//! - `storage`: JSON file storage and reference-data loading
//! - `reports`: The budget summary dashboard and CSV rows
//! - `display`: Terminal formatting helpers
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `budgeter` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budgeter::models::{Cadence, UserProfile};
//! use budgeter::services::compute_budget;
//! use budgeter::storage::ReferenceData;
//!
//! let reference = ReferenceData::bundled()?;
//! let mut profile = UserProfile::new("US", Cadence::Annual);
//! profile.income = 60000.0;
//! let result = compute_budget(&profile, &reference.tax, &reference.geo);
//! println!("{}", result.spending.discretionary);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgeterError, BudgeterResult};
