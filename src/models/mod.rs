//! Core data models for Budgeter
//!
//! This module contains the data structures of the budgeting domain: the
//! user profile and its bills, the tax and geo reference datasets, and the
//! computed budget result.

pub mod budget;
pub mod cadence;
pub mod category;
pub mod geo_stats;
pub mod household;
pub mod ids;
pub mod known_bills;
pub mod profile;
pub mod tax_tables;

pub use budget::{
    BreakdownRow, BudgetResult, IncomeSummary, Insight, Severity, SpendingSummary, TaxSummary,
};
pub use cadence::Cadence;
pub use category::Category;
pub use geo_stats::{normalize_location, GeoData, GeoStats, NATIONAL_CODE};
pub use household::{FilingStatus, HousingType};
pub use ids::BillId;
pub use known_bills::{BenchmarkKey, KnownBill, KNOWN_BILLS};
pub use profile::{parse_amount, sanitize_amount, BillEntry, UserProfile};
pub use tax_tables::{ByFilingStatus, FederalTaxTable, StateTaxTable, TaxBracket, TaxTables};
