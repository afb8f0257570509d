//! Service layer for Budgeter
//!
//! The pure budgeting engine (frequency normalization, taxes, medical
//! buffering, benchmarking) plus the profile service that edits the
//! remembered profile on top of the storage layer.

pub mod benchmark;
pub mod budget;
pub mod frequency;
pub mod medical;
pub mod profile;
pub mod seed;
pub mod tax;

pub use benchmark::{mark, mark_bill, resolve_geo_stats};
pub use budget::{compute_budget, BudgetEngine};
pub use frequency::normalize_to_monthly;
pub use profile::{BillUpdate, ProfileService, ProfileSource, ProfileUpdate, ResolvedProfile};
pub use seed::{seed_random_profile, SeededProfile};
