//! Display formatting for terminal output
//!
//! Provides utilities for formatting profiles, reference data and the
//! allocation chart for terminal display.

pub mod allocation;
pub mod category;
pub mod data;
pub mod profile;
pub mod report;

pub use allocation::{Allocation, Remainder};
pub use category::{category_info, BucketKind, CategoryInfo};
pub use profile::{format_bill_details, format_bill_list, format_profile};
pub use report::format_money;
