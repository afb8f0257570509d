//! Configuration module for Budgeter
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgeterPaths;
pub use settings::Settings;
