//! Geographic cost-of-living statistics
//!
//! Mirrors `geo_stats.json`: a national entry plus one entry per state, each a
//! map of benchmark key to average monthly cost.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::known_bills::BenchmarkKey;

/// Location code that always resolves to national averages
pub const NATIONAL_CODE: &str = "US";

/// Canonical form of a location code: trimmed and upper-cased, with an
/// empty code meaning national
pub fn normalize_location(code: &str) -> String {
    let code = code.trim();
    if code.is_empty() {
        NATIONAL_CODE.to_string()
    } else {
        code.to_uppercase()
    }
}

/// Reference averages for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GeoStats {
    /// Display name (states only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Benchmark key -> average monthly amount
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl GeoStats {
    /// Average for a benchmark key, if the dataset has one
    pub fn get(&self, key: BenchmarkKey) -> Option<f64> {
        self.values.get(key.as_str()).copied()
    }

    /// Average for a benchmark key, zero when missing
    pub fn average(&self, key: BenchmarkKey) -> f64 {
        self.get(key).unwrap_or(0.0)
    }
}

/// The complete geo reference dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GeoData {
    #[serde(default)]
    pub national: GeoStats,
    /// Keyed by upper-case state code
    #[serde(default)]
    pub states: BTreeMap<String, GeoStats>,
}

impl GeoData {
    pub fn state(&self, code: &str) -> Option<&GeoStats> {
        self.states.get(code)
    }

    /// Display name for a state code, falling back to the code itself
    pub fn state_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.state(code)
            .and_then(|s| s.name.as_deref())
            .unwrap_or(code)
    }
}
