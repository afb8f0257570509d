//! Tax reference tables
//!
//! Mirrors the shape of `tax_tables.json`: one federal schedule plus an
//! optional schedule per state code. Brackets are stored as (cap, rate) pairs
//! with caps in ascending order. The ordering is a data precondition and is
//! not checked when computing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::household::FilingStatus;

/// One marginal tier: income up to `cap` (above the previous cap) is taxed at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub cap: f64,
    /// Fraction, e.g. 0.22
    pub rate: f64,
}

impl TaxBracket {
    pub const fn new(cap: f64, rate: f64) -> Self {
        Self { cap, rate }
    }
}

/// A value per filing status; either side may be absent in the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByFilingStatus<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub married: Option<T>,
}

impl<T> Default for ByFilingStatus<T> {
    fn default() -> Self {
        Self {
            single: None,
            married: None,
        }
    }
}

impl<T> ByFilingStatus<T> {
    pub fn new(single: T, married: T) -> Self {
        Self {
            single: Some(single),
            married: Some(married),
        }
    }

    pub fn get(&self, status: FilingStatus) -> Option<&T> {
        match status {
            FilingStatus::Single => self.single.as_ref(),
            FilingStatus::Married => self.married.as_ref(),
        }
    }
}

/// Federal schedule plus the flat payroll (FICA) rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FederalTaxTable {
    #[serde(default)]
    pub fica_rate: f64,
    #[serde(default)]
    pub standard_deduction: ByFilingStatus<f64>,
    #[serde(default)]
    pub brackets: ByFilingStatus<Vec<TaxBracket>>,
}

impl FederalTaxTable {
    /// Standard deduction for a status; zero when the table has none
    pub fn deduction(&self, status: FilingStatus) -> f64 {
        self.standard_deduction.get(status).copied().unwrap_or(0.0)
    }

    /// Brackets for a status; empty when the table has none
    pub fn brackets(&self, status: FilingStatus) -> &[TaxBracket] {
        self.brackets.get(status).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Income tax schedule for a single state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StateTaxTable {
    #[serde(default)]
    pub deductions: ByFilingStatus<f64>,
    #[serde(default)]
    pub brackets: ByFilingStatus<Vec<TaxBracket>>,
}

impl StateTaxTable {
    pub fn deduction(&self, status: FilingStatus) -> f64 {
        self.deductions.get(status).copied().unwrap_or(0.0)
    }

    pub fn brackets(&self, status: FilingStatus) -> &[TaxBracket] {
        self.brackets.get(status).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The complete tax reference dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TaxTables {
    pub federal: FederalTaxTable,
    /// Keyed by upper-case state code
    #[serde(default)]
    pub states: BTreeMap<String, StateTaxTable>,
}

impl TaxTables {
    /// Schedule for a state code, if the state levies an income tax
    pub fn state(&self, code: &str) -> Option<&StateTaxTable> {
        self.states.get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "federal": {
            "fica_rate": 0.0765,
            "standard_deduction": {"single": 15000, "married": 30000},
            "brackets": {
                "single": [{"cap": 11925, "rate": 0.10}, {"cap": 999999999, "rate": 0.37}],
                "married": [{"cap": 23850, "rate": 0.10}]
            }
        },
        "states": {
            "OR": {
                "deductions": {"single": 2745},
                "brackets": {"single": [{"cap": 4300, "rate": 0.0475}]}
            }
        }
    }"#;

    #[test]
    fn test_parse_reference_shape() {
        let tables: TaxTables = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(tables.federal.fica_rate, 0.0765);
        assert_eq!(tables.federal.deduction(FilingStatus::Married), 30000.0);
        assert_eq!(tables.federal.brackets(FilingStatus::Single).len(), 2);
        assert_eq!(
            tables.federal.brackets(FilingStatus::Single)[0],
            TaxBracket::new(11925.0, 0.10)
        );
    }

    #[test]
    fn test_missing_status_entries_default_to_empty() {
        let tables: TaxTables = serde_json::from_str(SAMPLE).unwrap();
        let oregon = tables.state("OR").unwrap();
        assert_eq!(oregon.deduction(FilingStatus::Single), 2745.0);
        assert_eq!(oregon.deduction(FilingStatus::Married), 0.0);
        assert!(oregon.brackets(FilingStatus::Married).is_empty());
    }

    #[test]
    fn test_unknown_state() {
        let tables: TaxTables = serde_json::from_str(SAMPLE).unwrap();
        assert!(tables.state("TX").is_none());
    }
}
