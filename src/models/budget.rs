//! Budget computation output
//!
//! A `BudgetResult` is rebuilt from scratch on every computation; nothing in
//! it is persisted on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::known_bills::BenchmarkKey;

/// Direction of a benchmark deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Meaningfully below the reference average
    Good,
    /// Meaningfully above the reference average
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

/// A benchmark observation shown alongside the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub message: String,
}

/// One line of the monthly spending breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<BenchmarkKey>,
    pub monthly_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub gross_monthly: f64,
    pub net_monthly: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Annual payroll (FICA) tax
    pub payroll_annual: f64,
    /// Annual federal income tax
    pub federal_annual: f64,
    /// Annual state income tax
    pub state_annual: f64,
    /// All taxes, per month
    pub monthly_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSummary {
    /// Bills plus safe medical cost. Housing is not included.
    pub total_fixed: f64,
    /// Monthly housing cost, tracked apart from `total_fixed`
    pub housing: f64,
    /// Net income minus housing minus total fixed; negative when over budget
    pub discretionary: f64,
    pub breakdown: Vec<BreakdownRow>,
}

/// The complete result of a budget computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub income: IncomeSummary,
    pub taxes: TaxSummary,
    pub spending: SpendingSummary,
    pub insights: Vec<Insight>,
}

impl BudgetResult {
    /// Whether monthly obligations exceed net income
    pub fn is_short(&self) -> bool {
        self.spending.discretionary < 0.0
    }
}
