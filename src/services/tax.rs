//! Tax estimation
//!
//! Progressive bracket application plus federal (payroll + income) and state
//! income tax. Everything here is annual.

use tracing::debug;

use crate::models::{FederalTaxTable, FilingStatus, TaxBracket, TaxTables};

/// Annual federal liabilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FederalTax {
    /// Flat payroll (FICA) tax on gross income
    pub payroll: f64,
    /// Progressive income tax on income above the standard deduction
    pub federal: f64,
    pub total: f64,
}

/// Apply a marginal bracket schedule to taxable income.
///
/// Brackets must be in ascending cap order. Income above the last cap is
/// taxed at the last bracket's rate. Zero or negative income owes nothing.
pub fn apply_brackets(taxable_income: f64, brackets: &[TaxBracket]) -> f64 {
    let mut tax = 0.0;
    let mut previous_cap = 0.0;

    for bracket in brackets {
        if taxable_income <= previous_cap {
            return tax;
        }
        let in_bracket = taxable_income.min(bracket.cap) - previous_cap;
        tax += in_bracket * bracket.rate;
        previous_cap = bracket.cap;
    }

    if let Some(last) = brackets.last() {
        if taxable_income > previous_cap {
            tax += (taxable_income - previous_cap) * last.rate;
        }
    }

    tax
}

/// Taxable income after a deduction, floored at zero
pub fn taxable_income(gross_annual: f64, deduction: f64) -> f64 {
    (gross_annual - deduction).max(0.0)
}

/// Payroll and federal income tax on gross annual income
pub fn compute_federal(
    gross_annual: f64,
    status: FilingStatus,
    federal: &FederalTaxTable,
) -> FederalTax {
    let payroll = gross_annual * federal.fica_rate;
    let taxable = taxable_income(gross_annual, federal.deduction(status));
    let federal_tax = apply_brackets(taxable, federal.brackets(status));

    debug!(
        gross_annual,
        taxable,
        payroll,
        federal = federal_tax,
        status = %status,
        "computed federal tax"
    );

    FederalTax {
        payroll,
        federal: federal_tax,
        total: payroll + federal_tax,
    }
}

/// State income tax on gross annual income.
///
/// `location` must already be normalized. A location without a schedule owes
/// no state tax.
pub fn compute_state(
    gross_annual: f64,
    location: &str,
    status: FilingStatus,
    tables: &TaxTables,
) -> f64 {
    let Some(state) = tables.state(location) else {
        debug!(location, "no state income tax schedule");
        return 0.0;
    };

    let taxable = taxable_income(gross_annual, state.deduction(status));
    let tax = apply_brackets(taxable, state.brackets(status));
    debug!(location, taxable, tax, "computed state tax");
    tax
}
