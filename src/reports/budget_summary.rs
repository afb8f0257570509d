//! Budget Summary Report
//!
//! The dashboard view of a computed budget: income and taxes, fixed costs,
//! discretionary cash, benchmark insights and the allocation chart. Also
//! exports the same figures as a spreadsheet-friendly CSV.

use std::io::Write;

use crate::display::report::{double_separator, format_money, format_money_colored, separator};
use crate::display::Allocation;
use crate::error::BudgeterResult;
use crate::models::{
    normalize_location, BudgetResult, Cadence, Severity, UserProfile, NATIONAL_CODE,
};
use crate::services::{normalize_to_monthly, BudgetEngine, ProfileSource};
use crate::storage::ReferenceData;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

fn line(label: &str, value: String) -> String {
    format!("{:<32}{:>16}\n", label, value)
}

fn sub_line(label: &str, value: String) -> String {
    format!("  {:<30}{:>16}\n", label, value)
}

/// CSV header for the summary export
pub const CSV_HEADER: [&str; 5] = [
    "Category",
    "Name",
    "Input Amount",
    "Frequency",
    "Normalized Monthly",
];

/// A computed budget plus everything needed to present it
#[derive(Debug, Clone)]
pub struct BudgetSummaryReport {
    pub profile: UserProfile,
    pub source: ProfileSource,
    /// Display name of the profile's location
    pub location_name: String,
    pub result: BudgetResult,
    pub allocation: Option<Allocation>,
}

impl BudgetSummaryReport {
    /// Compute the budget for a profile and prepare it for display
    pub fn generate(
        profile: UserProfile,
        source: ProfileSource,
        reference: &ReferenceData,
    ) -> Self {
        let result = BudgetEngine::new(&reference.tax, &reference.geo).compute(&profile);
        let allocation = Allocation::from_result(&result);
        let location = normalize_location(&profile.location);
        let location_name = if location == NATIONAL_CODE {
            "National".to_string()
        } else {
            reference.geo.state_name(&location).to_string()
        };

        Self {
            profile,
            source,
            location_name,
            result,
            allocation,
        }
    }

    /// Intro line shown when the profile is sample data
    pub fn intro_note(&self) -> Option<String> {
        match &self.source {
            ProfileSource::Seeded { state_name } => Some(format!(
                "Loaded {} averages vs National benchmarks. Edit the profile to make it yours.",
                state_name
            )),
            _ => None,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, color: bool) -> String {
        let r = &self.result;
        let money = |amount: f64| format_money(amount, symbol);
        let mut output = String::new();

        output.push_str(&format!("Budget Summary - {}\n", self.location_name));
        output.push_str(&double_separator(WIDTH));
        output.push('\n');

        if let Some(note) = self.intro_note() {
            output.push_str(&format!("i {}\n\n", note));
        }

        output.push_str(&line("Gross monthly income", money(r.income.gross_monthly)));
        output.push_str(&line("Taxes (monthly)", money(r.taxes.monthly_total)));
        output.push_str(&sub_line("Payroll (annual)", money(r.taxes.payroll_annual)));
        output.push_str(&sub_line("Federal (annual)", money(r.taxes.federal_annual)));
        output.push_str(&sub_line("State (annual)", money(r.taxes.state_annual)));
        output.push_str(&line("Net monthly income", money(r.income.net_monthly)));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        output.push_str(&line("Housing", money(r.spending.housing)));
        for row in &r.spending.breakdown {
            output.push_str(&sub_line(&row.name, money(row.monthly_cost)));
        }
        output.push_str(&line("Total fixed costs", money(r.spending.total_fixed)));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        let discretionary = if color {
            format_money_colored(r.spending.discretionary, symbol)
        } else {
            money(r.spending.discretionary)
        };
        output.push_str(&line("Discretionary", discretionary));
        if r.is_short() {
            output.push_str("  Monthly obligations exceed net income.\n");
        }

        if !r.insights.is_empty() {
            output.push_str("\nInsights\n");
            for insight in &r.insights {
                let marker = match insight.severity {
                    Severity::Good => "+",
                    Severity::Warn => "!",
                };
                output.push_str(&format!("  {} {}\n", marker, insight.message));
            }
        }

        if let Some(allocation) = &self.allocation {
            output.push_str("\nAllocation of gross income\n");
            output.push_str(&allocation.format_terminal(symbol, BAR_WIDTH, color));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgeterResult<()> {
        let p = &self.profile;
        let r = &self.result;
        let cents = |v: f64| format!("{:.2}", v);
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(CSV_HEADER)?;
        csv.write_record([
            "Income".to_string(),
            "Gross Income".to_string(),
            p.income.to_string(),
            p.income_cadence.key().to_string(),
            cents(r.income.gross_monthly),
        ])?;
        csv.write_record([
            "Income",
            "Net Income (Post-Tax)",
            "-",
            "-",
            cents(r.income.net_monthly).as_str(),
        ])?;
        csv.write_record([
            "Tax",
            "Total Estimated Tax",
            "-",
            "-",
            cents(r.taxes.monthly_total).as_str(),
        ])?;
        csv.write_record([
            "Housing".to_string(),
            p.housing_type.key().to_uppercase(),
            p.housing_cost.to_string(),
            p.housing_cadence.key().to_string(),
            cents(r.spending.housing),
        ])?;
        csv.write_record([
            "Health".to_string(),
            "Premium".to_string(),
            p.medical_premium.to_string(),
            p.premium_cadence.key().to_string(),
            cents(normalize_to_monthly(p.medical_premium, p.premium_cadence)),
        ])?;
        csv.write_record([
            "Health".to_string(),
            "Max OOP (Annual)".to_string(),
            p.medical_oop_max.to_string(),
            Cadence::Annual.key().to_string(),
            cents(p.medical_oop_max / 12.0),
        ])?;

        for bill in &p.bills {
            csv.write_record([
                bill.category.key().to_string(),
                bill.name.clone(),
                bill.amount.to_string(),
                bill.cadence.key().to_string(),
                cents(normalize_to_monthly(bill.amount, bill.cadence)),
            ])?;
        }

        csv.write_record([
            "SUMMARY",
            "Total Fixed Costs",
            "-",
            "-",
            cents(r.spending.total_fixed).as_str(),
        ])?;
        csv.write_record([
            "SUMMARY",
            "LEFTOVER CASH",
            "-",
            "-",
            cents(r.spending.discretionary).as_str(),
        ])?;
        csv.flush()?;

        Ok(())
    }
}
