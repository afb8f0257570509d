//! Profile display formatting
//!
//! Formats the profile and its bills for terminal output in detail and
//! table views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_money, truncate};
use crate::models::{BenchmarkKey, BillEntry, GeoStats, Severity, UserProfile};
use crate::services::{mark, mark_bill, normalize_to_monthly};

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Cadence")]
    cadence: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Benchmark")]
    key: String,
    #[tabled(rename = "vs Avg")]
    mark: &'static str,
}

/// Short text for an input mark
pub fn mark_label(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Good) => "below avg",
        Some(Severity::Warn) => "above avg",
        None => "-",
    }
}

fn mark_suffix(severity: Option<Severity>) -> String {
    match severity {
        Some(_) => format!("  [{}]", mark_label(severity)),
        None => String::new(),
    }
}

/// Format bills as a table, in display order, each marked against `stats`
pub fn format_bill_list(bills: &[BillEntry], stats: &GeoStats, symbol: &str) -> String {
    if bills.is_empty() {
        return "No bills yet.\n\nAdd one with 'budgeter bill add <name> <amount>'.".to_string();
    }

    let rows = bills.iter().map(|bill| BillRow {
        id: bill.id.to_string(),
        name: truncate(&bill.name, 28),
        category: bill.category.to_string(),
        amount: format_money(bill.amount, symbol),
        cadence: bill.cadence.label().to_string(),
        monthly: format_money(normalize_to_monthly(bill.amount, bill.cadence), symbol),
        key: bill.key.map(|k| k.to_string()).unwrap_or_else(|| "-".into()),
        mark: mark_label(mark_bill(bill, stats)),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single bill for terminal display
pub fn format_bill_details(bill: &BillEntry, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Bill: {}\n", bill.name));
    output.push_str(&format!("  ID:        {}\n", bill.id));
    output.push_str(&format!("  Category:  {}\n", bill.category));
    output.push_str(&format!(
        "  Amount:    {} {}\n",
        format_money(bill.amount, symbol),
        bill.cadence.label()
    ));
    output.push_str(&format!(
        "  Monthly:   {}\n",
        format_money(normalize_to_monthly(bill.amount, bill.cadence), symbol)
    ));
    if let Some(key) = bill.key {
        output.push_str(&format!("  Benchmark: {}\n", key));
    }
    output
}

/// Format the profile's scalar fields followed by its bills.
///
/// Housing, premium and bills are marked against `stats`.
pub fn format_profile(
    profile: &UserProfile,
    location_name: &str,
    stats: &GeoStats,
    symbol: &str,
) -> String {
    let housing = normalize_to_monthly(profile.housing_cost, profile.housing_cadence);
    let housing_mark = mark(housing, stats.average(profile.housing_type.benchmark_key()));
    let premium = normalize_to_monthly(profile.medical_premium, profile.premium_cadence);
    let premium_mark = mark(premium, stats.average(BenchmarkKey::HealthInsurance));

    let mut output = String::new();

    output.push_str("Profile\n");
    output.push_str(&format!(
        "  Income:       {} {}\n",
        format_money(profile.income, symbol),
        profile.income_cadence.label()
    ));
    output.push_str(&format!("  Filing:       {}\n", profile.filing_status));
    output.push_str(&format!(
        "  Location:     {} ({})\n",
        profile.location, location_name
    ));
    output.push_str(&format!(
        "  Housing:      {} {} ({}){}\n",
        format_money(profile.housing_cost, symbol),
        profile.housing_cadence.label(),
        profile.housing_type,
        mark_suffix(housing_mark)
    ));
    output.push_str(&format!(
        "  Premium:      {} {}{}\n",
        format_money(profile.medical_premium, symbol),
        profile.premium_cadence.label(),
        mark_suffix(premium_mark)
    ));
    output.push_str(&format!(
        "  OOP max:      {} per year\n",
        format_money(profile.medical_oop_max, symbol)
    ));

    output.push_str(&format!("\nBills ({})\n", profile.bills.len()));
    output.push_str(&format_bill_list(&profile.bills, stats, symbol));
    output.push('\n');
    output
}
