//! Reference data listings
//!
//! Tables for the values accepted on the command line: locations, known
//! bills, cadences and categories.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::category::category_info;
use super::report::format_money;
use crate::models::{BenchmarkKey, Cadence, Category, TaxTables, KNOWN_BILLS, NATIONAL_CODE};
use crate::storage::ReferenceData;

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Income Tax")]
    income_tax: &'static str,
    #[tabled(rename = "Avg Rent")]
    rent: String,
}

#[derive(Tabled)]
struct KnownBillRow {
    #[tabled(rename = "Name")]
    label: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Benchmark")]
    key: &'static str,
}

#[derive(Tabled)]
struct CadenceRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Per Month")]
    multiplier: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Bucket")]
    kind: &'static str,
}

fn render<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

fn has_income_tax(tax: &TaxTables, code: &str) -> bool {
    tax.state(code).is_some_and(|s| {
        s.brackets
            .single
            .iter()
            .chain(s.brackets.married.iter())
            .flatten()
            .any(|b| b.rate > 0.0)
    })
}

/// Locations accepted by `--location`, national first
pub fn format_state_list(data: &ReferenceData, symbol: &str) -> String {
    let national = std::iter::once(StateRow {
        code: NATIONAL_CODE.into(),
        name: "National average".into(),
        income_tax: "-",
        rent: format_money(data.geo.national.average(BenchmarkKey::HousingRent), symbol),
    });

    let states = data.states().into_iter().map(|(code, name)| StateRow {
        code: code.to_string(),
        name: name.to_string(),
        income_tax: if has_income_tax(&data.tax, code) { "yes" } else { "no" },
        rent: data
            .geo
            .state(code)
            .and_then(|s| s.get(BenchmarkKey::HousingRent))
            .map(|v| format_money(v, symbol))
            .unwrap_or_else(|| "-".into()),
    });

    render(national.chain(states))
}

/// Bill names recognised by auto-detection
pub fn format_known_bills() -> String {
    render(KNOWN_BILLS.iter().map(|kb| KnownBillRow {
        label: kb.label,
        category: kb.category.key(),
        key: kb.key.as_str(),
    }))
}

/// Cadence keys with their monthly multipliers
pub fn format_cadences() -> String {
    render(Cadence::ALL.into_iter().map(|c| CadenceRow {
        key: c.key(),
        label: c.label(),
        multiplier: format!("{:.4}", c.monthly_multiplier()),
    }))
}

/// Category keys with their labels and bucket kinds
pub fn format_categories() -> String {
    render(Category::ALL.into_iter().map(|c| {
        let info = category_info(c);
        CategoryRow {
            key: c.key(),
            label: info.label,
            kind: info.kind.label(),
        }
    }))
}
