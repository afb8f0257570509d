//! User profile and bill entries
//!
//! The profile is everything the budget engine needs to know about a
//! household. It is edited between computations and never read back from the
//! engine's output.

use serde::{Deserialize, Serialize};

use super::cadence::Cadence;
use super::category::Category;
use super::household::{FilingStatus, HousingType};
use super::ids::BillId;
use super::known_bills::{BenchmarkKey, KnownBill};

/// Parse a user-entered money amount.
///
/// Accepts "1500", "1,500.00" and "$1500". Anything unparseable, non-finite
/// or negative becomes zero.
pub fn parse_amount(s: &str) -> f64 {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    sanitize_amount(cleaned.parse::<f64>().unwrap_or(0.0))
}

/// Coerce an amount to a finite, non-negative value
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A recurring bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillEntry {
    pub id: BillId,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub cadence: Cadence,
    /// Reference statistic this bill is benchmarked against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<BenchmarkKey>,
}

impl BillEntry {
    /// Create a new bill in the generic bill category
    pub fn new(name: impl Into<String>, amount: f64, cadence: Cadence) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            category: Category::Bill,
            amount: sanitize_amount(amount),
            cadence,
            key: None,
        }
    }

    /// Create a bill from the known-bill catalogue
    pub fn from_known(known: &KnownBill, amount: f64, cadence: Cadence) -> Self {
        Self::new(known.label, amount, cadence)
            .with_category(known.category)
            .with_key(known.key)
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_key(mut self, key: BenchmarkKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Fill in category and benchmark key from the catalogue when the name
    /// matches a known bill. Returns whether a match was found.
    pub fn auto_detect(&mut self) -> bool {
        match KnownBill::find_by_label(&self.name) {
            Some(known) => {
                self.name = known.label.to_string();
                self.category = known.category;
                self.key = Some(known.key);
                true
            }
            None => false,
        }
    }
}

/// Everything the engine needs to compute a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Gross income at `income_cadence`
    pub income: f64,
    pub income_cadence: Cadence,
    pub filing_status: FilingStatus,
    /// Two-letter state code, or "US" for national averages
    pub location: String,
    pub housing_type: HousingType,
    pub housing_cost: f64,
    pub housing_cadence: Cadence,
    pub medical_premium: f64,
    pub premium_cadence: Cadence,
    /// Annual out-of-pocket maximum
    pub medical_oop_max: f64,
    /// Bills in display order
    pub bills: Vec<BillEntry>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            income: 0.0,
            income_cadence: Cadence::Annual,
            filing_status: FilingStatus::Single,
            location: "US".to_string(),
            housing_type: HousingType::Rent,
            housing_cost: 0.0,
            housing_cadence: Cadence::Monthly,
            medical_premium: 0.0,
            premium_cadence: Cadence::Monthly,
            medical_oop_max: 0.0,
            bills: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Create an empty profile for a location with the given income cadence
    pub fn new(location: impl Into<String>, income_cadence: Cadence) -> Self {
        Self {
            location: location.into(),
            income_cadence,
            ..Self::default()
        }
    }

    /// Add a bill to the top of the list
    pub fn add_bill(&mut self, bill: BillEntry) {
        self.bills.insert(0, bill);
    }

    /// Find a bill by ID (display form or prefix) or exact name
    pub fn find_bill(&self, query: &str) -> Option<&BillEntry> {
        self.find_bill_index(query).map(|i| &self.bills[i])
    }

    /// Mutable variant of [`UserProfile::find_bill`]
    pub fn find_bill_mut(&mut self, query: &str) -> Option<&mut BillEntry> {
        self.find_bill_index(query).map(move |i| &mut self.bills[i])
    }

    /// Remove a bill, returning it if it existed
    pub fn remove_bill(&mut self, query: &str) -> Option<BillEntry> {
        self.find_bill_index(query).map(|i| self.bills.remove(i))
    }

    fn find_bill_index(&self, query: &str) -> Option<usize> {
        self.bills
            .iter()
            .position(|b| b.id.matches(query))
            .or_else(|| {
                let query = query.trim();
                self.bills
                    .iter()
                    .position(|b| b.name.eq_ignore_ascii_case(query))
            })
    }
}
