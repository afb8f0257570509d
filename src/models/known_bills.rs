//! Benchmark keys and the catalogue of commonly tracked bills
//!
//! A benchmark key links a spending line to a reference average in the
//! geographic statistics. Known bills pair a key with a display label and a
//! default category so a bill typed by name can be benchmarked.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// Identifier of a reference statistic in the geo dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkKey {
    HousingRent,
    HousingMortgage,
    HealthInsurance,
    Electricity,
    Water,
    NaturalGas,
    Garbage,
    Internet,
    CellPhone,
    FoodAtHome,
    FoodAwayFromHome,
    CarInsurance,
    CarPayment,
    StudentLoan,
    LifeInsurance,
    HomeSecurity,
    Streaming,
    Retirement,
}

impl BenchmarkKey {
    pub const ALL: [BenchmarkKey; 18] = [
        BenchmarkKey::HousingRent,
        BenchmarkKey::HousingMortgage,
        BenchmarkKey::HealthInsurance,
        BenchmarkKey::Electricity,
        BenchmarkKey::Water,
        BenchmarkKey::NaturalGas,
        BenchmarkKey::Garbage,
        BenchmarkKey::Internet,
        BenchmarkKey::CellPhone,
        BenchmarkKey::FoodAtHome,
        BenchmarkKey::FoodAwayFromHome,
        BenchmarkKey::CarInsurance,
        BenchmarkKey::CarPayment,
        BenchmarkKey::StudentLoan,
        BenchmarkKey::LifeInsurance,
        BenchmarkKey::HomeSecurity,
        BenchmarkKey::Streaming,
        BenchmarkKey::Retirement,
    ];

    /// Key as it appears in the geo stats file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HousingRent => "housing_rent",
            Self::HousingMortgage => "housing_mortgage",
            Self::HealthInsurance => "health_insurance",
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::NaturalGas => "natural_gas",
            Self::Garbage => "garbage",
            Self::Internet => "internet",
            Self::CellPhone => "cell_phone",
            Self::FoodAtHome => "food_at_home",
            Self::FoodAwayFromHome => "food_away_from_home",
            Self::CarInsurance => "car_insurance",
            Self::CarPayment => "car_payment",
            Self::StudentLoan => "student_loan",
            Self::LifeInsurance => "life_insurance",
            Self::HomeSecurity => "home_security",
            Self::Streaming => "streaming",
            Self::Retirement => "retirement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|k| k.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A commonly tracked bill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownBill {
    pub key: BenchmarkKey,
    pub label: &'static str,
    pub category: Category,
}

pub static KNOWN_BILLS: [KnownBill; 15] = [
    KnownBill {
        key: BenchmarkKey::Electricity,
        label: "Electricity",
        category: Category::Util,
    },
    KnownBill {
        key: BenchmarkKey::Water,
        label: "Water/Sewer",
        category: Category::Util,
    },
    KnownBill {
        key: BenchmarkKey::NaturalGas,
        label: "Heating (Gas)",
        category: Category::Util,
    },
    KnownBill {
        key: BenchmarkKey::Garbage,
        label: "Garbage",
        category: Category::Util,
    },
    KnownBill {
        key: BenchmarkKey::Internet,
        label: "Internet",
        category: Category::Util,
    },
    KnownBill {
        key: BenchmarkKey::CellPhone,
        label: "Cell Phone",
        category: Category::Bill,
    },
    KnownBill {
        key: BenchmarkKey::FoodAtHome,
        label: "Groceries",
        category: Category::Food,
    },
    KnownBill {
        key: BenchmarkKey::FoodAwayFromHome,
        label: "Dining Out",
        category: Category::Food,
    },
    KnownBill {
        key: BenchmarkKey::CarInsurance,
        label: "Car Insurance",
        category: Category::Bill,
    },
    KnownBill {
        key: BenchmarkKey::CarPayment,
        label: "Car Payment",
        category: Category::Debt,
    },
    KnownBill {
        key: BenchmarkKey::StudentLoan,
        label: "Student Loan",
        category: Category::Debt,
    },
    KnownBill {
        key: BenchmarkKey::LifeInsurance,
        label: "Life Insurance",
        category: Category::Bill,
    },
    KnownBill {
        key: BenchmarkKey::HomeSecurity,
        label: "Home Security",
        category: Category::Bill,
    },
    KnownBill {
        key: BenchmarkKey::Streaming,
        label: "Streaming Services",
        category: Category::Bill,
    },
    KnownBill {
        key: BenchmarkKey::Retirement,
        label: "Retirement",
        category: Category::Pretax,
    },
];

impl KnownBill {
    /// Case-insensitive lookup by display label
    pub fn find_by_label(label: &str) -> Option<&'static KnownBill> {
        let label = label.trim();
        KNOWN_BILLS
            .iter()
            .find(|kb| kb.label.eq_ignore_ascii_case(label))
    }

    pub fn find_by_key(key: BenchmarkKey) -> Option<&'static KnownBill> {
        KNOWN_BILLS.iter().find(|kb| kb.key == key)
    }
}
