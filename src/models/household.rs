//! Household attributes that select tax schedules and benchmarks

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::known_bills::BenchmarkKey;

/// Tax filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilingStatus {
    #[default]
    Single,
    Married,
}

impl FilingStatus {
    /// Anything other than the exact text "married" files as single
    pub fn parse(s: &str) -> Self {
        if s == "married" {
            Self::Married
        } else {
            Self::Single
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for FilingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for FilingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Whether the household rents or owns its home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HousingType {
    #[default]
    Rent,
    Own,
}

impl HousingType {
    /// Anything other than the exact text "own" is treated as renting
    pub fn parse(s: &str) -> Self {
        if s == "own" {
            Self::Own
        } else {
            Self::Rent
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Own => "own",
        }
    }

    /// Reference statistic that housing cost is compared against
    pub const fn benchmark_key(&self) -> BenchmarkKey {
        match self {
            Self::Rent => BenchmarkKey::HousingRent,
            Self::Own => BenchmarkKey::HousingMortgage,
        }
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for HousingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for HousingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
