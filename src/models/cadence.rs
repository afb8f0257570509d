//! Payment cadence model
//!
//! Every recurring amount carries a cadence. Amounts are normalized to a
//! monthly basis with a fixed multiplier table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How often an amount is paid or received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cadence {
    Weekly,
    BiWeekly,
    SemiMonthly,
    #[default]
    Monthly,
    Quarterly,
    /// Every six months
    BiAnnual,
    Annual,
}

impl Cadence {
    /// All cadences in display order
    pub const ALL: [Cadence; 7] = [
        Cadence::Weekly,
        Cadence::BiWeekly,
        Cadence::SemiMonthly,
        Cadence::Monthly,
        Cadence::Quarterly,
        Cadence::BiAnnual,
        Cadence::Annual,
    ];

    /// Multiplier converting an amount at this cadence to its monthly equivalent.
    ///
    /// Weekly and bi-weekly are the rounded constants 4.333 and 2.166, not
    /// 52/12 and 26/12. Output depends on the literal values.
    pub const fn monthly_multiplier(&self) -> f64 {
        match self {
            Self::Weekly => 4.333,
            Self::BiWeekly => 2.166,
            Self::SemiMonthly => 2.0,
            Self::Monthly => 1.0,
            Self::Quarterly => 1.0 / 3.0,
            Self::BiAnnual => 1.0 / 6.0,
            Self::Annual => 1.0 / 12.0,
        }
    }

    /// Number of payments at this cadence in a year
    pub const fn periods_per_year(&self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::BiWeekly => 26,
            Self::SemiMonthly => 24,
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::BiAnnual => 2,
            Self::Annual => 1,
        }
    }

    /// Stable key used in data files and on the command line
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "biweekly",
            Self::SemiMonthly => "semimonthly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::BiAnnual => "biannual",
            Self::Annual => "annual",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::BiWeekly => "Bi-Weekly",
            Self::SemiMonthly => "Semi-Monthly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::BiAnnual => "Bi-Annual (6mo)",
            Self::Annual => "Annual",
        }
    }

    /// Parse a cadence key, returning None for anything but an exact key
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == s)
    }

    /// Parse a cadence key; unknown keys fall back to monthly
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for Cadence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Cadence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&raw))
    }
}
