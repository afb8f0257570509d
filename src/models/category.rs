//! Spending category tags
//!
//! Categories form a closed set. Presentation attributes (labels, colours,
//! bucket types) are looked up from `display::category`, never stored here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category tag for a line in the spending breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Tax,
    Housing,
    Health,
    Pretax,
    Food,
    Util,
    Bill,
    Debt,
    /// Computed remainder; output-only
    Leftover,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 9] = [
        Category::Tax,
        Category::Housing,
        Category::Health,
        Category::Pretax,
        Category::Food,
        Category::Util,
        Category::Bill,
        Category::Debt,
        Category::Leftover,
    ];

    /// Stable key used in data files and on the command line
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Tax => "tax",
            Self::Housing => "housing",
            Self::Health => "health",
            Self::Pretax => "pretax",
            Self::Food => "food",
            Self::Util => "util",
            Self::Bill => "bill",
            Self::Debt => "debt",
            Self::Leftover => "leftover",
        }
    }

    /// Parse any category key, including output-only ones
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
    }

    /// Parse a category supplied as input.
    ///
    /// Unknown tags and the output-only `leftover` tag resolve to `Bill`.
    pub fn parse_input(s: &str) -> Self {
        match Self::parse(s) {
            Some(Self::Leftover) | None => Self::Bill,
            Some(category) => category,
        }
    }

    /// Whether a user may assign this category to a bill
    pub fn is_input(&self) -> bool {
        !matches!(self, Self::Leftover)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Bill
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_input(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(Category::parse("util"), Some(Category::Util));
        assert_eq!(Category::parse("DEBT"), Some(Category::Debt));
        assert_eq!(Category::parse("leftover"), Some(Category::Leftover));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_parse_input_fallbacks() {
        assert_eq!(Category::parse_input("food"), Category::Food);
        assert_eq!(Category::parse_input("groceries"), Category::Bill);
        assert_eq!(Category::parse_input("leftover"), Category::Bill);
        assert_eq!(Category::parse_input(""), Category::Bill);
    }

    #[test]
    fn test_is_input() {
        assert!(Category::Health.is_input());
        assert!(!Category::Leftover.is_input());
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Category::Pretax).unwrap(), "\"pretax\"");
        let parsed: Category = serde_json::from_str("\"mystery\"").unwrap();
        assert_eq!(parsed, Category::Bill);
    }
}
