//! Category presentation
//!
//! Label, terminal color and bucket kind for every category, kept in one
//! static table keyed by the category itself.

use crate::models::Category;

/// How a category bucket behaves in the allocation chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    /// Obligations that are hard to change quickly
    Core,
    /// Everyday spending that can be trimmed
    Flex,
    /// Derived from the other buckets, never entered directly
    Calc,
}

impl BucketKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Flex => "flex",
            Self::Calc => "calc",
        }
    }
}

/// Presentation attributes for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    /// ANSI foreground color escape
    pub color: &'static str,
    pub kind: BucketKind,
}

static CATEGORY_INFO: [CategoryInfo; 9] = [
    CategoryInfo {
        category: Category::Tax,
        label: "Taxes",
        color: "\x1b[90m",
        kind: BucketKind::Core,
    },
    CategoryInfo {
        category: Category::Housing,
        label: "Housing",
        color: "\x1b[34m",
        kind: BucketKind::Core,
    },
    CategoryInfo {
        category: Category::Health,
        label: "Health",
        color: "\x1b[36m",
        kind: BucketKind::Core,
    },
    CategoryInfo {
        category: Category::Pretax,
        label: "Pretax",
        color: "\x1b[35m",
        kind: BucketKind::Core,
    },
    CategoryInfo {
        category: Category::Food,
        label: "Food",
        color: "\x1b[33m",
        kind: BucketKind::Flex,
    },
    CategoryInfo {
        category: Category::Util,
        label: "Utilities",
        color: "\x1b[94m",
        kind: BucketKind::Flex,
    },
    CategoryInfo {
        category: Category::Bill,
        label: "Bills",
        color: "\x1b[95m",
        kind: BucketKind::Flex,
    },
    CategoryInfo {
        category: Category::Debt,
        label: "Debt",
        color: "\x1b[91m",
        kind: BucketKind::Flex,
    },
    CategoryInfo {
        category: Category::Leftover,
        label: "Leftover",
        color: "\x1b[32m",
        kind: BucketKind::Calc,
    },
];

/// Presentation attributes for a category
pub fn category_info(category: Category) -> &'static CategoryInfo {
    let index = match category {
        Category::Tax => 0,
        Category::Housing => 1,
        Category::Health => 2,
        Category::Pretax => 3,
        Category::Food => 4,
        Category::Util => 5,
        Category::Bill => 6,
        Category::Debt => 7,
        Category::Leftover => 8,
    };
    &CATEGORY_INFO[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_info() {
        for category in Category::ALL {
            assert_eq!(category_info(category).category, category);
        }
    }

    #[test]
    fn test_labels_and_kinds() {
        assert_eq!(category_info(Category::Util).label, "Utilities");
        assert_eq!(category_info(Category::Tax).kind, BucketKind::Core);
        assert_eq!(category_info(Category::Food).kind, BucketKind::Flex);
        assert_eq!(category_info(Category::Leftover).kind, BucketKind::Calc);
        assert_eq!(BucketKind::Calc.label(), "calc");
    }
}
