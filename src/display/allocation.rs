//! Allocation chart
//!
//! Groups the budget into category buckets and renders them as horizontal
//! bars scaled against gross monthly income. Expenses are sorted largest
//! first; the leftover (or overage) row is always last.

use super::category::{category_info, CategoryInfo};
use super::report::{format_bar, format_money, paint};
use crate::models::{BudgetResult, Category};

/// Order buckets are accumulated and stacked in
pub const BUCKET_ORDER: [Category; 8] = [
    Category::Tax,
    Category::Pretax,
    Category::Health,
    Category::Housing,
    Category::Debt,
    Category::Util,
    Category::Bill,
    Category::Food,
];

/// Index into `BUCKET_ORDER` a category's amounts are added to.
/// Stray leftover rows count as bills.
const fn bucket_slot(category: Category) -> usize {
    match category {
        Category::Tax => 0,
        Category::Pretax => 1,
        Category::Health => 2,
        Category::Housing => 3,
        Category::Debt => 4,
        Category::Util => 5,
        Category::Bill | Category::Leftover => 6,
        Category::Food => 7,
    }
}

/// One expense bucket with its monthly total
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub info: &'static CategoryInfo,
    pub monthly: f64,
}

/// The row pinned below the expenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remainder {
    /// Money left after all expenses
    Leftover(f64),
    /// Expenses exceed gross income by this much
    Overage(f64),
}

/// Bucketed view of a budget result
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub gross_monthly: f64,
    /// Non-empty expense buckets, largest first
    pub expenses: Vec<Bucket>,
    pub remainder: Option<Remainder>,
}

impl Allocation {
    /// Bucket a result. Returns None when there is no income to scale against.
    pub fn from_result(result: &BudgetResult) -> Option<Self> {
        let gross = result.income.gross_monthly;
        if gross <= 0.0 {
            return None;
        }

        let mut totals = [0.0_f64; BUCKET_ORDER.len()];
        totals[bucket_slot(Category::Tax)] += result.taxes.monthly_total;
        totals[bucket_slot(Category::Housing)] += result.spending.housing;
        for row in &result.spending.breakdown {
            totals[bucket_slot(row.category)] += row.monthly_cost;
        }

        let total_expenses: f64 = totals.iter().sum();

        let mut expenses: Vec<Bucket> = BUCKET_ORDER
            .iter()
            .zip(totals)
            .filter(|(_, monthly)| *monthly > 0.0)
            .map(|(category, monthly)| Bucket {
                info: category_info(*category),
                monthly,
            })
            .collect();
        // Stable sort keeps BUCKET_ORDER for ties
        expenses.sort_by(|a, b| b.monthly.total_cmp(&a.monthly));

        let remainder = if total_expenses > gross {
            Some(Remainder::Overage(total_expenses - gross))
        } else if result.spending.discretionary > 0.0 {
            Some(Remainder::Leftover(result.spending.discretionary))
        } else {
            None
        };

        Some(Self {
            gross_monthly: gross,
            expenses,
            remainder,
        })
    }

    /// Render as labelled bars of `width` cells
    pub fn format_terminal(&self, symbol: &str, width: usize, color: bool) -> String {
        let mut output = String::new();
        let label_width = 10;

        for bucket in &self.expenses {
            let bar = format_bar(bucket.monthly, self.gross_monthly, width);
            let bar = if color { paint(&bar, bucket.info.color) } else { bar };
            output.push_str(&format!(
                "{:<label_width$} {} {:>14}\n",
                bucket.info.label,
                bar,
                format_money(bucket.monthly, symbol),
            ));
        }

        match self.remainder {
            Some(Remainder::Leftover(amount)) => {
                let info = category_info(Category::Leftover);
                let bar = format_bar(amount, self.gross_monthly, width);
                let bar = if color { paint(&bar, info.color) } else { bar };
                output.push_str(&format!(
                    "{:<label_width$} {} {:>14}\n",
                    info.label,
                    bar,
                    format_money(amount, symbol),
                ));
            }
            Some(Remainder::Overage(amount)) => {
                let bar = "▓".repeat(width);
                let bar = if color { paint(&bar, "\x1b[31m") } else { bar };
                output.push_str(&format!(
                    "{:<label_width$} {} {:>14}\n",
                    "OVERAGE",
                    bar,
                    format!("-{}", format_money(amount, symbol)),
                ));
            }
            None => {}
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakdownRow, IncomeSummary, SpendingSummary, TaxSummary};

    fn result(gross: f64, tax: f64, housing: f64, rows: Vec<(Category, f64)>) -> BudgetResult {
        let breakdown: Vec<BreakdownRow> = rows
            .into_iter()
            .map(|(category, monthly_cost)| BreakdownRow {
                name: category.key().to_string(),
                category,
                key: None,
                monthly_cost,
            })
            .collect();
        let total_fixed: f64 = breakdown.iter().map(|r| r.monthly_cost).sum();
        BudgetResult {
            income: IncomeSummary {
                gross_monthly: gross,
                net_monthly: gross - tax,
            },
            taxes: TaxSummary {
                payroll_annual: 0.0,
                federal_annual: 0.0,
                state_annual: 0.0,
                monthly_total: tax,
            },
            spending: SpendingSummary {
                total_fixed,
                housing,
                discretionary: gross - tax - housing - total_fixed,
                breakdown,
            },
            insights: Vec::new(),
        }
    }

    #[test]
    fn test_bucket_slots_follow_bucket_order() {
        for (index, category) in BUCKET_ORDER.iter().enumerate() {
            assert_eq!(bucket_slot(*category), index);
        }
        assert_eq!(BUCKET_ORDER[bucket_slot(Category::Leftover)], Category::Bill);
    }

    #[test]
    fn test_leftover_rows_count_as_bills() {
        let r = result(
            5000.0,
            500.0,
            1000.0,
            vec![(Category::Leftover, 200.0), (Category::Bill, 100.0)],
        );
        let allocation = Allocation::from_result(&r).unwrap();
        let bills = allocation
            .expenses
            .iter()
            .find(|b| b.info.category == Category::Bill)
            .unwrap();
        assert_eq!(bills.monthly, 300.0);
        assert!(allocation
            .expenses
            .iter()
            .all(|b| b.info.category != Category::Leftover));
    }

    #[test]
    fn test_no_income_no_chart() {
        assert!(Allocation::from_result(&result(0.0, 0.0, 1500.0, vec![])).is_none());
    }

    #[test]
    fn test_buckets_sorted_with_leftover_last() {
        let r = result(
            5000.0,
            900.0,
            1500.0,
            vec![
                (Category::Food, 400.0),
                (Category::Util, 150.0),
                (Category::Food, 100.0),
                (Category::Health, 700.0),
            ],
        );
        let allocation = Allocation::from_result(&r).unwrap();
        let labels: Vec<_> = allocation.expenses.iter().map(|b| b.info.label).collect();
        assert_eq!(labels, vec!["Housing", "Taxes", "Health", "Food", "Utilities"]);
        assert_eq!(allocation.expenses[3].monthly, 500.0);
        assert_eq!(allocation.remainder, Some(Remainder::Leftover(1250.0)));
    }

    #[test]
    fn test_overage_when_expenses_exceed_gross() {
        let r = result(3000.0, 500.0, 2000.0, vec![(Category::Debt, 900.0)]);
        let allocation = Allocation::from_result(&r).unwrap();
        assert_eq!(allocation.remainder, Some(Remainder::Overage(400.0)));

        let text = allocation.format_terminal("$", 20, false);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("OVERAGE"));
        assert!(last.ends_with("-$400.00"));
    }

    #[test]
    fn test_exactly_balanced_has_no_remainder() {
        let r = result(3000.0, 500.0, 2000.0, vec![(Category::Bill, 500.0)]);
        let allocation = Allocation::from_result(&r).unwrap();
        assert!(allocation.remainder.is_none());
    }

    #[test]
    fn test_plain_rendering() {
        let r = result(4000.0, 1000.0, 1000.0, vec![]);
        let text = Allocation::from_result(&r).unwrap().format_terminal("$", 8, false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Taxes"));
        assert!(lines[0].contains("██░░░░░░"));
        assert!(lines[2].starts_with("Leftover"));
        assert!(lines[2].ends_with("$2,000.00"));
        assert!(!text.contains('\x1b'));
    }
}
