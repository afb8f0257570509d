//! Budget engine
//!
//! Turns a user profile and the two reference datasets into a complete
//! `BudgetResult`. The engine holds only borrowed reference data; every call
//! to [`BudgetEngine::compute`] is independent and deterministic.

use tracing::debug;

use super::benchmark::{benchmark_insight, resolve_geo_stats};
use super::frequency::normalize_to_monthly;
use super::medical::medical_cost;
use super::tax::{compute_federal, compute_state};
use crate::models::{
    normalize_location, sanitize_amount, BenchmarkKey, BreakdownRow, BudgetResult, Category,
    GeoData, IncomeSummary, SpendingSummary, TaxSummary, TaxTables, UserProfile,
};

/// Label of the breakdown row holding the medical premium
pub const HEALTH_PREMIUM_LABEL: &str = "Health Premium";
/// Label of the breakdown row holding the out-of-pocket reserve
pub const HEALTH_BUFFER_LABEL: &str = "Health Risk Buffer";

/// Computes budgets against a fixed set of reference data
#[derive(Debug, Clone, Copy)]
pub struct BudgetEngine<'a> {
    tax: &'a TaxTables,
    geo: &'a GeoData,
}

impl<'a> BudgetEngine<'a> {
    pub fn new(tax: &'a TaxTables, geo: &'a GeoData) -> Self {
        Self { tax, geo }
    }

    /// Compute the full budget for a profile
    pub fn compute(&self, profile: &UserProfile) -> BudgetResult {
        let location = normalize_location(&profile.location);
        let status = profile.filing_status;

        // Income and taxes
        let gross_monthly = normalize_to_monthly(profile.income, profile.income_cadence);
        let gross_annual = gross_monthly * 12.0;

        let federal = compute_federal(gross_annual, status, &self.tax.federal);
        let state_annual = compute_state(gross_annual, &location, status, self.tax);
        let monthly_tax = (federal.total + state_annual) / 12.0;
        let net_monthly = gross_monthly - monthly_tax;

        // Bills
        let mut total_fixed = 0.0;
        let mut breakdown = Vec::with_capacity(profile.bills.len() + 2);
        for bill in &profile.bills {
            let monthly_cost = normalize_to_monthly(bill.amount, bill.cadence);
            total_fixed += monthly_cost;
            breakdown.push(BreakdownRow {
                name: bill.name.clone(),
                category: bill.category,
                key: bill.key,
                monthly_cost,
            });
        }

        // Health
        let premium = normalize_to_monthly(profile.medical_premium, profile.premium_cadence);
        let medical = medical_cost(premium, sanitize_amount(profile.medical_oop_max));
        total_fixed += medical.total;
        if medical.premium > 0.0 {
            breakdown.push(BreakdownRow {
                name: HEALTH_PREMIUM_LABEL.to_string(),
                category: Category::Health,
                key: None,
                monthly_cost: medical.premium,
            });
        }
        if medical.risk_buffer > 0.0 {
            breakdown.push(BreakdownRow {
                name: HEALTH_BUFFER_LABEL.to_string(),
                category: Category::Health,
                key: None,
                monthly_cost: medical.risk_buffer,
            });
        }

        // Insights: housing, health premium, then bills in input order
        let housing = normalize_to_monthly(profile.housing_cost, profile.housing_cadence);
        let stats = resolve_geo_stats(&location, self.geo);
        let mut insights = Vec::new();
        insights.extend(benchmark_insight(
            "Housing",
            housing,
            stats,
            profile.housing_type.benchmark_key(),
        ));
        insights.extend(benchmark_insight(
            "Health Ins.",
            premium,
            stats,
            BenchmarkKey::HealthInsurance,
        ));
        for bill in &profile.bills {
            if let Some(key) = bill.key {
                let monthly = normalize_to_monthly(bill.amount, bill.cadence);
                insights.extend(benchmark_insight(&bill.name, monthly, stats, key));
            }
        }

        let discretionary = net_monthly - housing - total_fixed;

        debug!(
            location = %location,
            gross_monthly,
            net_monthly,
            total_fixed,
            housing,
            discretionary,
            insights = insights.len(),
            "computed budget"
        );

        BudgetResult {
            income: IncomeSummary {
                gross_monthly,
                net_monthly,
            },
            taxes: TaxSummary {
                payroll_annual: federal.payroll,
                federal_annual: federal.federal,
                state_annual,
                monthly_total: monthly_tax,
            },
            spending: SpendingSummary {
                total_fixed,
                housing,
                discretionary,
                breakdown,
            },
            insights,
        }
    }
}

/// Compute a budget without keeping an engine around
pub fn compute_budget(profile: &UserProfile, tax: &TaxTables, geo: &GeoData) -> BudgetResult {
    BudgetEngine::new(tax, geo).compute(profile)
}
