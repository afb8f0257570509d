//! Frequency normalization
//!
//! Converts cadence-tagged amounts to their monthly equivalent.

use crate::models::Cadence;

/// Convert an amount paid at `cadence` into a monthly amount.
///
/// Non-finite amounts count as zero. No rounding is applied.
pub fn normalize_to_monthly(amount: f64, cadence: Cadence) -> f64 {
    if !amount.is_finite() {
        return 0.0;
    }
    amount * cadence.monthly_multiplier()
}

/// Same as [`normalize_to_monthly`] for a cadence given as text; unknown
/// keys are treated as monthly
pub fn normalize_key_to_monthly(amount: f64, cadence_key: &str) -> f64 {
    normalize_to_monthly(amount, Cadence::parse_or_default(cadence_key))
}
