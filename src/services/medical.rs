//! Medical cost buffering
//!
//! Budgets the premium plus one twelfth of the annual out-of-pocket maximum
//! every month, so a worst-case year is covered.

/// Monthly medical cost split into the guaranteed premium and the reserve
/// held against out-of-pocket exposure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedicalCost {
    pub premium: f64,
    pub risk_buffer: f64,
    pub total: f64,
}

/// Premium plus the monthly share of the annual out-of-pocket maximum
pub fn safe_monthly_medical_cost(monthly_premium: f64, annual_oop_max: f64) -> f64 {
    monthly_premium + annual_oop_max / 12.0
}

/// [`safe_monthly_medical_cost`] with its two portions kept apart
pub fn medical_cost(monthly_premium: f64, annual_oop_max: f64) -> MedicalCost {
    let total = safe_monthly_medical_cost(monthly_premium, annual_oop_max);
    MedicalCost {
        premium: monthly_premium,
        risk_buffer: total - monthly_premium,
        total,
    }
}
