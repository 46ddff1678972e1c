//! Insurance-side projection to the reference horizon

use serde::{Deserialize, Serialize};

/// What the policy pays back at the reference horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProjection {
    /// Number of monthly premiums paid
    pub months: u32,

    /// Sum of all premiums
    pub total_principal: f64,

    /// Refund at the reference horizon (principal × refund ratio)
    pub total_payout_at_horizon: f64,

    /// Payout less principal; insurance gains are not taxed
    /// Negative when the refund ratio is below 100%
    pub tax_exempt_gain: f64,
}

impl InsuranceProjection {
    pub fn is_loss(&self) -> bool {
        self.tax_exempt_gain < 0.0
    }
}

/// Project total principal, horizon payout and gain for a level premium.
///
/// The refund ratio is always read as the ratio quoted at the reference
/// horizon, whatever the payment term.
pub fn project(premium: f64, refund_ratio_percent: f64, term_years: u32) -> InsuranceProjection {
    let months = term_years * 12;
    let total_principal = premium * months as f64;
    let total_payout_at_horizon = total_principal * refund_ratio_percent / 100.0;

    InsuranceProjection {
        months,
        total_principal,
        total_payout_at_horizon,
        tax_exempt_gain: total_payout_at_horizon - total_principal,
    }
}
