//! Combined per-term output handed to presentation

use super::insurance::InsuranceProjection;
use super::reconcile::ReconciliationResult;
use super::solver::EquivalentRateResult;
use serde::{Deserialize, Serialize};

/// Everything computed for one payment term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermResult {
    pub payment_term_years: u32,
    pub monthly_premium: f64,
    pub refund_ratio_percent: f64,
    pub projection: InsuranceProjection,
    pub rate: EquivalentRateResult,
    pub reconciliation: ReconciliationResult,
    /// Plain-language description of the equivalent bank product
    pub description: String,
}

impl TermResult {
    /// Rate as shown to the user (the rate the reconciliation ran from)
    pub fn displayed_rate_percent(&self) -> f64 {
        self.reconciliation.rate_percent
    }

    pub fn residual(&self) -> f64 {
        self.reconciliation.residual
    }
}
