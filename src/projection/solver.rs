//! Closed-form solver for the bank-equivalent simple interest rate
//!
//! The insurance gain is tax exempt, so a taxable savings account must earn
//! the gain grossed up by the withholding rate. When premiums stop before the
//! reference horizon the matured savings sit in a compounding deposit for the
//! remaining grace years, and only the savings-phase share of the grossed-up
//! interest is attributed to the installment rate.

use super::insurance::InsuranceProjection;
use super::interest::rate_for_interest;
use crate::assumptions::{CalculatorConfig, DepositTerms, WithholdingTax};
use log::debug;
use serde::{Deserialize, Serialize};

/// Solved rate together with the phase amounts that explain it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentRateResult {
    /// Pre-tax simple annual rate of the savings phase, in percent
    pub annual_rate_percent: f64,

    /// True when the payment term ends before the reference horizon
    pub is_two_phase_model: bool,

    /// Years the matured balance spends in the deposit (0 for single phase)
    pub grace_years: u32,

    /// Gain grossed up to the pre-tax interest a taxable account must pay
    pub equivalent_pre_tax_interest: f64,

    /// Principal plus equivalent pre-tax interest
    pub total_pre_tax_value_at_horizon: f64,

    /// Balance at the end of the savings phase, before the deposit grows it
    /// Equals the horizon value for single phase
    pub value_before_deposit: f64,

    /// Pre-tax interest earned by the installments
    pub savings_phase_interest: f64,

    /// Interest earned by the deposit during the grace years
    pub deposit_phase_interest: f64,
}

/// Reverse-engineers the installment rate matching an insurance payout
#[derive(Debug, Clone, Copy)]
pub struct EquivalentRateSolver {
    reference_horizon_years: u32,
    tax: WithholdingTax,
    deposit: DepositTerms,
}

impl EquivalentRateSolver {
    pub fn new(reference_horizon_years: u32, tax: WithholdingTax, deposit: DepositTerms) -> Self {
        Self {
            reference_horizon_years,
            tax,
            deposit,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.reference_horizon_years, config.tax(), config.deposit())
    }

    pub fn solve(
        &self,
        projection: &InsuranceProjection,
        premium: f64,
        term_years: u32,
    ) -> EquivalentRateResult {
        let months = term_years * 12;
        let equivalent_pre_tax_interest = self.tax.gross_up(projection.tax_exempt_gain);
        let total_pre_tax_value_at_horizon =
            projection.total_principal + equivalent_pre_tax_interest;

        let is_two_phase_model = term_years < self.reference_horizon_years;
        let grace_years = if is_two_phase_model {
            self.reference_horizon_years - term_years
        } else {
            0
        };

        // Single phase is the two-phase model with no grace years
        let value_before_deposit = self.deposit.discount(total_pre_tax_value_at_horizon, grace_years);
        let savings_phase_interest = value_before_deposit - projection.total_principal;
        let deposit_phase_interest = total_pre_tax_value_at_horizon - value_before_deposit;

        let annual_rate = rate_for_interest(savings_phase_interest, premium, months);

        debug!(
            "term={}y grace={}y pre_tax_interest={:.2} savings_interest={:.2} rate={:.6}%",
            term_years,
            grace_years,
            equivalent_pre_tax_interest,
            savings_phase_interest,
            annual_rate * 100.0
        );

        EquivalentRateResult {
            annual_rate_percent: annual_rate * 100.0,
            is_two_phase_model,
            grace_years,
            equivalent_pre_tax_interest,
            total_pre_tax_value_at_horizon,
            value_before_deposit,
            savings_phase_interest,
            deposit_phase_interest,
        }
    }
}
