//! Forward bank-side recomputation from a solved rate
//!
//! Runs the savings account forward the way a bank statement would: whole
//! currency units, tax withheld on interest, and for two-phase terms the
//! after-tax balance rolled into the deposit until the reference horizon.
//! The residual against the insurance payout shows how far the rate a user
//! actually sees is from reproducing the payout.

use super::insurance::InsuranceProjection;
use super::interest::{round_currency, round_rate, simple_interest};
use super::solver::EquivalentRateResult;
use crate::assumptions::{CalculatorConfig, DepositTerms, ReconcileBasis, WithholdingTax};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Residual beyond this share of the payout is logged as suspicious
const RESIDUAL_WARN_FRACTION: f64 = 0.01;

/// Step-by-step bank-side balance at the reference horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Annual rate (percent) the forward run used
    pub rate_percent: f64,

    /// Installment interest before tax
    pub savings_interest_pre_tax: f64,

    /// Tax withheld on installment interest
    pub tax_on_savings: f64,

    pub savings_interest_after_tax: f64,

    /// Principal plus after-tax installment interest at end of payment term
    pub savings_total_after_tax: f64,

    /// Deposit interest before tax (0 for single phase)
    pub deposit_interest_pre_tax: f64,

    /// Tax withheld on deposit interest (0 for single phase)
    pub tax_on_deposit: f64,

    pub deposit_interest_after_tax: f64,

    /// Bank balance at the reference horizon
    pub final_balance: f64,

    /// `final_balance - total_payout_at_horizon`, unclamped
    pub residual: f64,
}

impl ReconciliationResult {
    pub fn total_tax(&self) -> f64 {
        self.tax_on_savings + self.tax_on_deposit
    }
}

/// Replays the bank product forward from a solved rate
#[derive(Debug, Clone, Copy)]
pub struct ForwardReconciler {
    tax: WithholdingTax,
    deposit: DepositTerms,
    basis: ReconcileBasis,
    display_decimals: u32,
}

impl ForwardReconciler {
    pub fn new(
        tax: WithholdingTax,
        deposit: DepositTerms,
        basis: ReconcileBasis,
        display_decimals: u32,
    ) -> Self {
        Self {
            tax,
            deposit,
            basis,
            display_decimals,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(
            config.tax(),
            config.deposit(),
            config.reconcile_basis,
            config.display_decimals,
        )
    }

    /// Rate the forward run starts from; rounding happens before the run
    pub fn basis_rate(&self, rate_result: &EquivalentRateResult) -> f64 {
        match self.basis {
            ReconcileBasis::Displayed => {
                round_rate(rate_result.annual_rate_percent, self.display_decimals)
            }
            ReconcileBasis::Exact => rate_result.annual_rate_percent,
        }
    }

    /// Forward bank-side run for one term.
    ///
    /// Installment interest, each tax amount and the pre-tax deposit interest
    /// are rounded to whole currency units, the way a statement would show
    /// them. The deposit interest rounding is applied before tax is taken.
    pub fn reconcile(
        &self,
        rate_result: &EquivalentRateResult,
        projection: &InsuranceProjection,
        premium: f64,
        term_years: u32,
    ) -> ReconciliationResult {
        let rate_percent = self.basis_rate(rate_result);
        let months = term_years * 12;

        let savings_interest_pre_tax =
            round_currency(simple_interest(premium, months, rate_percent / 100.0));
        let tax_on_savings = round_currency(self.tax.withheld_on(savings_interest_pre_tax));
        let savings_interest_after_tax = savings_interest_pre_tax - tax_on_savings;
        let savings_total_after_tax = projection.total_principal + savings_interest_after_tax;

        // Deposit interest accrues on the after-tax carried balance
        let (deposit_interest_pre_tax, tax_on_deposit) = if rate_result.is_two_phase_model {
            let grown = self.deposit.accumulate(savings_total_after_tax, rate_result.grace_years);
            let interest = round_currency(grown - savings_total_after_tax);
            (interest, round_currency(self.tax.withheld_on(interest)))
        } else {
            (0.0, 0.0)
        };
        let deposit_interest_after_tax = deposit_interest_pre_tax - tax_on_deposit;

        let final_balance = savings_total_after_tax + deposit_interest_after_tax;
        let residual = final_balance - projection.total_payout_at_horizon;

        debug!(
            "term={}y rate={}% final={:.0} payout={:.0} residual={:.0}",
            term_years, rate_percent, final_balance, projection.total_payout_at_horizon, residual
        );
        if residual.abs() > projection.total_payout_at_horizon.abs() * RESIDUAL_WARN_FRACTION {
            warn!(
                "term={}y forward balance misses payout by {:.0} ({:.3}% of payout)",
                term_years,
                residual,
                residual / projection.total_payout_at_horizon * 100.0
            );
        }

        ReconciliationResult {
            rate_percent,
            savings_interest_pre_tax,
            tax_on_savings,
            savings_interest_after_tax,
            savings_total_after_tax,
            deposit_interest_pre_tax,
            tax_on_deposit,
            deposit_interest_after_tax,
            final_balance,
            residual,
        }
    }
}
