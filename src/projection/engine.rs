//! Runs projector, solver and reconciler for each selected payment term

use super::insurance::project;
use super::reconcile::ForwardReconciler;
use super::results::TermResult;
use super::solver::EquivalentRateSolver;
use crate::assumptions::CalculatorConfig;
use crate::error::Result;
use crate::policy::{build_inputs, CalculationInput};
use crate::report::describe;
use log::{info, warn};
use rayon::prelude::*;

/// Stateless calculator bound to one validated configuration
#[derive(Debug, Clone)]
pub struct EquivalenceEngine {
    config: CalculatorConfig,
    solver: EquivalentRateSolver,
    reconciler: ForwardReconciler,
}

impl EquivalenceEngine {
    /// Validate the configuration and build the engine
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let solver = EquivalentRateSolver::from_config(&config);
        let reconciler = ForwardReconciler::from_config(&config);
        Ok(Self {
            config,
            solver,
            reconciler,
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate one payment term after validating the input
    pub fn evaluate(&self, input: &CalculationInput) -> Result<TermResult> {
        input.validate(&self.config)?;
        Ok(self.evaluate_unchecked(input))
    }

    /// Evaluate a quote for every selected term, ordered by term
    ///
    /// Terms are independent, so they are evaluated in parallel.
    pub fn evaluate_quote(
        &self,
        monthly_premium: f64,
        refund_ratio_percent: f64,
        selected_terms: &[u32],
    ) -> Result<Vec<TermResult>> {
        let inputs = build_inputs(monthly_premium, refund_ratio_percent, selected_terms, &self.config)?;

        let results: Vec<TermResult> = inputs
            .par_iter()
            .map(|input| self.evaluate_unchecked(input))
            .collect();

        info!(
            "Evaluated {} term(s) for premium {} at {}% refund",
            results.len(),
            monthly_premium,
            refund_ratio_percent
        );
        Ok(results)
    }

    fn evaluate_unchecked(&self, input: &CalculationInput) -> TermResult {
        let premium = input.monthly_premium;
        let term = input.payment_term_years;

        let projection = project(premium, input.refund_ratio_percent, term);
        if projection.is_loss() {
            warn!(
                "term={}y refund ratio {}% returns less than principal",
                term, input.refund_ratio_percent
            );
        }
        let rate = self.solver.solve(&projection, premium, term);
        let reconciliation = self.reconciler.reconcile(&rate, &projection, premium, term);
        let description = describe(term, &rate, &reconciliation, &self.config);

        TermResult {
            payment_term_years: term,
            monthly_premium: premium,
            refund_ratio_percent: input.refund_ratio_percent,
            projection,
            rate,
            reconciliation,
            description,
        }
    }
}
