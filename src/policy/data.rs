//! Insurance policy quote being evaluated

use crate::assumptions::CalculatorConfig;
use crate::error::{CalcError, Result};
use crate::projection::interest::installment_months;
use serde::{Deserialize, Serialize};

/// A level-premium quote for one payment term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Premium paid every month of the payment term
    pub monthly_premium: f64,

    /// Refund ratio quoted at the reference horizon, in percent (119.1 = 119.1%)
    pub refund_ratio_percent: f64,

    /// Years over which premiums are paid
    pub payment_term_years: u32,
}

impl CalculationInput {
    pub fn new(monthly_premium: f64, refund_ratio_percent: f64, payment_term_years: u32) -> Self {
        Self {
            monthly_premium,
            refund_ratio_percent,
            payment_term_years,
        }
    }

    pub fn months(&self) -> u32 {
        self.payment_term_years * 12
    }

    /// Reject inputs the calculator must never see
    pub fn validate(&self, config: &CalculatorConfig) -> Result<()> {
        validate_quote(self.monthly_premium, self.refund_ratio_percent)?;
        if !config.is_supported_term(self.payment_term_years) {
            return Err(CalcError::invalid_input(
                "payment_term_years",
                format!(
                    "{} is not one of the supported terms {:?}",
                    self.payment_term_years, config.supported_terms
                ),
            ));
        }

        // Largest intermediates: installment deposit-months and the horizon payout
        let months = self.months();
        let payout = self.monthly_premium * months as f64 * self.refund_ratio_percent / 100.0;
        let deposit_months = self.monthly_premium * installment_months(months);
        if !payout.is_finite() || !deposit_months.is_finite() {
            return Err(CalcError::invalid_input(
                "monthly_premium",
                format!(
                    "premium {} with refund ratio {}% over {} years is too large to evaluate",
                    self.monthly_premium, self.refund_ratio_percent, self.payment_term_years
                ),
            ));
        }
        Ok(())
    }
}

/// Premium and refund ratio must both be positive and finite
pub fn validate_quote(monthly_premium: f64, refund_ratio_percent: f64) -> Result<()> {
    if !monthly_premium.is_finite() || monthly_premium <= 0.0 {
        return Err(CalcError::invalid_input(
            "monthly_premium",
            format!("must be greater than 0, got {}", monthly_premium),
        ));
    }
    if !refund_ratio_percent.is_finite() || refund_ratio_percent <= 0.0 {
        return Err(CalcError::invalid_input(
            "refund_ratio_percent",
            format!("must be greater than 0, got {}", refund_ratio_percent),
        ));
    }
    Ok(())
}

/// Build one input per selected term, sorted and de-duplicated
pub fn build_inputs(
    monthly_premium: f64,
    refund_ratio_percent: f64,
    selected_terms: &[u32],
    config: &CalculatorConfig,
) -> Result<Vec<CalculationInput>> {
    validate_quote(monthly_premium, refund_ratio_percent)?;
    if selected_terms.is_empty() {
        return Err(CalcError::invalid_input(
            "selected_terms",
            "select at least one payment term",
        ));
    }

    let mut terms = selected_terms.to_vec();
    terms.sort_unstable();
    terms.dedup();

    terms
        .into_iter()
        .map(|term| {
            let input = CalculationInput::new(monthly_premium, refund_ratio_percent, term);
            input.validate(config)?;
            Ok(input)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months() {
        let input = CalculationInput::new(100_000.0, 110.0, 7);
        assert_eq!(input.months(), 84);
    }

    #[test]
    fn test_rejects_non_positive_premium() {
        let config = CalculatorConfig::default();

        for premium in [0.0, -1.0, f64::NAN] {
            let input = CalculationInput::new(premium, 110.0, 10);
            assert!(matches!(
                input.validate(&config),
                Err(CalcError::InvalidInput { ref field, .. }) if field == "monthly_premium"
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_ratio() {
        let config = CalculatorConfig::default();
        let input = CalculationInput::new(100_000.0, 0.0, 10);
        assert!(matches!(
            input.validate(&config),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "refund_ratio_percent"
        ));
    }

    #[test]
    fn test_rejects_unsupported_term() {
        let config = CalculatorConfig::default();
        let input = CalculationInput::new(100_000.0, 110.0, 12);
        assert!(input.validate(&config).is_err());

        // A wider term set makes it acceptable
        let wide = CalculatorConfig {
            supported_terms: vec![5, 7, 10, 12, 20],
            ..Default::default()
        };
        assert!(input.validate(&wide).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_amounts() {
        let config = CalculatorConfig::default();

        let huge_premium = CalculationInput::new(1e307, 110.0, 20);
        assert!(matches!(
            huge_premium.validate(&config),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "monthly_premium"
        ));

        let huge_ratio = CalculationInput::new(100_000.0, 1e306, 10);
        assert!(huge_ratio.validate(&config).is_err());

        // Large but representable quotes still pass
        let large = CalculationInput::new(1e12, 250.0, 20);
        assert!(large.validate(&config).is_ok());
    }

    #[test]
    fn test_build_inputs_sorts_and_dedups() {
        let config = CalculatorConfig::default();
        let inputs = build_inputs(100_000.0, 110.0, &[20, 5, 10, 5], &config)
            .expect("Failed to build inputs");

        let terms: Vec<u32> = inputs.iter().map(|i| i.payment_term_years).collect();
        assert_eq!(terms, vec![5, 10, 20]);
    }

    #[test]
    fn test_build_inputs_empty_selection() {
        let config = CalculatorConfig::default();
        let result = build_inputs(100_000.0, 110.0, &[], &config);
        assert!(matches!(
            result,
            Err(CalcError::InvalidInput { ref field, .. }) if field == "selected_terms"
        ));
    }
}
