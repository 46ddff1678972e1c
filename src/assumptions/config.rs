//! Calculator configuration
//!
//! Every tunable constant lives here and is passed into the calculator at
//! construction, so several tax/deposit regimes can be evaluated side by side.

use super::{
    DepositTerms, WithholdingTax, DEFAULT_DEPOSIT_RATE, DEFAULT_DISPLAY_DECIMALS,
    DEFAULT_REFERENCE_HORIZON_YEARS, DEFAULT_SUPPORTED_TERMS, DEFAULT_TAX_RATE,
    MAX_CONFIGURED_YEARS,
};
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which rate the forward reconciliation runs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileBasis {
    /// Solved rate rounded to the displayed precision
    #[default]
    Displayed,
    /// Unrounded solved rate
    Exact,
}

/// Parameters shared by every term in a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Withholding tax on bank interest (0.154 = 15.4%)
    /// Must be in [0, 1)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Annual rate of the deposit holding matured savings until the horizon
    /// Compounded once per year
    #[serde(default = "default_deposit_rate")]
    pub deposit_rate: f64,

    /// Year at which the refund ratio is quoted
    #[serde(default = "default_horizon")]
    pub reference_horizon_years: u32,

    /// Payment terms a caller may select
    #[serde(default = "default_supported_terms")]
    pub supported_terms: Vec<u32>,

    /// Decimal places of the displayed rate
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,

    /// Rate used by the forward reconciliation
    #[serde(default)]
    pub reconcile_basis: ReconcileBasis,
}

fn default_tax_rate() -> f64 { DEFAULT_TAX_RATE }
fn default_deposit_rate() -> f64 { DEFAULT_DEPOSIT_RATE }
fn default_horizon() -> u32 { DEFAULT_REFERENCE_HORIZON_YEARS }
fn default_supported_terms() -> Vec<u32> { DEFAULT_SUPPORTED_TERMS.to_vec() }
fn default_display_decimals() -> u32 { DEFAULT_DISPLAY_DECIMALS }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            deposit_rate: DEFAULT_DEPOSIT_RATE,
            reference_horizon_years: DEFAULT_REFERENCE_HORIZON_YEARS,
            supported_terms: DEFAULT_SUPPORTED_TERMS.to_vec(),
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            reconcile_basis: ReconcileBasis::Displayed,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn tax(&self) -> WithholdingTax {
        WithholdingTax::new(self.tax_rate)
    }

    pub fn deposit(&self) -> DepositTerms {
        DepositTerms::new(self.deposit_rate)
    }

    /// Years between the end of payment and the reference horizon
    pub fn grace_years(&self, term_years: u32) -> u32 {
        self.reference_horizon_years.saturating_sub(term_years)
    }

    pub fn is_supported_term(&self, term_years: u32) -> bool {
        self.supported_terms.contains(&term_years)
    }

    /// Check the configuration can be used for a calculation
    pub fn validate(&self) -> Result<()> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 || self.tax_rate >= 1.0 {
            return Err(CalcError::invalid_config(
                "tax_rate",
                format!("must be in [0, 1), got {}", self.tax_rate),
            ));
        }
        if !self.deposit_rate.is_finite() || self.deposit_rate <= -1.0 {
            return Err(CalcError::invalid_config(
                "deposit_rate",
                format!("must be finite and greater than -1, got {}", self.deposit_rate),
            ));
        }
        if self.reference_horizon_years == 0 || self.reference_horizon_years > MAX_CONFIGURED_YEARS {
            return Err(CalcError::invalid_config(
                "reference_horizon_years",
                format!(
                    "must be between 1 and {} years, got {}",
                    MAX_CONFIGURED_YEARS, self.reference_horizon_years
                ),
            ));
        }
        if self.supported_terms.is_empty() {
            return Err(CalcError::invalid_config(
                "supported_terms",
                "at least one payment term is required",
            ));
        }
        if let Some(term) = self
            .supported_terms
            .iter()
            .find(|&&t| t == 0 || t > MAX_CONFIGURED_YEARS)
        {
            return Err(CalcError::invalid_config(
                "supported_terms",
                format!(
                    "payment terms must be between 1 and {} years, got {}",
                    MAX_CONFIGURED_YEARS, term
                ),
            ));
        }
        // f64 carries ~15 significant digits
        if self.display_decimals > 10 {
            return Err(CalcError::invalid_config(
                "display_decimals",
                format!("at most 10 decimal places, got {}", self.display_decimals),
            ));
        }
        Ok(())
    }
}
