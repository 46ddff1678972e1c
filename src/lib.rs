//! Equivalent Rate - bank-deposit equivalent interest rate of whole-life
//! insurance savings products
//!
//! This library provides:
//! - Insurance projection of principal, horizon payout and tax-exempt gain
//! - Closed-form solving of the equivalent simple interest rate, including the
//!   two-phase savings + grace deposit model for short payment terms
//! - Forward reconciliation of the displayed rate against the payout
//! - Comparison rows and descriptions for presentation layers

pub mod error;
pub mod assumptions;
pub mod policy;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use assumptions::{CalculatorConfig, ReconcileBasis};
pub use policy::CalculationInput;
pub use projection::{
    EquivalenceEngine, EquivalentRateResult, InsuranceProjection, ReconciliationResult, TermResult,
};
