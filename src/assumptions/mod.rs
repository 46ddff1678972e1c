//! Calculation assumptions: withholding tax, grace-period deposit and the
//! reference horizon at which refund ratios are quoted

mod config;
mod deposit;
mod tax;

pub use config::{CalculatorConfig, ReconcileBasis};
pub use deposit::DepositTerms;
pub use tax::WithholdingTax;

// ============================================================================
// Default Assumptions
// ============================================================================
// Interest income from bank savings is taxed at a flat withholding rate,
// while the insurance gain is tax exempt. Matured savings from a short
// payment term sit in a fixed deposit until the reference horizon.

/// Default withholding tax on interest (15.4%)
pub const DEFAULT_TAX_RATE: f64 = 0.154;

/// Default annual rate of the grace-period deposit (2%, compounded annually)
pub const DEFAULT_DEPOSIT_RATE: f64 = 0.02;

/// Year at which refund ratios are quoted
pub const DEFAULT_REFERENCE_HORIZON_YEARS: u32 = 10;

/// Payment terms offered by default
pub const DEFAULT_SUPPORTED_TERMS: [u32; 4] = [5, 7, 10, 20];

/// Longest payment term or horizon a configuration may name
pub const MAX_CONFIGURED_YEARS: u32 = 100;

/// Decimal places shown for rates
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;
