//! Follow-on deposit used during the grace period after a short payment term

/// Fixed-rate deposit compounded once per year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepositTerms {
    /// Annual rate as a decimal (0.02 = 2%)
    pub annual_rate: f64,
}

impl Default for DepositTerms {
    fn default() -> Self {
        Self { annual_rate: super::DEFAULT_DEPOSIT_RATE }
    }
}

impl DepositTerms {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Accumulation factor after `years` of annual compounding
    pub fn growth_factor(&self, years: u32) -> f64 {
        (1.0 + self.annual_rate).powf(years as f64)
    }

    /// Balance after leaving `amount` on deposit for `years`
    pub fn accumulate(&self, amount: f64, years: u32) -> f64 {
        amount * self.growth_factor(years)
    }

    /// Amount that must be deposited now to reach `target` after `years`
    pub fn discount(&self, target: f64, years: u32) -> f64 {
        target / self.growth_factor(years)
    }
}
