//! Flat withholding tax on bank interest

/// Flat withholding tax applied to interest only (never to principal)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithholdingTax {
    /// Tax rate as a decimal (0.154 = 15.4%)
    pub rate: f64,
}

impl Default for WithholdingTax {
    fn default() -> Self {
        Self { rate: super::DEFAULT_TAX_RATE }
    }
}

impl WithholdingTax {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Fraction of gross interest the saver keeps
    pub fn net_fraction(&self) -> f64 {
        1.0 - self.rate
    }

    /// Pre-tax interest a taxable account must pay so that `net_interest`
    /// remains after withholding.
    ///
    /// A rate of 100% or more leaves nothing to gross up; that case is
    /// rejected by config validation and resolves to zero here.
    pub fn gross_up(&self, net_interest: f64) -> f64 {
        let keep = self.net_fraction();
        if keep > 0.0 {
            net_interest / keep
        } else {
            0.0
        }
    }

    /// Unrounded tax on an interest amount
    pub fn withheld_on(&self, interest: f64) -> f64 {
        interest * self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let tax = WithholdingTax::default();
        assert_eq!(tax.rate, 0.154);
        assert!((tax.net_fraction() - 0.846).abs() < 1e-12);
    }

    #[test]
    fn test_gross_up_inverts_withholding() {
        let tax = WithholdingTax::default();
        let gross = tax.gross_up(1_200_000.0);
        // 1,200,000 / 0.846
        assert!((gross - 1_418_439.716).abs() < 0.01);
        assert!((gross - tax.withheld_on(gross) - 1_200_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_gross_up_degenerate_rate() {
        let tax = WithholdingTax::new(1.0);
        assert_eq!(tax.gross_up(500.0), 0.0);
    }

    #[test]
    fn test_zero_tax() {
        let tax = WithholdingTax::new(0.0);
        assert_eq!(tax.gross_up(123.0), 123.0);
        assert_eq!(tax.withheld_on(123.0), 0.0);
    }
}
