//! Simple-interest installment savings arithmetic
//!
//! For `n` monthly deposits of `premium` earning a flat annual rate `r`, the
//! k-th deposit from the end earns interest for k months, so total interest
//! after `n` months is `premium × n(n+1)/2 × r/12`.

/// Deposit-months accumulated by `months` level installments: n(n+1)/2
pub fn installment_months(months: u32) -> f64 {
    let n = months as f64;
    n * (n + 1.0) / 2.0
}

/// Interest earned on `months` installments of `premium` at `annual_rate` (decimal)
pub fn simple_interest(premium: f64, months: u32, annual_rate: f64) -> f64 {
    premium * installment_months(months) * (annual_rate / 12.0)
}

/// Annual rate (decimal) that produces `interest` on `months` installments of `premium`
///
/// Zero premium or zero months leave nothing to earn interest on; the rate
/// is defined as zero in that case.
pub fn rate_for_interest(interest: f64, premium: f64, months: u32) -> f64 {
    let denom = premium * installment_months(months) / 12.0;
    if denom != 0.0 {
        interest / denom
    } else {
        0.0
    }
}

/// Round a currency amount to whole units, ties to even
pub fn round_currency(amount: f64) -> f64 {
    amount.round_ties_even()
}

/// Round a percentage to `decimals` places, ties to even
pub fn round_rate(rate_percent: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (rate_percent * scale).round_ties_even() / scale
}
