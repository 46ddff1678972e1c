//! Presentation helpers: product descriptions, the comparison table and
//! currency formatting
//!
//! Every figure quoted here is read from the structured results; nothing is
//! recomputed.

use crate::assumptions::CalculatorConfig;
use crate::projection::{EquivalentRateResult, ReconciliationResult, TermResult};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One row of the per-term summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub term_label: String,
    pub total_principal: f64,
    /// Tax-exempt insurance gain
    pub interest: f64,
    pub total_payout: f64,
    pub equivalent_rate_percent: f64,
}

impl From<&TermResult> for ComparisonRow {
    fn from(result: &TermResult) -> Self {
        Self {
            term_label: term_label(result.payment_term_years),
            total_principal: result.projection.total_principal,
            interest: result.projection.tax_exempt_gain,
            total_payout: result.projection.total_payout_at_horizon,
            equivalent_rate_percent: result.displayed_rate_percent(),
        }
    }
}

pub fn term_label(term_years: u32) -> String {
    format!("{}y", term_years)
}

/// Summary rows ordered by payment term
pub fn comparison_rows(results: &[TermResult]) -> Vec<ComparisonRow> {
    let mut sorted: Vec<&TermResult> = results.iter().collect();
    sorted.sort_by_key(|r| r.payment_term_years);
    sorted.into_iter().map(ComparisonRow::from).collect()
}

/// Write the summary rows as CSV with a header line
pub fn write_comparison_csv<W: Write>(writer: W, rows: &[ComparisonRow]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Whole currency units with thousands separators, e.g. `-1,234,567`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_rate(rate_percent: f64, decimals: u32) -> String {
    format!("{:.*}%", decimals as usize, rate_percent)
}

/// Describe the bank product with the same outcome as the insurance quote
pub fn describe(
    term_years: u32,
    rate: &EquivalentRateResult,
    reconciliation: &ReconciliationResult,
    config: &CalculatorConfig,
) -> String {
    let shown_rate = format_rate(reconciliation.rate_percent, config.display_decimals);
    let tax = format_rate(config.tax_rate * 100.0, 1);

    if rate.is_two_phase_model {
        format!(
            "Equivalent to a {}-year installment savings account paying {} simple interest \
             per year (taxed at {}), followed by {} year(s) in a {} annually compounded deposit. \
             Pre-tax interest: {} in the savings phase, {} in the deposit phase.",
            term_years,
            shown_rate,
            tax,
            rate.grace_years,
            format_rate(config.deposit_rate * 100.0, 1),
            format_currency(rate.savings_phase_interest),
            format_currency(rate.deposit_phase_interest),
        )
    } else {
        format!(
            "Equivalent to a {}-year installment savings account paying {} simple interest \
             per year (taxed at {}). Pre-tax interest: {}.",
            term_years,
            shown_rate,
            tax,
            format_currency(rate.savings_phase_interest),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::EquivalenceEngine;

    fn results() -> Vec<TermResult> {
        EquivalenceEngine::new(CalculatorConfig::default())
            .expect("Failed to build")
            .evaluate_quote(131_000.0, 119.1, &[10, 7])
            .expect("Failed to evaluate")
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(999.0), "999");
        assert_eq!(format_currency(1_000.0), "1,000");
        assert_eq!(format_currency(12_000_000.0), "12,000,000");
        assert_eq!(format_currency(13_105_764.4), "13,105,764");
        assert_eq!(format_currency(-600_000.0), "-600,000");
        assert_eq!(format_currency(-0.4), "0");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(2.34, 2), "2.34%");
        assert_eq!(format_rate(15.4, 1), "15.4%");
        assert_eq!(format_rate(-1.17, 2), "-1.17%");
    }

    #[test]
    fn test_comparison_rows_sorted() {
        let rows = comparison_rows(&results());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].term_label, "7y");
        assert_eq!(rows[0].total_principal, 11_004_000.0);
        assert_eq!(rows[0].equivalent_rate_percent, 4.38);
        assert_eq!(rows[1].term_label, "10y");
    }

    #[test]
    fn test_descriptions_quote_structured_figures() {
        let results = results();
        let seven = &results[0];
        let ten = &results[1];

        assert!(seven.description.contains("4.38%"));
        assert!(seven.description.contains("3 year(s)"));
        assert!(seven
            .description
            .contains(&format_currency(seven.rate.deposit_phase_interest)));

        assert!(ten.description.contains(&format_rate(ten.displayed_rate_percent(), 2)));
        assert!(!ten.description.contains("deposit"));
    }

    #[test]
    fn test_csv_output() {
        let rows = comparison_rows(&results());
        let mut buf = Vec::new();
        write_comparison_csv(&mut buf, &rows).expect("Failed to write CSV");

        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("term_label,total_principal,interest,total_payout,equivalent_rate_percent")
        );
        assert!(lines.next().is_some_and(|l| l.starts_with("7y,11004000")));
        assert_eq!(text.lines().count(), 3);
    }
}
