//! End-to-end scenarios through the public API

use approx::{assert_abs_diff_eq, assert_relative_eq};
use equivalent_rate::{
    CalculationInput, CalculatorConfig, EquivalenceEngine, ReconcileBasis,
};

fn engine() -> EquivalenceEngine {
    EquivalenceEngine::new(CalculatorConfig::default()).expect("Failed to build engine")
}

#[test]
fn ten_year_term_single_phase() {
    let result = engine()
        .evaluate(&CalculationInput::new(100_000.0, 110.0, 10))
        .expect("Failed to evaluate");

    assert_eq!(result.projection.total_principal, 12_000_000.0);
    assert_relative_eq!(result.projection.total_payout_at_horizon, 13_200_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.projection.tax_exempt_gain, 1_200_000.0, epsilon = 1e-6);

    assert!(!result.rate.is_two_phase_model);
    assert_eq!(result.rate.grace_years, 0);
    assert_abs_diff_eq!(result.rate.annual_rate_percent, 2.344, epsilon = 0.001);
    assert_eq!(result.displayed_rate_percent(), 2.34);
}

#[test]
fn seven_year_term_two_phase() {
    let result = engine()
        .evaluate(&CalculationInput::new(131_000.0, 119.1, 7))
        .expect("Failed to evaluate");

    assert_eq!(result.projection.total_principal, 11_004_000.0);
    assert_relative_eq!(result.projection.total_payout_at_horizon, 13_105_764.0, epsilon = 1e-6);
    assert_relative_eq!(result.projection.tax_exempt_gain, 2_101_764.0, epsilon = 1e-6);

    assert!(result.rate.is_two_phase_model);
    assert_eq!(result.rate.grace_years, 3);
    let expected_before = (11_004_000.0 + 2_101_764.0 / 0.846) / 1.02_f64.powi(3);
    assert_relative_eq!(result.rate.value_before_deposit, expected_before, epsilon = 1e-4);

    // Forward run from the displayed rate lands within 0.2% of the payout
    let payout = result.projection.total_payout_at_horizon;
    assert!(result.residual().abs() < payout * 0.002, "residual {}", result.residual());
}

#[test]
fn loss_case_yields_negative_rate() {
    let results = engine()
        .evaluate_quote(100_000.0, 95.0, &[5, 7, 10, 20])
        .expect("Failed to evaluate");

    for r in &results {
        assert!(r.projection.tax_exempt_gain < 0.0);
        assert!(r.rate.annual_rate_percent < 0.0);
        assert!(r.reconciliation.final_balance.is_finite());
        assert!(!r.description.is_empty());
    }
}

#[test]
fn grace_years_follow_term() {
    let config = CalculatorConfig {
        supported_terms: (1..=30).collect(),
        ..Default::default()
    };
    let engine = EquivalenceEngine::new(config).expect("Failed to build engine");
    let terms: Vec<u32> = (1..=30).collect();

    for r in engine.evaluate_quote(50_000.0, 108.0, &terms).expect("Failed to evaluate") {
        if r.payment_term_years < 10 {
            assert!(r.rate.is_two_phase_model);
            assert_eq!(r.rate.grace_years, 10 - r.payment_term_years);
        } else {
            assert!(!r.rate.is_two_phase_model);
            assert_eq!(r.rate.grace_years, 0);
            assert_eq!(r.reconciliation.deposit_interest_pre_tax, 0.0);
        }
    }
}

#[test]
fn exact_basis_closes_single_phase() {
    let engine = EquivalenceEngine::new(CalculatorConfig {
        reconcile_basis: ReconcileBasis::Exact,
        ..Default::default()
    })
    .expect("Failed to build engine");

    for (premium, ratio) in [(100_000.0, 110.0), (12_345.0, 101.7), (500_000.0, 133.3)] {
        for r in engine.evaluate_quote(premium, ratio, &[10, 20]).expect("Failed to evaluate") {
            let tolerance = r.projection.total_principal / 1_000_000.0;
            assert!(r.residual().abs() < tolerance, "premium {} ratio {}: {}", premium, ratio, r.residual());
        }
    }
}

#[test]
fn monotonic_in_refund_ratio() {
    let engine = engine();
    for term in [5, 7, 10, 20] {
        let low = engine.evaluate(&CalculationInput::new(80_000.0, 112.0, term)).expect("low");
        let high = engine.evaluate(&CalculationInput::new(80_000.0, 112.1, term)).expect("high");
        assert!(high.rate.annual_rate_percent > low.rate.annual_rate_percent);
    }
}

#[test]
fn json_round_trip_of_results() {
    let results = engine()
        .evaluate_quote(131_000.0, 119.1, &[5, 10])
        .expect("Failed to evaluate");

    let json = serde_json::to_string(&results).expect("Failed to serialize");
    assert!(json.contains("\"is_two_phase_model\":true"));
    assert!(json.contains("\"residual\""));
}
