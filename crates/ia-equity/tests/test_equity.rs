//! Reference-value and invariant tests for the equity formulas.

use approx::assert_abs_diff_eq;
use ia_core::Error;
use ia_equity::{
    dividend_discount_model, dividend_yield, earnings_yield, gordon_growth_model,
    net_present_value, price_to_earnings_ratio, return_on_stock,
};
use proptest::prelude::*;

// ─── Reference values ─────────────────────────────────────────────────────────

#[test]
fn test_return_on_stock() {
    // bought at 100, now 120, 5 of dividends along the way
    let r = return_on_stock(100.0, 120.0, 5.0).unwrap();
    assert_abs_diff_eq!(r, 25.0, epsilon = 1e-12);
}

#[test]
fn test_dividend_discount_model() {
    let pv = dividend_discount_model(5.0, 0.05, 10).unwrap();
    assert_abs_diff_eq!(pv, 38.608674645924, epsilon = 1e-9);
}

#[test]
fn test_gordon_growth_model() {
    let pv = gordon_growth_model(5.0, 0.05, 0.02).unwrap();
    assert_abs_diff_eq!(pv, 166.666666666667, epsilon = 1e-9);

    let err = gordon_growth_model(5.0, 0.02, 0.05).unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
}

#[test]
fn test_multiples() {
    assert_abs_diff_eq!(price_to_earnings_ratio(100.0, 5.0).unwrap(), 20.0);
    assert_abs_diff_eq!(earnings_yield(100.0, 5.0).unwrap(), 0.05);
    assert_abs_diff_eq!(dividend_yield(3.0, 100.0).unwrap(), 0.03);
    assert!(matches!(
        price_to_earnings_ratio(100.0, -1.0),
        Err(Error::Precondition(_))
    ));
}

#[test]
fn test_net_present_value() {
    let npv = net_present_value(&[-100.0, 50.0, 60.0, 70.0], 0.05).unwrap();
    assert_abs_diff_eq!(npv, 62.509448223734, epsilon = 1e-9);
}

// ─── Invariants ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ddm_converges_to_perpetuity(d in 0.1f64..50.0, r in 0.01f64..0.25) {
        let finite = dividend_discount_model(d, r, 2_000).unwrap();
        let perpetuity = gordon_growth_model(d, r, 0.0).unwrap();
        prop_assert!(finite <= perpetuity * (1.0 + 1e-12));
        prop_assert!((finite - perpetuity).abs() / perpetuity < 1e-6);
    }

    #[test]
    fn pe_and_earnings_yield_are_reciprocal(price in 1.0f64..1_000.0, eps in 0.01f64..100.0) {
        let pe = price_to_earnings_ratio(price, eps).unwrap();
        let ey = earnings_yield(price, eps).unwrap();
        prop_assert!((pe * ey - 1.0).abs() < 1e-12);
    }

    #[test]
    fn npv_at_zero_rate_is_the_plain_sum(flows in prop::collection::vec(-1_000.0f64..1_000.0, 0..20)) {
        let npv = net_present_value(&flows, 0.0).unwrap();
        let sum: f64 = flows.iter().sum();
        prop_assert!((npv - sum).abs() < 1e-9);
    }
}
