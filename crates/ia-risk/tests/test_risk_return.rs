//! Reference-value tests for the single-security return and risk measures.

use approx::assert_abs_diff_eq;
use ia_core::Error;
use ia_risk::{
    annualized_geometric_mean_return, annualized_volatility, arithmetic_mean_return,
    geometric_mean_return, return_on_security, volatility,
};

fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

#[test]
fn test_return_on_security() {
    let r = return_on_security(100.0, 110.0, 5.0).unwrap();
    assert_abs_diff_eq!(r, 0.15, epsilon = 1e-12);
}

#[test]
fn test_geometric_mean_return() {
    let cases: [(&[f64], f64); 3] = [
        // mixed returns
        (&[-0.1, 0.20, 0.3], 0.1198),
        // small returns
        (&[0.05, 0.02, -0.03], 0.0128),
        // zero returns
        (&[0.0, 0.0, 0.0], 0.0),
    ];
    for (i, (returns, expected)) in cases.iter().enumerate() {
        let calculated = geometric_mean_return(returns).unwrap();
        assert_eq!(
            round4(calculated),
            *expected,
            "case {i}: calculated {calculated:.6}, expected {expected:.4}"
        );
    }
}

#[test]
fn test_annualized_geometric_mean_return() {
    let monthly = [0.01, 0.02, -0.01, 0.03, -0.02];
    let annual = annualized_geometric_mean_return(&monthly, 12).unwrap();
    assert_abs_diff_eq!(annual, 0.072230353250, epsilon = 1e-9);
}

#[test]
fn test_arithmetic_mean_return_with_equal_probabilities() {
    let result = arithmetic_mean_return(&[-0.1, 0.20, 0.3], None).unwrap();
    assert_eq!(round4(result), 0.1333);
}

#[test]
fn test_arithmetic_mean_return_with_given_probabilities() {
    let probabilities = [0.30, 0.40, 0.30];
    let returns = [0.10, 0.05, 0.30];
    let result = arithmetic_mean_return(&returns, Some(probabilities.as_slice())).unwrap();
    assert_abs_diff_eq!(result, 0.14, epsilon = 1e-15);
}

#[test]
fn test_volatility_with_given_probabilities() {
    let probabilities = [0.30, 0.40, 0.30];
    let returns = [0.10, 0.05, 0.30];
    let result = volatility(&returns, Some(probabilities.as_slice()), 1.0).unwrap();
    assert_eq!(round4(result), 0.1068);
}

#[test]
fn test_annualized_volatility() {
    let monthly_volatility = 0.05;
    let result = annualized_volatility(monthly_volatility, 12.0).unwrap();
    assert_eq!(round4(result), 0.1732);
}

#[test]
fn test_mismatched_probabilities() {
    let err = volatility(&[0.1, 0.2, 0.3], Some([0.5, 0.5].as_slice()), 1.0).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );
}
