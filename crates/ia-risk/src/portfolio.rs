//! Portfolio-level return and risk.
//!
//! Asset return histories are passed as one slice per asset, each holding
//! that asset's observations in time order:
//!
//! ```text
//! assets[0] = [r_0(t_0), r_0(t_1), ...]
//! assets[1] = [r_1(t_0), r_1(t_1), ...]
//! ```
//!
//! Covariances use the sample (`n - 1`) estimator.

use ia_core::{
    errors::{check_finite, check_min_len, check_same_length, finite_result},
    Rate, Real, Result, Volatility,
};
use ia_math::{covariance, Matrix};
use tracing::debug;

/// Weighted portfolio return `w · r`.
pub fn portfolio_return(weights: &[Real], returns: &[Rate]) -> Result<Rate> {
    check_min_len(1, weights.len())?;
    check_same_length(weights.len(), returns.len())?;
    finite_result(
        weights.iter().zip(returns).map(|(w, r)| w * r).sum(),
        "portfolio return",
    )
}

/// Sample covariance between the returns of two assets.
pub fn covariance_between(returns_a: &[Rate], returns_b: &[Rate]) -> Result<Real> {
    covariance::sample_covariance(returns_a, returns_b)
}

/// Correlation between the returns of two assets, in `[-1, 1]`.
///
/// Fails when either asset's returns are constant.
pub fn correlation_between(returns_a: &[Rate], returns_b: &[Rate]) -> Result<Real> {
    covariance::correlation(returns_a, returns_b)
}

/// Sample covariance matrix of the assets' returns.
pub fn covariance_matrix<S: AsRef<[Rate]>>(assets: &[S]) -> Result<Matrix> {
    covariance::covariance_matrix(assets)
}

/// Correlation matrix of the assets' returns.
pub fn correlation_matrix<S: AsRef<[Rate]>>(assets: &[S]) -> Result<Matrix> {
    covariance::correlation_matrix(assets)
}

/// Portfolio standard deviation `sqrt(wᵀ Σ w)`.
///
/// ```
/// let weights = [0.5, 0.3, 0.2];
/// let assets = [
///     [0.05, -0.02, 0.03],
///     [0.10, 0.06, 0.08],
///     [0.08, 0.04, 0.06],
/// ];
/// let risk = ia_risk::portfolio_risk(&weights, &assets).unwrap();
/// assert!((risk * 100.0 - 2.78).abs() < 5e-3);
/// ```
pub fn portfolio_risk<S: AsRef<[Rate]>>(weights: &[Real], assets: &[S]) -> Result<Volatility> {
    check_same_length(assets.len(), weights.len())?;
    check_finite(weights, "weights")?;
    let cov = covariance::covariance_matrix(assets)?;
    let variance = cov.quadratic_form(weights)?;
    debug!(assets = assets.len(), variance, "portfolio variance");
    // Σ is positive semi-definite; a negative result is rounding noise
    finite_result(variance.max(0.0).sqrt(), "portfolio risk")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn return_validation() {
        assert!(portfolio_return(&[], &[]).is_err());
        assert!(portfolio_return(&[0.5, 0.5], &[0.1]).is_err());
        assert!(portfolio_return(&[0.5, 0.5], &[0.1, Real::NAN]).is_err());
        assert_abs_diff_eq!(portfolio_return(&[1.0], &[0.07]).unwrap(), 0.07);
    }

    #[test]
    fn single_asset_risk_is_its_volatility() {
        let a = [0.05, -0.02, 0.03, 0.01];
        let sd = covariance::sample_variance(&a).unwrap().sqrt();
        assert_abs_diff_eq!(portfolio_risk(&[1.0], &[a]).unwrap(), sd, epsilon = 1e-15);
        assert_abs_diff_eq!(portfolio_risk(&[2.0], &[a]).unwrap(), 2.0 * sd, epsilon = 1e-15);
    }

    #[test]
    fn perfectly_hedged_pair_has_zero_risk() {
        let a = [0.05, -0.02, 0.03];
        let b = a.map(|x| -x);
        assert_abs_diff_eq!(portfolio_risk(&[0.5, 0.5], &[a, b]).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn risk_validation() {
        let assets = [[0.1, 0.2], [0.0, 0.1]];
        assert!(portfolio_risk(&[1.0], &assets).is_err());
        assert!(portfolio_risk(&[1.0], &[[0.1]]).is_err());
        assert!(portfolio_risk(&[1.0], &[[0.1, Real::INFINITY]]).is_err());
        assert!(portfolio_risk(&[Real::NAN, 0.5], &assets).is_err());
    }
}
