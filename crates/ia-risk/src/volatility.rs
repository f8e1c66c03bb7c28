//! Return volatility and its square-root-of-time scaling.

use ia_core::{
    ensure,
    errors::{check_finite, check_min_len, check_same_length, finite_result},
    Real, Result, Volatility,
};
use ia_math::Statistics;

/// Weighted population standard deviation of `returns`, scaled by
/// `sqrt(time_period)`.
///
/// `probabilities` act as relative frequencies (they are normalised by
/// their sum); `None` weighs every observation equally.  `time_period = 1`
/// leaves the per-period figure unscaled.
///
/// ```
/// let probabilities = [0.30, 0.40, 0.30];
/// let sigma =
///     ia_risk::volatility(&[0.10, 0.05, 0.30], Some(probabilities.as_slice()), 1.0).unwrap();
/// assert!((sigma - 0.1068).abs() < 1e-4);
/// ```
pub fn volatility(
    returns: &[Real],
    probabilities: Option<&[Real]>,
    time_period: Real,
) -> Result<Volatility> {
    check_min_len(1, returns.len())?;
    check_finite(returns, "returns")?;
    ensure!(
        time_period > 0.0,
        "time period must be positive, got {time_period}"
    );

    let mut stats = Statistics::new();
    match probabilities {
        Some(p) => {
            check_same_length(returns.len(), p.len())?;
            check_finite(p, "probabilities")?;
            ensure!(
                p.iter().all(|&w| w >= 0.0),
                "probabilities must be non-negative"
            );
            for (&x, &w) in returns.iter().zip(p) {
                stats.add_weighted(x, w);
            }
        }
        None => {
            for &x in returns {
                stats.add(x);
            }
        }
    }

    ensure!(
        stats.sum_weights() > 0.0,
        "probabilities must not all be zero"
    );
    let sigma = stats.population_std_dev().unwrap_or_default();
    finite_result(sigma * time_period.sqrt(), "volatility")
}

/// Scale a per-period volatility to `periods` periods: `σ · sqrt(periods)`.
///
/// ```
/// let annual = ia_risk::annualized_volatility(0.05, 12.0).unwrap();
/// assert!((annual - 0.1732).abs() < 1e-4);
/// ```
pub fn annualized_volatility(period_volatility: Volatility, periods: Real) -> Result<Volatility> {
    ensure!(
        period_volatility >= 0.0,
        "volatility must be non-negative, got {period_volatility}"
    );
    ensure!(periods > 0.0, "number of periods must be positive, got {periods}");
    finite_result(period_volatility * periods.sqrt(), "annualized volatility")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DAILY: [Real; 5] = [0.01, 0.02, -0.01, 0.03, -0.02];

    #[test]
    fn equal_weights_match_explicit_uniform_probabilities() {
        let uniform = [0.2; 5];
        let a = volatility(&DAILY, None, 1.0).unwrap();
        let b = volatility(&DAILY, Some(uniform.as_slice()), 1.0).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-15);
        assert_abs_diff_eq!(a, 0.018547236991, epsilon = 1e-10);
    }

    #[test]
    fn time_scaling() {
        let sigma = volatility(&DAILY, None, 30.0).unwrap();
        assert_abs_diff_eq!(sigma, 0.101587400794, epsilon = 1e-10);
        let base = volatility(&DAILY, None, 1.0).unwrap();
        assert_abs_diff_eq!(sigma, annualized_volatility(base, 30.0).unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn constant_returns_have_zero_volatility() {
        assert_eq!(volatility(&[0.0, 0.0, 0.0], None, 1.0).unwrap(), 0.0);
        assert_eq!(volatility(&[0.04], None, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn invalid_inputs() {
        assert!(volatility(&[], None, 1.0).is_err());
        assert!(volatility(&DAILY, None, 0.0).is_err());
        assert!(volatility(&DAILY, Some([0.5, 0.5].as_slice()), 1.0).is_err());
        assert!(volatility(&[0.1, 0.2], Some([1.0, -0.5].as_slice()), 1.0).is_err());
        assert!(volatility(&[0.1, 0.2], Some([0.0, 0.0].as_slice()), 1.0).is_err());
        assert!(annualized_volatility(-0.1, 12.0).is_err());
        assert!(annualized_volatility(0.1, 0.0).is_err());
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert!(volatility(&[0.1, Real::NAN], None, 1.0).is_err());
        assert!(volatility(&[0.1, 0.2], Some([0.5, Real::INFINITY].as_slice()), 1.0).is_err());
        assert!(volatility(&DAILY, None, Real::INFINITY).is_err());
        assert!(annualized_volatility(Real::INFINITY, 12.0).is_err());
    }
}
