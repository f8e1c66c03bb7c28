//! Single-security return measures.
//!
//! - `return_on_security` — holding-period return including cash flows
//! - `geometric_mean_return` / `annualized_geometric_mean_return`
//! - `arithmetic_mean_return` — probability-weighted expected return

use ia_core::{
    ensure,
    errors::{check_min_len, check_same_length, finite_result},
    Natural, Rate, Real, Result,
};
use ia_math::close;
use tracing::warn;

/// Tolerance on `Σp = 1` before a warning is logged.
const PROBABILITY_SUM_TOLERANCE: Real = 1e-8;

/// Holding-period return `(v1 + cash_flows) / v0 - 1`, as a decimal.
///
/// `cash_flows` are the dividends or coupons received during the period.
pub fn return_on_security(v0: Real, v1: Real, cash_flows: Real) -> Result<Rate> {
    ensure!(v0 != 0.0, "initial value must be non-zero");
    finite_result((v1 + cash_flows) / v0 - 1.0, "security return")
}

/// Geometric mean of a series of periodic returns:
/// `(Π(1 + r_i))^(1/n) - 1`.
///
/// Every return must be finite and at least `-100 %`.
///
/// ```
/// let g = ia_risk::geometric_mean_return(&[0.05, 0.02, -0.03]).unwrap();
/// assert!((g - 0.0128).abs() < 1e-4);
/// ```
pub fn geometric_mean_return(returns: &[Rate]) -> Result<Rate> {
    check_min_len(1, returns.len())?;
    for &r in returns {
        ensure!(
            r.is_finite() && r >= -1.0,
            "periodic returns must be finite and at least -100%, got {r}"
        );
    }
    // summed in log space; ln(0) = -inf maps a total loss back to -100 %
    let mean_log: Real = returns.iter().map(|r| r.ln_1p()).sum::<Real>() / returns.len() as Real;
    finite_result(mean_log.exp_m1(), "geometric mean return")
}

/// Geometric mean return compounded up to a yearly figure:
/// `(1 + g)^periods_per_year - 1`.
pub fn annualized_geometric_mean_return(
    returns: &[Rate],
    periods_per_year: Natural,
) -> Result<Rate> {
    ensure!(periods_per_year > 0, "periods per year must be positive");
    let g = geometric_mean_return(returns)?;
    finite_result(
        (1.0 + g).powf(Real::from(periods_per_year)) - 1.0,
        "annualized geometric mean return",
    )
}

/// Probability-weighted mean return `Σ p_i · r_i`.
///
/// With `probabilities = None` every outcome is equally likely.  Supplied
/// probabilities are used as given; a warning is logged when they do not
/// sum to one.
pub fn arithmetic_mean_return(returns: &[Rate], probabilities: Option<&[Real]>) -> Result<Rate> {
    check_min_len(1, returns.len())?;
    let Some(p) = probabilities else {
        return finite_result(
            returns.iter().sum::<Real>() / returns.len() as Real,
            "arithmetic mean return",
        );
    };
    check_same_length(returns.len(), p.len())?;
    ensure!(
        p.iter().all(|&pi| pi >= 0.0),
        "probabilities must be non-negative"
    );
    let total: Real = p.iter().sum();
    if !close(total, 1.0, PROBABILITY_SUM_TOLERANCE) {
        warn!(total, "probabilities do not sum to one");
    }
    finite_result(
        returns.iter().zip(p).map(|(r, pi)| r * pi).sum(),
        "arithmetic mean return",
    )
}
