//! Sample covariance and correlation.
//!
//! Pairwise statistics delegate to `statrs`; the matrix forms lay the
//! pairwise results out in a [`Matrix`] with one row/column per series.
//! All estimators use the `n - 1` (sample) denominator.

use crate::matrix::Matrix;
use ia_core::{
    ensure,
    errors::{check_finite, check_min_len, check_same_length, finite_result},
    Real, Result,
};
use statrs::statistics::Statistics as _;

fn check_pair(a: &[Real], b: &[Real]) -> Result<()> {
    check_same_length(a.len(), b.len())?;
    check_min_len(2, a.len())?;
    check_finite(a, "observations")?;
    check_finite(b, "observations")
}

fn is_constant(data: &[Real]) -> bool {
    data.iter().all(|&x| x == data[0])
}

/// Validate a set of series: at least one series, each with the same
/// number (at least two) of observations.  Returns that number.
pub fn check_series<S: AsRef<[Real]>>(series: &[S]) -> Result<usize> {
    check_min_len(1, series.len())?;
    let n = series[0].as_ref().len();
    check_min_len(2, n)?;
    for s in &series[1..] {
        check_same_length(n, s.as_ref().len())?;
    }
    for s in series {
        check_finite(s.as_ref(), "observations")?;
    }
    Ok(n)
}

/// Sample variance of `data`.
pub fn sample_variance(data: &[Real]) -> Result<Real> {
    check_min_len(2, data.len())?;
    check_finite(data, "observations")?;
    finite_result(data.iter().variance(), "sample variance")
}

/// Sample covariance of two equally long series.
pub fn sample_covariance(a: &[Real], b: &[Real]) -> Result<Real> {
    check_pair(a, b)?;
    finite_result(a.iter().covariance(b.iter()), "sample covariance")
}

/// Pearson correlation of two equally long series.
///
/// Fails if either series is constant.
pub fn correlation(a: &[Real], b: &[Real]) -> Result<Real> {
    check_pair(a, b)?;
    ensure!(
        !is_constant(a) && !is_constant(b),
        "correlation is undefined for a series with zero variance"
    );
    let var_a = a.iter().variance();
    let var_b = b.iter().variance();
    let rho = finite_result(
        a.iter().covariance(b.iter()) / (var_a * var_b).sqrt(),
        "correlation",
    )?;
    Ok(rho.clamp(-1.0, 1.0))
}

/// Sample covariance matrix; `series[i]` holds the observations of the
/// i-th variable.
pub fn covariance_matrix<S: AsRef<[Real]>>(series: &[S]) -> Result<Matrix> {
    check_series(series)?;
    let k = series.len();
    let mut upper = vec![0.0; k * k];
    for i in 0..k {
        for j in i..k {
            let c = series[i].as_ref().iter().covariance(series[j].as_ref().iter());
            let c = finite_result(c, "sample covariance")?;
            upper[i * k + j] = c;
            upper[j * k + i] = c;
        }
    }
    Ok(Matrix::from_row_slice(k, k, &upper))
}

/// Correlation matrix derived from the sample covariance matrix.
///
/// Fails if any series is constant.
pub fn correlation_matrix<S: AsRef<[Real]>>(series: &[S]) -> Result<Matrix> {
    let cov = covariance_matrix(series)?;
    for (i, s) in series.iter().enumerate() {
        ensure!(
            !is_constant(s.as_ref()),
            "correlation is undefined: series {i} has zero variance"
        );
    }
    let sd: Vec<Real> = cov.diagonal().into_iter().map(Real::sqrt).collect();
    Ok(Matrix::from_fn(series.len(), |i, j| {
        if i == j {
            1.0
        } else {
            (cov[(i, j)] / (sd[i] * sd[j])).clamp(-1.0, 1.0)
        }
    }))
}
