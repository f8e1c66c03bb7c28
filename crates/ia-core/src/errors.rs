//! Error types for investalchemy.
//!
//! Every fallible formula in the workspace reports invalid inputs through a
//! single `thiserror`-derived enum.  Precondition checks go through the
//! `ensure!` macro and postcondition checks through `ensure_post!`.

use crate::Real;
use thiserror::Error;

/// The top-level error type used throughout investalchemy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (an input is outside the formula's domain).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (the result is not a finite number).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Two inputs that must line up element by element do not.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The expected length.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// Not enough observations for the requested statistic.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },
}

/// Shorthand `Result` type used throughout investalchemy.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::DimensionMismatch)` unless both lengths agree.
pub fn check_same_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Return `Err(Error::InsufficientData)` unless `actual >= required`.
pub fn check_min_len(required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(Error::InsufficientData { required, actual });
    }
    Ok(())
}

/// Fail with a precondition error unless every entry of `values` is finite.
pub fn check_finite(values: &[Real], what: &str) -> Result<()> {
    for (i, &x) in values.iter().enumerate() {
        crate::ensure!(x.is_finite(), "{what}[{i}] must be finite, got {x}");
    }
    Ok(())
}

/// Pass `value` through, failing with a postcondition error when it is NaN
/// or infinite.
pub fn finite_result(value: Real, what: &str) -> Result<Real> {
    crate::ensure_post!(value.is_finite(), "{what} is not finite: {value}");
    Ok(value)
}

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ia_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ia_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ia_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> ia_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result.is_finite(), "result must be finite, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(f64::INFINITY).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
