//! # ia-math
//!
//! Mathematical utilities shared by the formula crates: periodic
//! discounting, floating-point comparison, a weighted statistics
//! accumulator, sample covariance/correlation (via statrs), and a matrix
//! newtype over nalgebra.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Sample covariance and correlation.
pub mod covariance;

/// Periodic compounding and discounting.
pub mod discounting;

/// Matrix newtype.
pub mod matrix;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, is_zero};
pub use discounting::{check_rate, compound_factor, discount_factor};
pub use matrix::Matrix;
pub use statistics::Statistics;
