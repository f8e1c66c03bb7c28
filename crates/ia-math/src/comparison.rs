//! Floating-point comparison utilities.

use ia_core::Real;

/// Default epsilon for close-enough comparisons.
pub const EPSILON: Real = 1e-10;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(x: Real) -> bool {
    close(x, 0.0, EPSILON)
}
