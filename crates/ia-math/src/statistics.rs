//! Weighted statistics accumulator.
//!
//! Samples are folded in one at a time using West's weighted update of the
//! running mean and the sum of squared deviations, which avoids the
//! cancellation of the naive `E[x²] - E[x]²` formula when returns are small
//! and close together.

use ia_core::Real;

/// Incremental weighted statistics accumulator.
///
/// Weights are treated as relative frequencies: they need not sum to one.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    sum_w: Real,
    mean: Real,
    // Σ w·(x - mean)², updated incrementally
    m2: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single sample with weight 1.
    pub fn add(&mut self, x: Real) {
        self.add_weighted(x, 1.0);
    }

    /// Add a weighted sample.  Zero weights leave the moments untouched.
    pub fn add_weighted(&mut self, x: Real, weight: Real) {
        if weight == 0.0 {
            return;
        }
        self.sum_w += weight;
        let delta = x - self.mean;
        self.mean += delta * weight / self.sum_w;
        self.m2 += weight * delta * (x - self.mean);
    }

    /// Sum of weights.
    pub fn sum_weights(&self) -> Real {
        self.sum_w
    }

    /// Weighted population variance `Σw(x-μ)² / Σw`.  Returns `None` if the
    /// total weight is zero.
    pub fn population_variance(&self) -> Option<Real> {
        if self.sum_w == 0.0 {
            return None;
        }
        Some((self.m2 / self.sum_w).max(0.0))
    }

    /// Population standard deviation.
    pub fn population_std_dev(&self) -> Option<Real> {
        self.population_variance().map(Real::sqrt)
    }
}
