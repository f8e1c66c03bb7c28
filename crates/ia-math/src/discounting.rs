//! Periodic compounding and discounting.
//!
//! All helpers assume a flat periodic rate `r` compounded once per period:
//! the compound factor over `n` periods is `(1 + r)^n` and the discount
//! factor is its reciprocal.  Rates at or below `-100 %` make the growth
//! factor non-positive and are rejected by [`check_rate`].

use ia_core::{ensure, errors::finite_result, DiscountFactor, Natural, Rate, Real, Result};

/// Fail unless `1 + r > 0`.
pub fn check_rate(r: Rate) -> Result<()> {
    ensure!(
        r.is_finite() && r > -1.0,
        "periodic rate must be finite and greater than -100%, got {r}"
    );
    Ok(())
}

/// Compound factor `(1 + r)^n`.
#[inline]
pub fn compound_factor(r: Rate, n: Natural) -> Real {
    // powi takes i32; clamp rather than wrap for absurdly long horizons
    (1.0 + r).powi(i32::try_from(n).unwrap_or(i32::MAX))
}

/// Discount factor `(1 + r)^-n`.
#[inline]
pub fn discount_factor(r: Rate, n: Natural) -> DiscountFactor {
    1.0 / compound_factor(r, n)
}

/// Present value of a stream of amounts, the first received at `first_period`
/// and each subsequent one period later.
///
/// Fails if the discounted sum overflows, e.g. for rates close to `-100 %`
/// over long horizons.
pub fn present_value_of_stream<I>(amounts: I, r: Rate, first_period: Natural) -> Result<Real>
where
    I: IntoIterator<Item = Real>,
{
    check_rate(r)?;
    let v = 1.0 / (1.0 + r);
    let mut df = discount_factor(r, first_period);
    let mut pv = 0.0;
    for amount in amounts {
        pv += amount * df;
        df *= v;
    }
    finite_result(pv, "present value")
}
