//! Effective rates, annuity factors, and perpetuities.
//!
//! Rates are periodic and payments arrive at the end of each period
//! (ordinary annuities).

use ia_core::{ensure, errors::finite_result, Natural, Price, Rate, Real, Result};
use ia_math::discounting::{check_rate, compound_factor, discount_factor};
use ia_math::is_zero;

/// Effective annual rate from a periodic rate compounded `n` times a year:
/// `(1 + r)^n - 1`.
///
/// ```
/// let ear = ia_fixed_income::effective_annual_rate(0.01, 12).unwrap();
/// assert!((ear - 0.126825).abs() < 1e-6);
/// ```
pub fn effective_annual_rate(r: Rate, n: Natural) -> Result<Rate> {
    check_rate(r)?;
    finite_result(compound_factor(r, n) - 1.0, "effective annual rate")
}

/// Future value of an ordinary annuity paying 1 per period:
/// `((1 + r)^n - 1) / r`.
///
/// At `r = 0` this is the limit value `n`.
pub fn annuity_compound_factor(r: Rate, n: Natural) -> Result<Real> {
    check_rate(r)?;
    if is_zero(r) {
        return Ok(Real::from(n));
    }
    finite_result((compound_factor(r, n) - 1.0) / r, "annuity compound factor")
}

/// Present value of an ordinary annuity paying 1 per period:
/// `(1 - (1 + r)^-n) / r`.
///
/// At `r = 0` this is the limit value `n`.
pub fn annuity_discount_factor(r: Rate, n: Natural) -> Result<Real> {
    check_rate(r)?;
    if is_zero(r) {
        return Ok(Real::from(n));
    }
    finite_result((1.0 - discount_factor(r, n)) / r, "annuity discount factor")
}

/// Present value of `n` level payments.
pub fn annuity_price(payment: Real, r: Rate, n: Natural) -> Result<Price> {
    finite_result(payment * annuity_discount_factor(r, n)?, "annuity price")
}

/// Price of a growing perpetuity `CF / (r - g)`; `cash_flow` is paid one
/// period from now and grows at `g` thereafter.
pub fn perpetuity_price(cash_flow: Real, r: Rate, g: Rate) -> Result<Price> {
    ensure!(
        r > g,
        "discount rate ({r}) must be greater than growth rate ({g})"
    );
    finite_result(cash_flow / (r - g), "perpetuity price")
}

/// Price of a level perpetuity `CF / r`.
pub fn perpetuity_price_flat(cash_flow: Real, r: Rate) -> Result<Price> {
    perpetuity_price(cash_flow, r, 0.0)
}
