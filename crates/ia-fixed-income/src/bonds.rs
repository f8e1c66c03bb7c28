//! Level-coupon bond pricing.

use crate::annuities::annuity_discount_factor;
use ia_core::{errors::finite_result, Natural, Price, Rate, Real, Result};
use ia_math::discounting::discount_factor;

/// Price of a bond paying `coupon` at the end of each of `n` periods and
/// `principal` with the final coupon, discounted at the periodic yield `r`.
///
/// A bond whose coupon rate equals `r` prices at par.
///
/// ```
/// let p = ia_fixed_income::bond_price(50.0, 1000.0, 0.05, 10).unwrap();
/// assert!((p - 1000.0).abs() < 1e-9);
/// ```
pub fn bond_price(coupon: Real, principal: Real, r: Rate, n: Natural) -> Result<Price> {
    let coupons = coupon * annuity_discount_factor(r, n)?;
    let redemption = principal * discount_factor(r, n);
    finite_result(coupons + redemption, "bond price")
}
