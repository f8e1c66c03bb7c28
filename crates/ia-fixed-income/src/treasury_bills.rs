//! Treasury-bill (discount instrument) pricing and yields.
//!
//! The plain functions read the day-count bases from the global
//! [`Settings`]; the `_with` variants take the [`Conventions`] explicitly.

use ia_core::{ensure, errors::finite_result, Conventions, Natural, Price, Rate, Real, Result, Settings};

/// Price from the bank-discount yield:
/// `P · (1 - d · days / money_market_basis)`.
///
/// ```
/// let p = ia_fixed_income::treasury_bill_price(1000.0, 0.02, 90).unwrap();
/// assert!((p - 995.0).abs() < 1e-9);
/// ```
pub fn treasury_bill_price(principal: Real, d: Rate, days: Natural) -> Result<Price> {
    treasury_bill_price_with(&Settings::instance().conventions(), principal, d, days)
}

/// [`treasury_bill_price`] under explicit conventions.
pub fn treasury_bill_price_with(
    conventions: &Conventions,
    principal: Real,
    d: Rate,
    days: Natural,
) -> Result<Price> {
    conventions.validate()?;
    let year_fraction = Real::from(days) / Real::from(conventions.money_market_basis);
    finite_result(principal * (1.0 - d * year_fraction), "treasury bill price")
}

/// Holding-period yield `principal / price - 1`.
pub fn yield_for_treasury_bill(principal: Real, price: Price) -> Result<Rate> {
    ensure!(price > 0.0, "price must be positive, got {price}");
    finite_result(principal / price - 1.0, "treasury bill yield")
}

/// Annualise a holding-period yield `r` earned over `days`:
/// `r · bond_equivalent_basis / days`.
pub fn apr_for_treasury_bills(r: Rate, days: Natural) -> Result<Rate> {
    apr_for_treasury_bills_with(&Settings::instance().conventions(), r, days)
}

/// [`apr_for_treasury_bills`] under explicit conventions.
pub fn apr_for_treasury_bills_with(
    conventions: &Conventions,
    r: Rate,
    days: Natural,
) -> Result<Rate> {
    conventions.validate()?;
    ensure!(days > 0, "days to maturity must be positive");
    finite_result(
        r * Real::from(conventions.bond_equivalent_basis) / Real::from(days),
        "treasury bill APR",
    )
}
