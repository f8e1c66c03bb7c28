//! Price multiples and yields.

use ia_core::{ensure, errors::finite_result, Price, Real, Result};

/// Price-to-earnings ratio `price / eps`.  Undefined for non-positive
/// earnings.
pub fn price_to_earnings_ratio(price: Price, earnings_per_share: Real) -> Result<Real> {
    ensure!(
        earnings_per_share > 0.0,
        "earnings per share must be positive, got {earnings_per_share}"
    );
    finite_result(price / earnings_per_share, "P/E ratio")
}

/// Earnings yield `eps / price`, the reciprocal of the P/E ratio.
pub fn earnings_yield(price: Price, earnings_per_share: Real) -> Result<Real> {
    ensure!(
        earnings_per_share > 0.0,
        "earnings per share must be positive, got {earnings_per_share}"
    );
    ensure!(price > 0.0, "price must be positive, got {price}");
    finite_result(earnings_per_share / price, "earnings yield")
}

/// Dividend yield `dividend / price`.
pub fn dividend_yield(dividend_payment: Real, price: Price) -> Result<Real> {
    ensure!(price > 0.0, "price must be positive, got {price}");
    finite_result(dividend_payment / price, "dividend yield")
}
