//! Stock returns and dividend-based valuation.
//!
//! - `return_on_stock` — holding-period return, in percent
//! - `dividend_discount_model` — PV of a finite run of level dividends
//! - `gordon_growth_model` — PV of a dividend growing forever at `g`
//! - `net_present_value` — NPV of cash flows starting today

use ia_core::{ensure, errors::finite_result, Natural, Price, Rate, Real, Result};
use ia_math::discounting::present_value_of_stream;
use tracing::debug;

/// Total return on a stock over a holding period, **in percent**.
///
/// Capital gain plus dividend yield, both measured against the purchase
/// price: `((P1 - P0) + D) / P0 · 100`.
///
/// ```
/// let r = ia_equity::return_on_stock(100.0, 120.0, 5.0).unwrap();
/// assert!((r - 25.0).abs() < 1e-12);
/// ```
pub fn return_on_stock(
    initial_price: Price,
    current_price: Price,
    dividend_payment: Real,
) -> Result<Real> {
    ensure!(
        initial_price > 0.0,
        "initial price must be positive, got {initial_price}"
    );
    let capital_gains = (current_price - initial_price) / initial_price;
    let dividend_yield = dividend_payment / initial_price;
    finite_result((capital_gains + dividend_yield) * 100.0, "return on stock")
}

/// Present value of a level dividend paid at the end of each of the next
/// `t` periods, discounted at `r`.
///
/// `t = 0` values to zero.
pub fn dividend_discount_model(dividend_payment: Real, r: Rate, t: Natural) -> Result<Price> {
    present_value_of_stream((0..t).map(|_| dividend_payment), r, 1)
}

/// Gordon growth model: `D / (r - g)`.
///
/// `dividend_payment` is the next dividend; it grows at `g` forever.  The
/// model only converges when `r > g`, and a spread small enough to overflow
/// the quotient is rejected as well.
pub fn gordon_growth_model(dividend_payment: Real, r: Rate, g: Rate) -> Result<Price> {
    ensure!(
        r > g,
        "discount rate ({r}) must be greater than growth rate ({g})"
    );
    finite_result(dividend_payment / (r - g), "Gordon growth price")
}

/// Net present value of `cash_flows`, where `cash_flows[t]` arrives at the
/// end of period `t`.  The first flow (`t = 0`) is not discounted.
pub fn net_present_value(cash_flows: &[Real], r: Rate) -> Result<Real> {
    let npv = present_value_of_stream(cash_flows.iter().copied(), r, 0)?;
    debug!(flows = cash_flows.len(), rate = r, npv, "net present value");
    Ok(npv)
}
