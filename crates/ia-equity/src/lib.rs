//! # ia-equity
//!
//! Equity valuation formulas: holding-period return on a stock, dividend
//! discount and Gordon growth models, net present value, and the P/E,
//! earnings-yield and dividend-yield multiples.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Price multiples and yields.
pub mod multiples;

/// Stock returns and dividend-based valuation.
pub mod valuation;

pub use multiples::{dividend_yield, earnings_yield, price_to_earnings_ratio};
pub use valuation::{
    dividend_discount_model, gordon_growth_model, net_present_value, return_on_stock,
};
