//! # ia-risk
//!
//! Return and risk statistics, for a single security and for a portfolio
//! of assets.
//!
//! Single-security measures: holding-period return, geometric and
//! arithmetic mean returns, volatility.  Portfolio measures: weighted
//! return, pairwise covariance/correlation, covariance and correlation
//! matrices, and portfolio standard deviation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Portfolio-level return and risk.
pub mod portfolio;

/// Single-security return measures.
pub mod returns;

/// Return volatility.
pub mod volatility;

pub use portfolio::{
    correlation_between, correlation_matrix, covariance_between, covariance_matrix,
    portfolio_return, portfolio_risk,
};
pub use returns::{
    annualized_geometric_mean_return, arithmetic_mean_return, geometric_mean_return,
    return_on_security,
};
pub use volatility::{annualized_volatility, volatility};
