//! # investalchemy
//!
//! Closed-form formulas for equity valuation, fixed-income pricing, and
//! return/risk statistics.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ia-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! investalchemy = "0.1"
//! ```
//!
//! ```rust
//! use investalchemy::{equity, fixed_income, risk};
//!
//! let price = equity::gordon_growth_model(5.0, 0.05, 0.02).unwrap();
//! assert!((price - 166.67).abs() < 1e-2);
//!
//! let bond = fixed_income::bond_price(50.0, 1000.0, 0.05, 10).unwrap();
//! assert!((bond - 1000.0).abs() < 1e-9);
//!
//! let sigma = risk::portfolio_risk(&[0.5, 0.5], &[[0.01, 0.03], [0.02, 0.00]]).unwrap();
//! assert!(sigma >= 0.0);
//! ```
//!
//! Invalid inputs are reported as [`core::Error`] values rather than
//! `NaN` or infinities:
//!
//! ```rust
//! use investalchemy::{core::Error, equity};
//!
//! let err = equity::gordon_growth_model(5.0, 0.02, 0.05).unwrap_err();
//! assert!(matches!(err, Error::Precondition(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use ia_core as core;

/// Discounting, statistics, covariance, and matrix utilities.
pub use ia_math as math;

/// Equity valuation formulas.
pub use ia_equity as equity;

/// Fixed-income pricing formulas.
pub use ia_fixed_income as fixed_income;

/// Security- and portfolio-level return and risk statistics.
pub use ia_risk as risk;
