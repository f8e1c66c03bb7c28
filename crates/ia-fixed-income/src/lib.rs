//! # ia-fixed-income
//!
//! Fixed-income pricing formulas: effective annual rate, annuity compound
//! and discount factors, annuity, perpetuity and level-coupon bond prices,
//! and Treasury-bill price, yield and APR.
//!
//! All rates are periodic decimals unless stated otherwise; Treasury-bill
//! day-count bases come from [`ia_core::Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Effective rates, annuity factors, and perpetuities.
pub mod annuities;

/// Level-coupon bond pricing.
pub mod bonds;

/// Treasury-bill pricing and yields.
pub mod treasury_bills;

pub use annuities::{
    annuity_compound_factor, annuity_discount_factor, annuity_price, effective_annual_rate,
    perpetuity_price, perpetuity_price_flat,
};
pub use bonds::bond_price;
pub use treasury_bills::{
    apr_for_treasury_bills, apr_for_treasury_bills_with, treasury_bill_price,
    treasury_bill_price_with, yield_for_treasury_bill,
};
