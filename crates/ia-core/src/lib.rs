//! # ia-core
//!
//! Core types, error definitions, and settings for investalchemy.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace: numeric type aliases, the error hierarchy with its
//! `ensure!` / `ensure_post!` macros, and the process-wide [`Settings`] that hold
//! the day-count [`Conventions`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

/// Global library settings (day-count conventions).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Non-negative integer used for period and day counts.
pub type Natural = u32;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor.
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Conventions, ScopedConventions, Settings};
