//! Global library settings.
//!
//! [`Settings`] holds the day-count [`Conventions`] used by the money-market
//! formulas (Treasury-bill pricing and APR).  It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the conventions are stored behind a `Mutex` so that they
//! can be changed from any thread.  Code that changes them temporarily
//! should do so through [`ScopedConventions`], which restores the previous
//! value on drop.

use crate::errors::Result;
use crate::{ensure, Natural};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::info;

/// Days in the year assumed by the bank-discount (money-market) yield.
pub const MONEY_MARKET_BASIS: Natural = 360;

/// Days in the year assumed when annualising a holding-period yield.
pub const BOND_EQUIVALENT_BASIS: Natural = 365;

/// Day-count conventions for money-market instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Conventions {
    /// Days per year in the discount-yield formula.
    pub money_market_basis: Natural,
    /// Days per year used to annualise a holding-period yield.
    pub bond_equivalent_basis: Natural,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            money_market_basis: MONEY_MARKET_BASIS,
            bond_equivalent_basis: BOND_EQUIVALENT_BASIS,
        }
    }
}

impl Conventions {
    /// Create a new set of conventions, rejecting zero-day years.
    pub fn new(money_market_basis: Natural, bond_equivalent_basis: Natural) -> Result<Self> {
        let conventions = Self {
            money_market_basis,
            bond_equivalent_basis,
        };
        conventions.validate()?;
        Ok(conventions)
    }

    /// Check that both bases are positive.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.money_market_basis > 0,
            "money-market basis must be positive, got {}",
            self.money_market_basis
        );
        ensure!(
            self.bond_equivalent_basis > 0,
            "bond-equivalent basis must be positive, got {}",
            self.bond_equivalent_basis
        );
        Ok(())
    }
}

/// Process-wide settings used by the investalchemy library.
pub struct Settings {
    conventions: Mutex<Conventions>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            conventions: Mutex::new(Conventions::default()),
        })
    }

    // A panic while holding the lock cannot leave a `Copy` value half-written.
    fn lock(&self) -> MutexGuard<'_, Conventions> {
        self.conventions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The conventions currently in force.
    pub fn conventions(&self) -> Conventions {
        *self.lock()
    }

    /// Replace the conventions, returning the previous value.
    pub fn set_conventions(&self, conventions: Conventions) -> Result<Conventions> {
        conventions.validate()?;
        let previous = std::mem::replace(&mut *self.lock(), conventions);
        info!(
            money_market_basis = conventions.money_market_basis,
            bond_equivalent_basis = conventions.bond_equivalent_basis,
            "day-count conventions updated"
        );
        Ok(previous)
    }

    /// Restore the default conventions (360 / 365).
    pub fn reset_conventions(&self) {
        *self.lock() = Conventions::default();
    }
}

/// Installs a set of conventions for the lifetime of the guard.
///
/// ```
/// use ia_core::{Conventions, ScopedConventions, Settings};
///
/// {
///     let _guard = ScopedConventions::new(Conventions::new(365, 365).unwrap()).unwrap();
///     assert_eq!(Settings::instance().conventions().money_market_basis, 365);
/// }
/// assert_eq!(Settings::instance().conventions(), Conventions::default());
/// ```
#[must_use = "the previous conventions are restored as soon as the guard is dropped"]
pub struct ScopedConventions {
    previous: Conventions,
}

impl ScopedConventions {
    /// Install `conventions`, remembering the ones currently in force.
    pub fn new(conventions: Conventions) -> Result<Self> {
        let previous = Settings::instance().set_conventions(conventions)?;
        Ok(Self { previous })
    }
}

impl Drop for ScopedConventions {
    fn drop(&mut self) {
        *Settings::instance().lock() = self.previous;
    }
}
