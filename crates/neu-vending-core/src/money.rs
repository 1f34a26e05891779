//! # Money Module
//!
//! Provides the `Money` type for amounts handled by the machine.
//!
//! ## Whole Pesos
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price on the machine is a whole number of pesos:                 │
//! │                                                                         │
//! │    Ballpen ₱15   Tote Bag ₱100   NEU Fair Hoodie ₱550                   │
//! │                                                                         │
//! │  Coins and bills are whole pesos too, so there is no minor unit.        │
//! │  Integer arithmetic keeps change exact: ₱20 - ₱15 = ₱5, always.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use neu_vending_core::money::Money;
//!
//! let price = Money::from_pesos(15);
//! let inserted = Money::from_pesos(20);
//!
//! assert_eq!(inserted - price, Money::from_pesos(5));
//! assert_eq!(price.to_string(), "₱15");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

/// Currency marker used when rendering amounts.
pub const CURRENCY_SYMBOL: &str = "₱";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole pesos.
///
/// ## Design Decisions
/// - **i64 (signed)**: change is computed as `inserted - price` and may be
///   negative before the purchase is affordable
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money Is Used
/// ```text
/// Product.price ──────────────┐
///                             ▼
/// insert_money() ──► money_inserted ──► calculate_change() ──► Receipt.change
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use neu_vending_core::money::Money;
    ///
    /// let price = Money::from_pesos(250);
    /// assert_eq!(price.pesos(), 250);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos)
    }

    /// Returns the value in pesos.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use neu_vending_core::money::Money;
    ///
    /// let total = Money::from_pesos(20).checked_add(Money::from_pesos(30));
    /// assert_eq!(total, Some(Money::from_pesos(50)));
    ///
    /// assert_eq!(Money::from_pesos(i64::MAX).checked_add(Money::from_pesos(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `₱450`, or `-₱5` for a shortfall.
///
/// ## Note
/// Fixed marker, no grouping separators. Localised formatting belongs to the
/// front-end.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, self.0.unsigned_abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<u32> for Money {
    fn from(pesos: u32) -> Self {
        Money(i64::from(pesos))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
