//! # Domain Types
//!
//! Core domain types used by the vending machine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │    Selection    │   │  PurchaseReceipt    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name (fixed)   │   │  None           │   │  id (UUID)          │   │
//! │  │  price (fixed)  │   │  Selected(idx)  │   │  product_name       │   │
//! │  │  stock (u32)    │   │                 │   │  tendered / change  │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A product stocked in the machine.
///
/// Name and price are fixed at construction. Stock is the only mutable
/// field and can only change one unit at a time through
/// [`decrement_stock`](Product::decrement_stock) and
/// [`increment_stock`](Product::increment_stock).
///
/// ## Example
/// ```rust
/// use neu_vending_core::Product;
///
/// let mut pen = Product::new("Ballpen", 15, 1);
/// pen.decrement_stock();
/// pen.decrement_stock(); // already empty, nothing happens
///
/// assert_eq!(pen.stock(), 0);
/// assert_eq!(pen.describe(), "Ballpen - ₱15 (Stock: 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Product {
    name: String,
    price: Money,
    stock: u32,
}

impl Product {
    /// Creates a product. The price is unsigned, so it is always valid.
    pub fn new(name: impl Into<String>, price_pesos: u32, stock: u32) -> Self {
        Product {
            name: name.into(),
            price: Money::from(price_pesos),
            stock,
        }
    }

    /// Creates a product from caller-supplied values, validating them.
    ///
    /// The name is stored trimmed.
    pub fn try_new(name: &str, price: Money, stock: u32) -> ValidationResult<Self> {
        validate_product_name(name)?;
        validate_price(price)?;

        Ok(Product {
            name: name.trim().to_string(),
            price,
            stock,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// True while at least one unit is left.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Removes one unit. Does nothing when the product is already empty.
    pub fn decrement_stock(&mut self) {
        if self.stock > 0 {
            self.stock -= 1;
        }
    }

    /// Adds one unit.
    pub fn increment_stock(&mut self) {
        self.stock = self.stock.saturating_add(1);
    }

    /// Human-readable line for catalog listings, e.g.
    /// `NEU Fair Mug - ₱250 (Stock: 10)`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (Stock: {})", self.name, self.price, self.stock)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The product the customer has chosen, by catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Nothing chosen yet (or the last transaction finished).
    #[default]
    None,
    /// Index into the machine's catalog.
    Selected(usize),
}

impl Selection {
    /// Returns the selected catalog index, if any.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Selected(index) => Some(*index),
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

// =============================================================================
// Purchase Receipt
// =============================================================================

/// Record of a completed purchase.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseReceipt {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Session that made the sale.
    pub session_id: String,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    /// Price paid.
    pub price: Money,
    /// Money the customer had inserted.
    pub tendered: Money,
    /// Change returned (`tendered - price`).
    pub change: Money,
    /// Units left after this sale.
    pub remaining_stock: u32,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accessors() {
        let mug = Product::new("NEU Fair Mug", 250, 10);
        assert_eq!(mug.name(), "NEU Fair Mug");
        assert_eq!(mug.price(), Money::from_pesos(250));
        assert_eq!(mug.stock(), 10);
        assert!(mug.is_in_stock());
    }

    #[test]
    fn test_stock_never_goes_below_zero() {
        let mut shirt = Product::new("NEU Fair T Shirt", 450, 10);
        for _ in 0..(10 + 5) {
            shirt.decrement_stock();
        }
        assert_eq!(shirt.stock(), 0);
        assert!(!shirt.is_in_stock());
    }

    #[test]
    fn test_increment_stock() {
        let mut lanyard = Product::new("NEU Lanyard", 150, 0);
        lanyard.increment_stock();
        assert_eq!(lanyard.stock(), 1);

        let mut full = Product::new("Tote Bag", 100, u32::MAX);
        full.increment_stock();
        assert_eq!(full.stock(), u32::MAX);
    }

    #[test]
    fn test_describe() {
        let hoodie = Product::new("NEU Fair Hoodie", 550, 10);
        assert_eq!(hoodie.describe(), "NEU Fair Hoodie - ₱550 (Stock: 10)");
        assert_eq!(hoodie.describe(), hoodie.to_string());
    }

    #[test]
    fn test_try_new_validates() {
        let bag = Product::try_new("  Tote Bag ", Money::from_pesos(100), 3).unwrap();
        assert_eq!(bag.name(), "Tote Bag");

        assert!(Product::try_new("", Money::from_pesos(100), 3).is_err());
        assert!(Product::try_new("Tote Bag", Money::from_pesos(-1), 3).is_err());
    }

    #[test]
    fn test_selection_default_and_index() {
        assert_eq!(Selection::default(), Selection::None);
        assert!(Selection::None.is_none());
        assert_eq!(Selection::None.index(), None);
        assert_eq!(Selection::Selected(3).index(), Some(3));
    }

    #[test]
    fn test_selection_serialization() {
        assert_eq!(serde_json::to_string(&Selection::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::to_string(&Selection::Selected(2)).unwrap(),
            "{\"selected\":2}"
        );
    }
}
