//! # Error Types
//!
//! Domain-specific error types for neu-vending-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  neu-vending-core errors (this file)                                   │
//! │  ├── CoreError        - Purchase and session failures                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  console errors (separate crate)                                       │
//! │  └── ConsoleError     - I/O, config and output failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed by the console            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Some conditions are deliberately modelled as plain values:
//! - Selecting an index outside the catalog leaves the selection as it was
//! - Asking for the selected product with nothing selected returns `None`
//! - Decrementing stock that is already zero does nothing
//!
//! Insufficient funds and a missing selection only become errors when the
//! caller asks to complete a purchase.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Returned by operations that change money or stock. When one of these is
/// returned, the session state is exactly what it was before the call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A purchase was requested with no product selected.
    #[error("No product selected")]
    NoSelection,

    /// Money inserted does not cover the selected product.
    ///
    /// ## User Workflow
    /// ```text
    /// Select "NEU Fair Mug" (₱250)
    ///      │
    ///      ▼
    /// Insert ₱200
    ///      │
    ///      ▼
    /// complete_purchase()
    ///      │
    ///      ▼
    /// InsufficientFunds { product: "NEU Fair Mug", price: ₱250, inserted: ₱200 }
    ///      │
    ///      ▼
    /// UI shows: "Insert ₱50 more"
    /// ```
    #[error("Insufficient funds for {product}: price {price}, inserted {inserted}")]
    InsufficientFunds {
        product: String,
        price: Money,
        inserted: Money,
    },

    /// The selected product has no stock left.
    #[error("{product} is out of stock")]
    OutOfStock { product: String },

    /// A machine cannot be built over an empty catalog.
    #[error("Catalog must contain at least one product")]
    EmptyCatalog,

    /// The money accumulator would overflow.
    #[error("Inserting {amount} would overflow the money counter")]
    AmountOverflow { amount: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// How much more money the customer must insert, if that is the problem.
    pub fn shortfall(&self) -> Option<Money> {
        match self {
            CoreError::InsufficientFunds {
                price, inserted, ..
            } => Some(*price - *inserted),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientFunds {
            product: "NEU Fair Mug".to_string(),
            price: Money::from_pesos(250),
            inserted: Money::from_pesos(200),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds for NEU Fair Mug: price ₱250, inserted ₱200"
        );

        let err = CoreError::OutOfStock {
            product: "Ballpen".to_string(),
        };
        assert_eq!(err.to_string(), "Ballpen is out of stock");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount cannot be negative");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_shortfall() {
        let err = CoreError::InsufficientFunds {
            product: "NEU Fair Mug".to_string(),
            price: Money::from_pesos(250),
            inserted: Money::from_pesos(200),
        };
        assert_eq!(err.shortfall(), Some(Money::from_pesos(50)));
        assert_eq!(CoreError::NoSelection.shortfall(), None);
    }
}
