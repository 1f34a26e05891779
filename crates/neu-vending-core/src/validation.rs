//! # Validation Module
//!
//! Input validation for values that come from outside the machine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console                                                      │
//! │  ├── Parses numbers from the command line                              │
//! │  └── Rejects malformed input before calling the core                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Money cannot be negative                                          │
//! │  └── Product names are present and bounded                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  └── Stock is unsigned, so it can never drop below zero                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most `MAX_PRODUCT_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use neu_vending_core::validation::validate_product_name;
///
/// assert!(validate_product_name("NEU Fair Mug").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an amount of money inserted into the machine.
///
/// ## Rules
/// - Must be non-negative; a negative insertion would let the money
///   counter drop below zero
/// - Zero is accepted and changes nothing
///
/// ## Example
/// ```rust
/// use neu_vending_core::money::Money;
/// use neu_vending_core::validation::validate_insert_amount;
///
/// assert!(validate_insert_amount(Money::from_pesos(20)).is_ok());
/// assert!(validate_insert_amount(Money::zero()).is_ok());
/// assert!(validate_insert_amount(Money::from_pesos(-20)).is_err());
/// ```
pub fn validate_insert_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
