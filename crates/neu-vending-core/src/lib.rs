//! # neu-vending-core: Pure Business Logic for the NEU Vending Machine
//!
//! This crate holds everything the machine decides: what is for sale, how
//! much money has gone in, whether a purchase is affordable and how much
//! change comes back. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      NEU Vending Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console (apps/console)                          │   │
//! │  │    list ──► select ──► insert ──► buy / cancel                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct method calls                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ neu-vending-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  machine  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Vending  │  │   rules   │  │   │
//! │  │   │ Selection │  │           │  │  Machine  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE SESSION                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Selection, PurchaseReceipt)
//! - [`money`] - Whole-peso money type
//! - [`machine`] - The vending machine session
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use neu_vending_core::{Money, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! machine.select_product(5); // Tote Bag, ₱100
//! machine.insert_money(Money::from_pesos(150)).unwrap();
//!
//! assert!(machine.can_purchase());
//! assert_eq!(machine.calculate_change(), Money::from_pesos(50));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod machine;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use machine::{MachineStatus, VendingMachine};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// ## Business Reason
/// Names are printed on a single display line.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;
