//! # Vending Machine Session
//!
//! Owns the catalog and the state of the transaction in progress.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State (informal)                             │
//! │                                                                         │
//! │  ┌──────────┐  select   ┌───────────┐  insert  ┌──────────┐            │
//! │  │   Idle   │──────────►│ Selecting │─────────►│ Funding  │◄──┐        │
//! │  │ money=0  │           └───────────┘          └────┬─────┘   │insert  │
//! │  └──────────┘                                       │─────────┘        │
//! │       ▲                                  can_purchase() == true        │
//! │       │                                             ▼                   │
//! │       │   complete_purchase / cancel_transaction ┌────────────┐        │
//! │       └──────────────────────────────────────────│ ReadyToBuy │        │
//! │                                                  └────────────┘        │
//! │                                                                         │
//! │  NOTE: Transitions are driven by the caller. Operations may be called  │
//! │        in any order (e.g. insert money before selecting).              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use neu_vending_core::{Money, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! machine.select_product(3); // Ballpen, ₱15
//! machine.insert_money(Money::from_pesos(20)).unwrap();
//! assert!(machine.can_purchase());
//!
//! let receipt = machine.complete_purchase().unwrap();
//! assert_eq!(receipt.change, Money::from_pesos(5));
//! assert_eq!(machine.catalog()[3].stock(), 9);
//! ```

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, PurchaseReceipt, Selection};
use crate::validation::validate_insert_amount;

/// Products loaded into every new machine: (name, price in pesos, stock).
pub const SEED_PRODUCTS: [(&str, u32, u32); 6] = [
    ("NEU Fair T Shirt", 450, 10),
    ("NEU Fair Hoodie", 550, 10),
    ("NEU Fair Mug", 250, 10),
    ("Ballpen", 15, 10),
    ("NEU Lanyard", 150, 10),
    ("Tote Bag", 100, 10),
];

// =============================================================================
// Vending Machine
// =============================================================================

/// A vending machine and its current transaction.
///
/// ## Invariants
/// - `Selection::Selected(i)` always satisfies `i < catalog.len()`
/// - `money_inserted` is never negative
/// - Catalog order never changes, since selection is positional
#[derive(Debug, Clone)]
pub struct VendingMachine {
    session_id: Uuid,
    catalog: Vec<Product>,
    money_inserted: Money,
    selection: Selection,
    sales_count: u64,
}

impl VendingMachine {
    /// Creates a machine stocked with the standard six products.
    pub fn new() -> Self {
        let mut machine = VendingMachine {
            session_id: Uuid::new_v4(),
            catalog: Vec::with_capacity(SEED_PRODUCTS.len()),
            money_inserted: Money::zero(),
            selection: Selection::None,
            sales_count: 0,
        };
        machine.initialize_catalog();
        machine
    }

    /// Creates a machine over a caller-supplied catalog.
    ///
    /// ## Errors
    /// `CoreError::EmptyCatalog` if `products` is empty.
    pub fn with_catalog(products: Vec<Product>) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        Ok(VendingMachine {
            session_id: Uuid::new_v4(),
            catalog: products,
            money_inserted: Money::zero(),
            selection: Selection::None,
            sales_count: 0,
        })
    }

    fn initialize_catalog(&mut self) {
        self.catalog.extend(
            SEED_PRODUCTS
                .iter()
                .map(|&(name, price, stock)| Product::new(name, price, stock)),
        );
        debug!(
            session_id = %self.session_id,
            products = self.catalog.len(),
            "Catalog initialized"
        );
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Read-only view of the products, in selection order.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Number of purchases completed by this machine.
    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    pub fn total_money_inserted(&self) -> Money {
        self.money_inserted
    }

    /// The currently selected product, or `None` when nothing is selected.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selection
            .index()
            .and_then(|index| self.catalog.get(index))
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selects the product at `index`.
    ///
    /// Indices outside the catalog (including negative ones) are ignored and
    /// the previous selection stays in place. Returns whether the selection
    /// was applied.
    pub fn select_product(&mut self, index: i64) -> bool {
        match usize::try_from(index) {
            Ok(index) if index < self.catalog.len() => {
                self.selection = Selection::Selected(index);
                debug!(
                    session_id = %self.session_id,
                    index,
                    product = self.catalog[index].name(),
                    "Product selected"
                );
                true
            }
            _ => {
                debug!(session_id = %self.session_id, index, "Ignoring out-of-range selection");
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    // -------------------------------------------------------------------------
    // Money
    // -------------------------------------------------------------------------

    /// Adds `amount` to the money inserted so far and returns the new total.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a negative amount
    /// - `CoreError::AmountOverflow` if the total would overflow
    ///
    /// On error the total is unchanged.
    pub fn insert_money(&mut self, amount: Money) -> CoreResult<Money> {
        if let Err(err) = validate_insert_amount(amount) {
            warn!(session_id = %self.session_id, %amount, "Rejected money insertion");
            return Err(err.into());
        }

        let total = self
            .money_inserted
            .checked_add(amount)
            .ok_or(CoreError::AmountOverflow { amount })?;
        self.money_inserted = total;

        debug!(session_id = %self.session_id, %amount, %total, "Money inserted");
        Ok(total)
    }

    pub fn reset_money(&mut self) {
        self.money_inserted = Money::zero();
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    /// True when a product is selected and the money inserted covers its
    /// price. Stock is not considered here; see
    /// [`complete_purchase`](Self::complete_purchase).
    pub fn can_purchase(&self) -> bool {
        self.selected_product()
            .is_some_and(|product| self.money_inserted >= product.price())
    }

    /// Money owed back to the customer.
    ///
    /// With no selection this is everything inserted. Otherwise it is
    /// `inserted - price`, which is negative until
    /// [`can_purchase`](Self::can_purchase) returns true.
    pub fn calculate_change(&self) -> Money {
        match self.selected_product() {
            None => self.money_inserted,
            Some(product) => self.money_inserted - product.price(),
        }
    }

    /// Completes the purchase of the selected product.
    ///
    /// ## Steps (all or nothing)
    /// ```text
    /// selection? ──no──► NoSelection
    ///     │
    /// money >= price? ──no──► InsufficientFunds
    ///     │
    /// in stock? ──no──► OutOfStock
    ///     │
    ///     ▼
    /// decrement stock ─► compute change ─► reset money ─► clear selection
    /// ```
    ///
    /// On error nothing changes: money, selection and stock are as before.
    pub fn complete_purchase(&mut self) -> CoreResult<PurchaseReceipt> {
        let tendered = self.money_inserted;

        let index = self.selection.index().ok_or_else(|| {
            warn!(session_id = %self.session_id, "Purchase attempted with no selection");
            CoreError::NoSelection
        })?;
        let product = self
            .catalog
            .get_mut(index)
            .ok_or(CoreError::NoSelection)?;

        if tendered < product.price() {
            warn!(
                session_id = %self.session_id,
                product = product.name(),
                price = %product.price(),
                %tendered,
                "Purchase refused: insufficient funds"
            );
            return Err(CoreError::InsufficientFunds {
                product: product.name().to_string(),
                price: product.price(),
                inserted: tendered,
            });
        }

        if !product.is_in_stock() {
            warn!(
                session_id = %self.session_id,
                product = product.name(),
                "Purchase refused: out of stock"
            );
            return Err(CoreError::OutOfStock {
                product: product.name().to_string(),
            });
        }

        product.decrement_stock();
        let receipt = PurchaseReceipt {
            id: Uuid::new_v4().to_string(),
            session_id: self.session_id.to_string(),
            product_name: product.name().to_string(),
            price: product.price(),
            tendered,
            change: tendered - product.price(),
            remaining_stock: product.stock(),
            completed_at: Utc::now(),
        };

        self.money_inserted = Money::zero();
        self.selection = Selection::None;
        self.sales_count += 1;

        info!(
            session_id = %self.session_id,
            receipt_id = %receipt.id,
            product = %receipt.product_name,
            change = %receipt.change,
            remaining_stock = receipt.remaining_stock,
            "Purchase completed"
        );
        Ok(receipt)
    }

    /// Abandons the current transaction.
    ///
    /// Returns the money to hand back, then resets the money counter and
    /// clears the selection.
    pub fn cancel_transaction(&mut self) -> Money {
        let refund = self.money_inserted;
        self.reset_money();
        self.clear_selection();

        info!(session_id = %self.session_id, %refund, "Transaction cancelled");
        refund
    }

    /// Snapshot of the session for display.
    pub fn status(&self) -> MachineStatus {
        MachineStatus::from(self)
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Machine Status
// =============================================================================

/// Session summary for front-end display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    pub money_inserted: Money,
    pub selection: Selection,
    pub selected_product: Option<String>,
    pub selected_price: Option<Money>,
    pub can_purchase: bool,
    pub change: Money,
}

impl From<&VendingMachine> for MachineStatus {
    fn from(machine: &VendingMachine) -> Self {
        let selected = machine.selected_product();
        MachineStatus {
            money_inserted: machine.total_money_inserted(),
            selection: machine.selection(),
            selected_product: selected.map(|p| p.name().to_string()),
            selected_price: selected.map(Product::price),
            can_purchase: machine.can_purchase(),
            change: machine.calculate_change(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const MUG: i64 = 2;
    const BALLPEN: i64 = 3;
    const TOTE_BAG: i64 = 5;

    fn pesos(amount: i64) -> Money {
        Money::from_pesos(amount)
    }

    #[test]
    fn test_catalog_seeding() {
        let machine = VendingMachine::new();
        let catalog = machine.catalog();

        assert_eq!(catalog.len(), 6);
        let seeded: Vec<(&str, i64, u32)> = catalog
            .iter()
            .map(|p| (p.name(), p.price().pesos(), p.stock()))
            .collect();
        assert_eq!(
            seeded,
            vec![
                ("NEU Fair T Shirt", 450, 10),
                ("NEU Fair Hoodie", 550, 10),
                ("NEU Fair Mug", 250, 10),
                ("Ballpen", 15, 10),
                ("NEU Lanyard", 150, 10),
                ("Tote Bag", 100, 10),
            ]
        );
        assert_eq!(machine.total_money_inserted(), Money::zero());
        assert_eq!(machine.selection(), Selection::None);
        assert!(machine.selected_product().is_none());
    }

    #[test]
    fn test_select_product() {
        let mut machine = VendingMachine::new();
        assert!(machine.select_product(MUG));
        assert_eq!(machine.selection(), Selection::Selected(2));
        assert_eq!(machine.selected_product().unwrap().name(), "NEU Fair Mug");
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut machine = VendingMachine::new();

        // Nothing selected yet: stays unselected
        assert!(!machine.select_product(-1));
        assert!(!machine.select_product(6));
        assert!(machine.selected_product().is_none());

        // Existing selection survives bad indices
        machine.select_product(TOTE_BAG);
        assert!(!machine.select_product(-1));
        assert!(!machine.select_product(machine.catalog().len() as i64));
        assert!(!machine.select_product(i64::MAX));
        assert_eq!(machine.selected_product().unwrap().name(), "Tote Bag");
    }

    #[test]
    fn test_money_accumulates() {
        let mut machine = VendingMachine::new();
        assert_eq!(machine.insert_money(pesos(20)).unwrap(), pesos(20));
        assert_eq!(machine.insert_money(pesos(30)).unwrap(), pesos(50));
        assert_eq!(machine.total_money_inserted(), pesos(50));
    }

    #[test]
    fn test_negative_insertion_rejected() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(100)).unwrap();

        let err = machine.insert_money(pesos(-50)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { .. })
        ));
        assert_eq!(machine.total_money_inserted(), pesos(100));
    }

    #[test]
    fn test_insertion_overflow_rejected() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(i64::MAX)).unwrap();

        let err = machine.insert_money(pesos(1)).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
        assert_eq!(machine.total_money_inserted(), pesos(i64::MAX));
    }

    #[test]
    fn test_reset_money() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(1234)).unwrap();
        machine.reset_money();
        assert_eq!(machine.total_money_inserted(), Money::zero());

        machine.reset_money();
        assert_eq!(machine.total_money_inserted(), Money::zero());
    }

    #[test]
    fn test_can_purchase_boundary() {
        let mut machine = VendingMachine::new();
        machine.select_product(MUG);

        machine.insert_money(pesos(249)).unwrap();
        assert!(!machine.can_purchase());

        machine.insert_money(pesos(1)).unwrap();
        assert!(machine.can_purchase());
    }

    #[test]
    fn test_cannot_purchase_without_selection() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(10_000)).unwrap();
        assert!(!machine.can_purchase());
    }

    #[test]
    fn test_calculate_change() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(150)).unwrap();

        // No selection: everything is refundable
        assert_eq!(machine.calculate_change(), pesos(150));

        machine.select_product(TOTE_BAG);
        assert_eq!(machine.calculate_change(), pesos(50));

        // Before funds are sufficient the result is a shortfall
        machine.select_product(MUG);
        assert_eq!(machine.calculate_change(), pesos(-100));
    }

    #[test]
    fn test_end_to_end_purchase() {
        let mut machine = VendingMachine::new();
        machine.select_product(BALLPEN);
        machine.insert_money(pesos(20)).unwrap();
        assert!(machine.can_purchase());

        let receipt = machine.complete_purchase().unwrap();

        assert_eq!(receipt.change, pesos(5));
        assert_eq!(receipt.price, pesos(15));
        assert_eq!(receipt.tendered, pesos(20));
        assert_eq!(receipt.product_name, "Ballpen");
        assert_eq!(receipt.remaining_stock, 9);
        assert_eq!(receipt.session_id, machine.session_id().to_string());

        assert_eq!(machine.catalog()[3].stock(), 9);
        assert_eq!(machine.total_money_inserted(), Money::zero());
        assert_eq!(machine.selection(), Selection::None);
        assert_eq!(machine.sales_count(), 1);
    }

    #[test]
    fn test_purchase_without_selection_changes_nothing() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(500)).unwrap();

        let err = machine.complete_purchase().unwrap_err();
        assert!(matches!(err, CoreError::NoSelection));
        assert_eq!(machine.total_money_inserted(), pesos(500));
        assert_eq!(machine.sales_count(), 0);
    }

    #[test]
    fn test_purchase_with_insufficient_funds_changes_nothing() {
        let mut machine = VendingMachine::new();
        machine.select_product(MUG);
        machine.insert_money(pesos(200)).unwrap();

        let err = machine.complete_purchase().unwrap_err();
        assert_eq!(err.shortfall(), Some(pesos(50)));
        assert_eq!(machine.total_money_inserted(), pesos(200));
        assert_eq!(machine.selection(), Selection::Selected(2));
        assert_eq!(machine.catalog()[2].stock(), 10);
    }

    #[test]
    fn test_purchase_out_of_stock_changes_nothing() {
        let mut machine =
            VendingMachine::with_catalog(vec![Product::new("Ballpen", 15, 0)]).unwrap();
        machine.select_product(0);
        machine.insert_money(pesos(15)).unwrap();
        assert!(machine.can_purchase());

        let err = machine.complete_purchase().unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { .. }));
        assert_eq!(machine.total_money_inserted(), pesos(15));
        assert_eq!(machine.selection(), Selection::Selected(0));
        assert_eq!(machine.catalog()[0].stock(), 0);
    }

    #[test]
    fn test_exact_payment_gives_zero_change() {
        let mut machine = VendingMachine::new();
        machine.select_product(TOTE_BAG);
        machine.insert_money(pesos(100)).unwrap();

        let receipt = machine.complete_purchase().unwrap();
        assert!(receipt.change.is_zero());
    }

    #[test]
    fn test_buy_until_empty() {
        let mut machine = VendingMachine::new();
        for _ in 0..10 {
            machine.select_product(BALLPEN);
            machine.insert_money(pesos(15)).unwrap();
            machine.complete_purchase().unwrap();
        }
        assert_eq!(machine.catalog()[3].stock(), 0);

        machine.select_product(BALLPEN);
        machine.insert_money(pesos(15)).unwrap();
        assert!(matches!(
            machine.complete_purchase(),
            Err(CoreError::OutOfStock { .. })
        ));
        assert_eq!(machine.sales_count(), 10);
    }

    #[test]
    fn test_cancel_transaction() {
        let mut machine = VendingMachine::new();
        machine.select_product(MUG);
        machine.insert_money(pesos(100)).unwrap();

        assert_eq!(machine.cancel_transaction(), pesos(100));
        assert_eq!(machine.total_money_inserted(), Money::zero());
        assert_eq!(machine.selection(), Selection::None);
        assert_eq!(machine.catalog()[2].stock(), 10);
    }

    #[test]
    fn test_with_catalog_rejects_empty() {
        assert!(matches!(
            VendingMachine::with_catalog(Vec::new()),
            Err(CoreError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_status_snapshot() {
        let mut machine = VendingMachine::new();
        machine.insert_money(pesos(150)).unwrap();
        machine.select_product(TOTE_BAG);

        let status = machine.status();
        assert_eq!(
            status,
            MachineStatus {
                money_inserted: pesos(150),
                selection: Selection::Selected(5),
                selected_product: Some("Tote Bag".to_string()),
                selected_price: Some(pesos(100)),
                can_purchase: true,
                change: pesos(50),
            }
        );

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["moneyInserted"], 150);
        assert_eq!(json["selection"]["selected"], 5);
        assert_eq!(json["canPurchase"], true);
    }
}
