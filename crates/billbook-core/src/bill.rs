//! # Bill Draft
//!
//! The transient bill being composed. Lives only in memory; nothing is
//! persisted until the draft is finalized into a [`Bill`].
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Draft Operations                                │
//! │                                                                         │
//! │  UI Action               Session Operation        Draft State Change   │
//! │  ─────────               ─────────────────        ──────────────────   │
//! │                                                                         │
//! │  Pick product + qty ────► add_item() ───────────► items.push(line)     │
//! │                                                                         │
//! │  Click remove ──────────► remove_item() ────────► items.retain(..)     │
//! │                                                                         │
//! │  Click new bill ────────► reset() ──────────────► items.clear()        │
//! │                                                                         │
//! │  Click finalize ────────► finalize() ───────────► Bill snapshot        │
//! │                                                    (draft cleared by   │
//! │                                                     the session)       │
//! │                                                                         │
//! │  NOTE: Adding the same product twice appends a second independent      │
//! │        line; quantities are never merged. That is how the billing      │
//! │        counter works: two bags of rice weighed separately stay two     │
//! │        lines on the receipt.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Bill, BillLineItem, Product};
use crate::validation::{normalize_or_default, validate_quantity};
use crate::{DEFAULT_CUSTOMER_NAME, DEFAULT_CUSTOMER_PHONE, MAX_BILL_ITEMS};

// =============================================================================
// Bill Draft
// =============================================================================

/// The in-progress bill for the current session.
///
/// ## Invariants
/// - Every line's `subtotal` equals `price × quantity` as of add time
/// - Lines keep insertion order
/// - At most [`MAX_BILL_ITEMS`] lines
#[derive(Debug, Clone, Default)]
pub struct BillDraft {
    items: Vec<BillLineItem>,
}

impl BillDraft {
    /// Creates a new empty draft.
    pub fn new() -> Self {
        BillDraft { items: Vec::new() }
    }

    /// Adds a line item from a catalog product.
    ///
    /// ## Price Freezing
    /// Name and price are captured at this moment. If the catalog entry
    /// changes later (it cannot today - products are append-only), the
    /// line keeps the values the customer saw.
    ///
    /// ## Behavior
    /// Always appends a new line, even when the product is already on the
    /// bill. Line merging is deliberately not performed.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: Decimal,
    ) -> ValidationResult<&BillLineItem> {
        validate_quantity(quantity)?;

        if self.items.len() >= MAX_BILL_ITEMS {
            return Err(ValidationError::BillTooLarge {
                max: MAX_BILL_ITEMS,
            });
        }

        let line = BillLineItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            subtotal: product.price.multiply_quantity(quantity),
        };
        self.items.push(line);

        // Just pushed, so last() is always present.
        Ok(self.items.last().expect("line was just pushed"))
    }

    /// Removes the line with the given id.
    ///
    /// Silently does nothing when no line matches - removing an already
    /// removed line is not an error at the counter.
    ///
    /// ## Returns
    /// `true` when a line was removed (for caller-side logging).
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|line| line.id != item_id);
        self.items.len() < initial_len
    }

    /// Returns the current lines in insertion order.
    pub fn items(&self) -> &[BillLineItem] {
        &self.items
    }

    /// Returns the number of lines on the draft.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the draft has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line subtotals; zero for an empty draft.
    pub fn current_total(&self) -> Money {
        self.items.iter().map(|line| line.subtotal).sum()
    }

    /// Discards all lines unconditionally.
    ///
    /// Destructive-intent confirmation is the caller's concern.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Builds an immutable [`Bill`] snapshot from the current lines.
    ///
    /// ## Behavior
    /// - Empty draft → [`ValidationError::EmptyBill`], nothing produced
    /// - Blank customer fields default to "Cash Customer" / "N/A"
    /// - Items are deep-copied; the draft itself is left untouched so the
    ///   caller decides when to reset it (after the persist attempt)
    pub fn finalize(&self, customer_name: &str, customer_phone: &str) -> ValidationResult<Bill> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptyBill);
        }

        let items = self.items.clone();
        let grand_total = items.iter().map(|line| line.subtotal).sum();

        Ok(Bill {
            bill_id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            customer_name: normalize_or_default(customer_name, DEFAULT_CUSTOMER_NAME),
            customer_phone: normalize_or_default(customer_phone, DEFAULT_CUSTOMER_PHONE),
            items,
            grand_total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, major: i64, minor: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_major_minor(major, minor),
            unit: "Pcs".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_item_snapshots_price() {
        let mut draft = BillDraft::new();
        let rice = product("rice", 82, 50);

        let line = draft.add_item(&rice, Decimal::new(15, 1)).unwrap();
        assert_eq!(line.product_id, "rice");
        assert_eq!(line.price, rice.price);
        assert_eq!(line.subtotal, Money::from_major_minor(123, 75));
    }

    #[test]
    fn test_repeat_additions_stay_separate_lines() {
        let mut draft = BillDraft::new();
        let rice = product("rice", 10, 0);

        draft.add_item(&rice, Decimal::from(2)).unwrap();
        draft.add_item(&rice, Decimal::from(3)).unwrap();

        // Two independent lines, not one merged line of quantity 5.
        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.current_total(), Money::from_major_minor(50, 0));
    }

    #[test]
    fn test_add_item_rejects_bad_quantity() {
        let mut draft = BillDraft::new();
        let rice = product("rice", 10, 0);

        assert!(draft.add_item(&rice, Decimal::ZERO).is_err());
        assert!(draft.add_item(&rice, Decimal::from(-1)).is_err());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_remove_item_is_silent_when_absent() {
        let mut draft = BillDraft::new();
        let rice = product("rice", 10, 0);
        let line_id = draft
            .add_item(&rice, Decimal::ONE)
            .unwrap()
            .id
            .clone();

        assert!(!draft.remove_item("no-such-line"));
        assert_eq!(draft.item_count(), 1);

        assert!(draft.remove_item(&line_id));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_current_total_tracks_adds_and_removes() {
        let mut draft = BillDraft::new();
        let a = product("a", 10, 0);
        let b = product("b", 5, 0);

        let first = draft.add_item(&a, Decimal::from(2)).unwrap().id.clone();
        draft.add_item(&b, Decimal::from(3)).unwrap();
        assert_eq!(draft.current_total(), Money::from_major_minor(35, 0));

        draft.remove_item(&first);
        assert_eq!(draft.current_total(), Money::from_major_minor(15, 0));

        draft.clear();
        assert_eq!(draft.current_total(), Money::zero());
    }

    #[test]
    fn test_finalize_empty_draft_fails() {
        let draft = BillDraft::new();
        assert_eq!(
            draft.finalize("", "").unwrap_err(),
            ValidationError::EmptyBill
        );
    }

    #[test]
    fn test_finalize_defaults_and_grand_total() {
        let mut draft = BillDraft::new();
        draft.add_item(&product("a", 10, 0), Decimal::from(2)).unwrap();
        draft.add_item(&product("b", 5, 0), Decimal::from(3)).unwrap();

        let bill = draft.finalize("  ", "").unwrap();
        assert_eq!(bill.customer_name, DEFAULT_CUSTOMER_NAME);
        assert_eq!(bill.customer_phone, DEFAULT_CUSTOMER_PHONE);
        assert_eq!(bill.grand_total, Money::from_major_minor(35, 0));
        assert_eq!(bill.items[0].subtotal, Money::from_major_minor(20, 0));
        assert_eq!(bill.items[1].subtotal, Money::from_major_minor(15, 0));

        // Finalize is a snapshot; the draft still holds its lines.
        assert_eq!(draft.item_count(), 2);
    }

    #[test]
    fn test_finalize_keeps_entered_customer() {
        let mut draft = BillDraft::new();
        draft.add_item(&product("a", 10, 0), Decimal::ONE).unwrap();

        let bill = draft.finalize(" Anita ", " 98765 ").unwrap();
        assert_eq!(bill.customer_name, "Anita");
        assert_eq!(bill.customer_phone, "98765");
    }

    #[test]
    fn test_bill_item_cap() {
        let mut draft = BillDraft::new();
        let p = product("a", 1, 0);
        for _ in 0..MAX_BILL_ITEMS {
            draft.add_item(&p, Decimal::ONE).unwrap();
        }
        assert!(matches!(
            draft.add_item(&p, Decimal::ONE),
            Err(ValidationError::BillTooLarge { .. })
        ));
    }
}
