//! # Domain Types
//!
//! Core domain types used throughout BillBook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌─────────────────┐   ┌─────────────────┐      │
//! │  │ BusinessProfile  │   │    Product      │   │      Bill       │      │
//! │  │  ──────────────  │   │  ─────────────  │   │  ─────────────  │      │
//! │  │  business_name   │   │  id (UUID)      │   │  bill_id (UUID) │      │
//! │  │  address         │   │  name           │   │  customer_name  │      │
//! │  │  phone/email     │   │  price (Money)  │   │  items[]        │      │
//! │  │  created_at      │   │  unit           │   │  grand_total    │      │
//! │  └──────────────────┘   └─────────────────┘   └────────┬────────┘      │
//! │                                                        │               │
//! │                                               ┌────────▼────────┐      │
//! │                                               │  BillLineItem   │      │
//! │                                               │  ─────────────  │      │
//! │                                               │  name/price     │      │
//! │                                               │  (snapshots)    │      │
//! │                                               │  quantity       │      │
//! │                                               │  subtotal       │      │
//! │                                               └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `BillLineItem` freezes the product name and price at the moment it is
//! added. Catalog changes after that moment never touch existing bills, and
//! deleting history never touches the catalog - the two collections are
//! fully independent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Business Profile
// =============================================================================

/// The business identity printed on every receipt.
///
/// One instance exists per installation; re-running setup overwrites it
/// wholesale. Created once, replaced only by a full wipe-and-resetup cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Display name shown in the app header and on receipts.
    pub business_name: String,

    /// Street address printed on receipts.
    pub address: String,

    /// Optional contact phone.
    pub phone: Option<String>,

    /// Optional contact email.
    pub email: Option<String>,

    /// When setup was completed.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for billing.
///
/// Products are append-only: there is no update or delete operation, and
/// duplicate names are allowed. The collection keeps insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the catalog and on bills.
    pub name: String,

    /// Unit price. Strictly positive.
    pub price: Money,

    /// Sale unit, e.g. "Pcs", "Kg", "Ltr".
    pub unit: String,

    /// When the product was added to the catalog.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Bill Line Item
// =============================================================================

/// A line item on a bill.
/// Uses the snapshot pattern to freeze product data at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLineItem {
    /// Unique identifier for this line (UUID v4).
    pub id: String,

    /// Id of the catalog product this line was created from.
    pub product_id: String,

    /// Product name at add time (frozen).
    pub name: String,

    /// Unit price at add time (frozen).
    pub price: Money,

    /// Quantity sold. Strictly positive, may be fractional (1.5 kg).
    pub quantity: Decimal,

    /// Line subtotal, always price × quantity as of add time.
    pub subtotal: Money,
}

// =============================================================================
// Bill
// =============================================================================

/// A finalized sale record in billing history.
///
/// ## Invariants
/// - `grand_total` equals the sum of item subtotals at save time
/// - items are a deep copy of the draft; nothing aliases the catalog
/// - immutable once appended to history, except whole-record deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Unique identifier (UUID v4).
    pub bill_id: String,

    /// When the bill was finalized.
    pub date: DateTime<Utc>,

    /// Customer name, defaulted to "Cash Customer" when blank.
    pub customer_name: String,

    /// Customer phone, defaulted to "N/A" when blank.
    pub customer_phone: String,

    /// Ordered line items (frozen snapshots).
    pub items: Vec<BillLineItem>,

    /// Sum of line subtotals at finalize time.
    pub grand_total: Money,
}

impl Bill {
    /// Recomputes the sum of line subtotals.
    ///
    /// For a well-formed bill this always equals `grand_total`; the
    /// aggregator and tests use it as a consistency check.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(|item| item.subtotal).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
