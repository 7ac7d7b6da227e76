//! # Sales Report
//!
//! Derives per-product sales totals from billing history on demand.
//!
//! ## How Aggregation Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sales Aggregation                                    │
//! │                                                                         │
//! │  billing_history                                                        │
//! │  ┌──────────────────────────────┐                                      │
//! │  │ Bill #1: rice×2, oil×1       │    group lines by productId          │
//! │  │ Bill #2: rice×1.5            │ ─────────────────────────────►       │
//! │  │ Bill #3: oil×3, soap×4       │                                      │
//! │  └──────────────────────────────┘                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ rice  │ totalQuantity 3.5 │ totalIncome ...  │  sorted by income    │
//! │  │ oil   │ totalQuantity 4   │ totalIncome ...  │  (descending)        │
//! │  │ soap  │ totalQuantity 4   │ totalIncome ...  │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! │                                                                         │
//! │  Grouping uses the product id AS RECORDED AT BILL TIME. A product      │
//! │  can never leave the catalog, but even if it could, historical         │
//! │  groups would stay stable because only the snapshot is consulted.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and read-only: history is borrowed, never mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Bill;

// =============================================================================
// Report Types
// =============================================================================

/// Aggregated sales for one product across all bills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    /// Product id as recorded on the line items.
    pub product_id: String,

    /// Product name from the first line item seen for this id.
    pub name: String,

    /// Total quantity sold across all bills.
    pub total_quantity: Decimal,

    /// Total income (sum of line subtotals) for this product.
    pub total_income: Money,
}

/// A full sales report over billing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Per-product rows, descending by total income.
    pub rows: Vec<ProductSales>,

    /// Sum of every line subtotal in history.
    pub grand_total_revenue: Money,
}

impl SalesReport {
    /// An empty report (no sales recorded).
    pub fn empty() -> Self {
        SalesReport {
            rows: Vec::new(),
            grand_total_revenue: Money::zero(),
        }
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes per-product totals over the given bills.
///
/// ## Ordering
/// Rows are sorted descending by `total_income`. Ties keep first-seen
/// order (the sort is stable).
///
/// ## Example
/// ```rust
/// use billbook_core::report::compute_report;
///
/// let report = compute_report(&[]);
/// assert!(report.rows.is_empty());
/// assert!(report.grand_total_revenue.is_zero());
/// ```
pub fn compute_report(bills: &[Bill]) -> SalesReport {
    let mut rows: Vec<ProductSales> = Vec::new();
    let mut grand_total_revenue = Money::zero();

    for bill in bills {
        for line in &bill.items {
            grand_total_revenue += line.subtotal;

            // Linear scan keeps first-seen ordering; catalogs are small.
            match rows.iter_mut().find(|row| row.product_id == line.product_id) {
                Some(row) => {
                    row.total_quantity += line.quantity;
                    row.total_income += line.subtotal;
                }
                None => rows.push(ProductSales {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    total_quantity: line.quantity,
                    total_income: line.subtotal,
                }),
            }
        }
    }

    rows.sort_by(|a, b| b.total_income.cmp(&a.total_income));

    SalesReport {
        rows,
        grand_total_revenue,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
