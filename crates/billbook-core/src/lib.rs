//! # billbook-core: Pure Business Logic for BillBook
//!
//! This crate is the **heart** of BillBook. It contains all billing
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BillBook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI layer (external)                          │   │
//! │  │    Setup form ──► Catalog ──► Bill form ──► History/Report     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 billbook-session (state layer)                  │   │
//! │  │    submit_setup, add_product, add_item, finalize, login, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ billbook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   bill    │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │ BillDraft │  │  Sales    │  │   │
//! │  │   │   Bill    │  │  Decimal  │  │ LineItem  │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              billbook-store (persistence layer)                 │   │
//! │  │           Key→JSON document store, repositories                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BusinessProfile, Product, Bill, ...)
//! - [`money`] - Money type over exact decimal arithmetic
//! - [`bill`] - The transient bill draft being composed
//! - [`report`] - Per-product sales aggregation over billing history
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic
//! 2. **No I/O**: Store, network, file system access is FORBIDDEN here
//! 3. **Exact Decimals**: Monetary values use `rust_decimal`, never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billbook_core::Money` instead of
// `use billbook_core::money::Money`

pub use bill::BillDraft;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use report::{compute_report, ProductSales, SalesReport};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Unit assigned to a product when the unit field is left blank.
pub const DEFAULT_UNIT: &str = "Pcs";

/// Customer name recorded on a bill when none is given.
pub const DEFAULT_CUSTOMER_NAME: &str = "Cash Customer";

/// Customer phone recorded on a bill when none is given.
pub const DEFAULT_CUSTOMER_PHONE: &str = "N/A";

/// Maximum line items allowed on a single bill draft.
///
/// ## Business Reason
/// Prevents runaway bills and keeps receipts printable on a single roll.
pub const MAX_BILL_ITEMS: usize = 100;
