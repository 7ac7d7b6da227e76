//! # Error Types
//!
//! Domain-specific error types for billbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billbook-core errors (this file)                                      │
//! │  └── ValidationError  - Input and business rule violations             │
//! │                                                                         │
//! │  billbook-store errors (separate crate)                                │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  billbook-session errors (separate crate)                              │
//! │  └── SessionError     - What the UI layer sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → SessionError → UI status message              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, id, ...)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation and business rule errors.
///
/// Every operation boundary validates before mutating state, so a
/// `ValidationError` guarantees nothing was changed or persisted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    ///
    /// ## When This Occurs
    /// - Product price of zero or below
    /// - Line item quantity of zero or below
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A bill line references a product id that is not in the catalog.
    #[error("Product not found in catalog: {id}")]
    UnknownProduct { id: String },

    /// Finalize was called on a draft with no line items.
    #[error("Cannot finalize a bill with no items")]
    EmptyBill,

    /// The bill draft has reached its line item cap.
    #[error("Bill cannot have more than {max} items")]
    BillTooLarge { max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
