//! # Validation Module
//!
//! Input validation utilities for BillBook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI layer (external)                                          │
//! │  ├── Basic format checks (empty fields, number parsing)                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session operation (Rust)                                     │
//! │  └── THIS MODULE: business rule validation before any mutation         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain invariants                                            │
//! │  └── subtotal = price × quantity, grand_total = Σ subtotals            │
//! │                                                                         │
//! │  A ValidationError at layer 2 guarantees nothing was persisted.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

/// Upper bound for free-text fields (names, addresses).
const MAX_TEXT_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed value, so callers never persist surrounding whitespace.
///
/// ## Example
/// ```rust
/// use billbook_core::validation::validate_required;
///
/// assert_eq!(validate_required("businessName", "  Sharma Stores ").unwrap(), "Sharma Stores");
/// assert!(validate_required("businessName", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value.to_string())
}

/// Normalizes an optional text field.
///
/// Trims the value and maps blank input to `None`, matching how the
/// setup form treats phone and email.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) => {
            let v = v.trim();
            if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        }
        None => None,
    }
}

/// Normalizes a defaulted text field (customer name, phone, unit).
///
/// Blank input falls back to the given default.
pub fn normalize_or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive (free items are not billable)
///
/// ## Example
/// ```rust
/// use billbook_core::validation::validate_price;
/// use billbook_core::Money;
///
/// assert!(validate_price(Money::from_major_minor(10, 50)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be strictly positive
/// - May be fractional (1.5 kg is a valid quantity)
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
