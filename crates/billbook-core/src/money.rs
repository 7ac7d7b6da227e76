//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic, so 10.00 × 1.5 is exactly 15.00           │
//! │                                                                         │
//! │  Why not integer cents? Quantities are fractional (1.5 kg of rice at   │
//! │  ₹ 82.50), so subtotals need decimal × decimal, not cents × count.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billbook_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::new(Decimal::new(1050, 2)); // 10.50
//! let line = price * Decimal::new(3, 0);         // 31.50
//! assert_eq!(line, Money::new(Decimal::new(3150, 2)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **Newtype over `Decimal`**: every monetary value in the system flows
///   through this type, so quantities and amounts cannot be confused
/// - **Ord derive**: report rows sort by income
/// - **Transparent serde**: persisted documents carry the plain decimal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units (rupees and paise).
    ///
    /// ## Example
    /// ```rust
    /// use billbook_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // 10.99
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_major_minor(major: i64, minor: u32) -> Self {
        Money(Decimal::new(major * 100 + minor as i64, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly positive.
    ///
    /// Product prices must satisfy this before entering the catalog.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Multiplies the amount by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Basmati Rice ₹ 82.50 / Kg
    /// Quantity: 1.5
    ///      │
    ///      ▼
    /// multiply_quantity(1.5) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: ₹ 123.75
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, quantity: Decimal) -> Self {
        Money(self.0 * quantity)
    }

    /// Returns the amount rounded to two decimal places.
    ///
    /// Stored amounts keep full precision; rounding is for receipts
    /// and report rows only.
    #[inline]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount with two decimal places.
///
/// ## Note
/// Currency symbols are a view concern. The receipt renderer decides
/// whether to print "₹ 10.99" or "10.99 INR".
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a decimal quantity (for subtotal calculations).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, quantity: Decimal) -> Self {
        Money(self.0 * quantity)
    }
}

/// Summing an iterator of Money values (for grand totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
