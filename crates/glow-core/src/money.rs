//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A serum at 12.50, added three times as a float:                        │
//! │    12.5 + 12.5 + 12.5 is fine, but 0.1 + 0.2 = 0.30000000000000004      │
//! │    Sub-totals drift as the cart is edited back and forth.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1250 cents × 3 = 3750 cents, every time                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use glow_core::money::Money;
//!
//! let price = Money::from_cents(1250); // $12.50
//! let line_total = price * 3;
//! assert_eq!(line_total, Money::from_major_minor(37, 50));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit (cents).
///
/// The storefront is single-currency; the symbol used for display lives in
/// the application config, not here.
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► CartLine::line_total() ──► CartState::subtotal()
///                                                      │
///                                                      ▼
///                                           Cart panel "Subtotal $37.50"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use glow_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2800).cents(), 2800);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use glow_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(12, 50).cents(), 1250);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// Saturates at `i64::MIN`/`i64::MAX` instead of overflowing; the store
    /// puts no ceiling on quantities.
    ///
    /// ```rust
    /// use glow_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1250);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 3750);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount with a currency symbol, e.g. `format_with("₩")`.
    ///
    /// Two decimal places are always shown.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display in dollars. UI code formats through the config's
/// currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Lets cart totals be written as `lines.iter().map(CartLine::line_total).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(3750).format_with("€"), "€37.50");
        assert_eq!(Money::from_cents(7).format_with(""), "0.07");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((b * 3).cents(), 750);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 10);

        assert_eq!((big + Money::from_cents(100)).cents(), i64::MAX);
        assert_eq!(Money::from_cents(1250).multiply_quantity(i64::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_cents(-1250).multiply_quantity(i64::MAX).cents(), i64::MIN);

        let total: Money = [big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum_of_lines() {
        let total: Money = [1250, 2800, 45]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 4095);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    /// Repeated additions of 12.50 never drift.
    #[test]
    fn test_repeated_addition_is_exact() {
        let mut total = Money::zero();
        for _ in 0..1000 {
            total += Money::from_cents(1250);
        }
        assert_eq!(total, Money::from_major_minor(12_500, 0));
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "1250");

        let back: Money = serde_json::from_str("2800").unwrap();
        assert_eq!(back, Money::from_cents(2800));
    }
}
