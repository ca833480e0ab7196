//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every fee, threshold, and surcharge is an integer number of cents.   │
//! │    The only fractional step (the rush multiplier) resolves to a whole   │
//! │    number of cents with an explicit rounding rule.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use courier_core::money::Money;
//!
//! // Create from cents (preferred)
//! let fee = Money::from_cents(200); // 2.00€
//!
//! // Arithmetic operations
//! let doubled = fee * 2;                      // 4.00€
//! let total = fee + Money::from_cents(100);   // 3.00€
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::FeeMultiplier;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Headroom for intermediate arithmetic; fees themselves
///   never go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use courier_core::money::Money;
    ///
    /// let fee = Money::from_cents(1099); // Represents 10.99€
    /// assert_eq!(fee.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use courier_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the smaller of two Money values.
    ///
    /// Used by the fee pipeline to cap the total at the configured maximum.
    ///
    /// ## Example
    /// ```rust
    /// use courier_core::money::Money;
    ///
    /// let fee = Money::from_cents(1710);
    /// let cap = Money::from_cents(1500);
    /// assert_eq!(fee.min(cap).cents(), 1500);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Applies a multiplier using round-half-up to the nearest cent.
    ///
    /// ## Rounding Rule
    /// A multiplier applied to an integer amount can produce fractional
    /// cents (e.g. 205 cents × 1.25 = 256.25 cents). The result is always
    /// rounded half up to a whole number of cents, before any cap applies.
    ///
    /// ## Implementation
    /// Integer math over i128: `(cents * bps + 5000) / 10000`
    /// The +5000 provides the half-up rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use courier_core::money::Money;
    /// use courier_core::types::FeeMultiplier;
    ///
    /// let fee = Money::from_cents(200);
    /// let rush = FeeMultiplier::from_bps(12_000); // ×1.2
    ///
    /// assert_eq!(fee.apply_multiplier(rush).cents(), 240);
    /// ```
    pub fn apply_multiplier(&self, multiplier: FeeMultiplier) -> Money {
        // Use i128 to prevent overflow on large amounts
        // multiplier.bps() is basis points of the factor: 12000 = ×1.2
        let scaled = (self.0 as i128 * multiplier.bps() as i128 + 5000) / 10000;
        Money::from_cents(scaled as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The API responds in raw cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}€", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Multiplication by i64 (for per-unit fee calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, units: i64) -> Self {
        Money(self.0 * units)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99€");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00€");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00€");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = b * 3;
        assert_eq!(result.cents(), 1500);
    }

    #[test]
    fn test_min_caps_larger_value() {
        let fee = Money::from_cents(1710);
        let cap = Money::from_cents(1500);
        assert_eq!(fee.min(cap).cents(), 1500);
        assert_eq!(cap.min(fee).cents(), 1500);

        let small = Money::from_cents(240);
        assert_eq!(small.min(cap).cents(), 240);
    }

    #[test]
    fn test_apply_multiplier_exact() {
        // 200 cents × 1.2 = 240 cents, no fraction
        let fee = Money::from_cents(200);
        let rush = FeeMultiplier::from_bps(12_000);
        assert_eq!(fee.apply_multiplier(rush).cents(), 240);
    }

    #[test]
    fn test_apply_multiplier_rounds_half_up() {
        // 202 cents × 1.25 = 252.5 cents → 253 (half rounds up)
        let fee = Money::from_cents(202);
        let multiplier = FeeMultiplier::from_bps(12_500);
        assert_eq!(fee.apply_multiplier(multiplier).cents(), 253);

        // 201 cents × 1.25 = 251.25 cents → 251 (below half rounds down)
        let fee = Money::from_cents(201);
        assert_eq!(fee.apply_multiplier(multiplier).cents(), 251);
    }

    #[test]
    fn test_apply_multiplier_identity() {
        let fee = Money::from_cents(710);
        let identity = FeeMultiplier::from_bps(10_000);
        assert_eq!(fee.apply_multiplier(identity).cents(), 710);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }
}
