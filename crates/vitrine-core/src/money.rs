//! # Money Module
//!
//! Provides the `Money` type for catalog prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price filter with bounds [0, 2999.99] compared in floating point     │
//! │  can drop a product priced 2999.99 when the value was produced by       │
//! │  arithmetic (2999.99 != 2999.9900000000002).                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    299_999 <= 299_999  always holds, inclusive bounds stay exact        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::money::Money;
//!
//! let price = Money::from_cents(299_999); // R$ 2999.99
//! let list = Money::from_reais(3_499);    // R$ 3499.00
//!
//! assert!(price < list);
//! assert_eq!((list - price).cents(), 49_901);
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest BRL unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as savings can go negative before clamping
/// - **Ord**: price sorting and range checks compare the raw integer
/// - **Serde**: the wire form is a decimal amount in reais (`2999.99`), see
///   the impls at the bottom of this file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole reais.
    ///
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais(50).cents(), 5_000);
    /// ```
    #[inline]
    pub const fn from_reais(reais: i64) -> Self {
        Money(reais * 100)
    }

    /// Parses a decimal amount such as `"2999.99"` or `"50"`.
    ///
    /// At most two fractional digits are accepted. Returns `None` for
    /// anything else, including negative amounts.
    ///
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("2999.99"), Some(Money::from_cents(299_999)));
    /// assert_eq!(Money::parse_decimal("12.5"), Some(Money::from_cents(1_250)));
    /// assert_eq!(Money::parse_decimal("-1"), None);
    /// assert_eq!(Money::parse_decimal("1.999"), None);
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let input = input.trim();
        let (whole, frac) = match input.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (input, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let reais: i64 = whole.parse().ok()?;
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };

        reais
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Money)
    }

    /// Like [`Money::parse_decimal`], but also accepts a leading minus sign.
    ///
    /// Used when decoding host data, so that a negative price reaches
    /// validation instead of failing as a syntax error.
    fn parse_signed_decimal(input: &str) -> Option<Money> {
        match input.trim().strip_prefix('-') {
            Some(rest) => Money::parse_decimal(rest).map(|m| Money(-m.0)),
            None => Money::parse_decimal(input),
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtracts `other`, clamping the result at zero.
    ///
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let a = Money::from_cents(100);
    /// let b = Money::from_cents(250);
    /// assert_eq!(a.saturating_sub(b), Money::zero());
    /// assert_eq!(b.saturating_sub(a).cents(), 150);
    /// ```
    #[inline]
    pub const fn saturating_sub(&self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }

    /// Whole-percent share of `self` relative to `whole`, rounded down.
    ///
    /// Returns 0 when `whole` is not positive.
    pub fn percent_of(&self, whole: Money) -> u32 {
        if whole.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        ((self.0 as i128 * 100) / whole.0 as i128) as u32
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a dot separator and no currency symbol.
///
/// The session layer prefixes the configured symbol when formatting for the
/// host.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.reais().abs(), self.cents_part())
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde: decimal reais on the wire
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an amount in reais with at most two decimal places")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        // `Display` for f64 prints the shortest form that round-trips, so
        // `2999.99` comes back as "2999.99" and parses exactly.
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        Money::parse_signed_decimal(&v.to_string())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse_signed_decimal(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
