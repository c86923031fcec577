//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    2.675 rounded to 2dp = 2.67      ❌ (2.675 is stored as 2.67499..)   │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    Intermediate sums stay exact, unrounded                              │
//! │    Rounding happens once, explicitly, at each reported figure           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let line = price * 3;                // 32.97
//! assert_eq!(line.to_string(), "32.97");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::TaxRate;

/// Decimal places of every reported monetary figure.
pub const MONETARY_DECIMALS: u32 = 2;

/// Rounding rule applied to every reported figure.
pub const MONETARY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in currency units (not cents).
///
/// The wrapped value is exact and may carry more than two decimals; a raw
/// tax contribution such as `5.00 × 5% = 0.25` or `0.10 × 5% = 0.005` is kept
/// as-is until [`Money::round`] is called.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► LineResult.unit_price ──► LineResult.pre_tax_amount (raw)
///                                                   │
///                         ┌─────────────────────────┼──────────────────┐
///                         ▼                         ▼                  ▼
///          tax_inclusive_amount (rounded)   subtotal (rounded)   category tax (raw)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONETARY_DECIMALS))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the exact, possibly unrounded, amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Monetary rounding: two decimals, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::money::Money;
    ///
    /// let raw = Money::new(Decimal::new(2675, 3)); // 2.675
    /// assert_eq!(raw.round(), Money::from_cents(268));
    ///
    /// let raw = Money::new(Decimal::new(-2675, 3)); // -2.675
    /// assert_eq!(raw.round(), Money::from_cents(-268));
    /// ```
    pub fn round(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(MONETARY_DECIMALS, MONETARY_ROUNDING),
        )
    }

    /// Raw tax on this amount at `rate`: `amount × percentage / 100`.
    ///
    /// The result is NOT rounded. Callers decide where the rounding boundary
    /// is (line total vs. category accumulator).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::TaxRate;
    ///
    /// let base = Money::from_cents(10); // 0.10
    /// let tax = base.calculate_tax(TaxRate::from_percent(5));
    /// assert_eq!(tax.amount().to_string(), "0.005");
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.percentage() / Decimal::ONE_HUNDRED)
    }

    /// Multiplies money by a quantity (unit price × quantity).
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// [`Money::calculate_tax`], returning `None` if the amount is out of
    /// `Decimal` range.
    pub fn checked_calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        self.0
            .checked_mul(rate.percentage())?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(Money)
    }

    /// [`Money::multiply_quantity`], returning `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Addition returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to two decimals, without currency symbol.
///
/// Honors width/alignment flags, so `format!("{:>8}", money)` pads.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.round().0;
        if shown.is_zero() {
            // drop the sign of a rounded-away negative
            shown = Decimal::ZERO;
        }
        shown.rescale(MONETARY_DECIMALS);
        f.pad(&shown.to_string())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Exact sum; nothing is rounded.
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
// Unit Tests
// =============================================================================
