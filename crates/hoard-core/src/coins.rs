//! # Coins Module
//!
//! Provides the `Coins` type for container values and the `ConversionRate`
//! used to derive alchemy prices from store prices.
//!
//! ## Why Integer Coins?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE OVERFLOW PROBLEM                                                   │
//! │                                                                         │
//! │  Quantities reach ~2^31, prices reach ~2^31:                            │
//! │    2_147_483_647 × 2_147_483_647 does not fit in i32  ❌                │
//! │                                                                         │
//! │  OUR SOLUTION: i64 coins with saturating arithmetic                     │
//! │    A single stack always fits, a full container sum cannot wrap        │
//! │    around to a negative total                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hoard_core::coins::{Coins, ALCHEMY_RATE};
//!
//! let store_price = Coins::new(7);
//! let alch = ALCHEMY_RATE.apply(store_price); // round(7 × 0.6) = 4
//! assert_eq!(alch.amount(), 4);
//!
//! let stack = alch.multiply_quantity(5);
//! assert_eq!(stack.amount(), 20);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Coins Type
// =============================================================================

/// An amount of coins, the smallest currency unit of the container.
///
/// ## Design Decisions
/// - **i64 (signed)**: market prices can legitimately be negative in broken
///   price feeds; the type never panics on them
/// - **Saturating ops**: every `+` and `×` clamps at `i64::MAX`/`i64::MIN`
///   instead of wrapping
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Coins(i64);

impl Coins {
    /// Zero coins.
    pub const ZERO: Coins = Coins(0);

    /// Creates a coin amount.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Coins(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
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

    /// Multiplies a unit price by a stack quantity, saturating on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use hoard_core::coins::Coins;
    ///
    /// let unit = Coins::new(1_500);
    /// assert_eq!(unit.multiply_quantity(3).amount(), 4_500);
    /// assert_eq!(Coins::new(i64::MAX).multiply_quantity(2).amount(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Coins(self.0.saturating_mul(qty))
    }

    /// Adds two amounts, saturating on overflow.
    #[inline]
    pub const fn saturating_add(self, other: Coins) -> Self {
        Coins(self.0.saturating_add(other.0))
    }
}

/// Display groups thousands: `1234567` → `1,234,567 gp`.
impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{} gp", sign, grouped)
    }
}

impl Add for Coins {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Coins {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sum for Coins {
    fn sum<I: Iterator<Item = Coins>>(iter: I) -> Self {
        iter.fold(Coins::ZERO, |total, c| total + c)
    }
}

impl From<i64> for Coins {
    fn from(amount: i64) -> Self {
        Coins(amount)
    }
}

impl From<i32> for Coins {
    fn from(amount: i32) -> Self {
        Coins(amount as i64)
    }
}

// =============================================================================
// Conversion Rate
// =============================================================================

/// A price multiplier in basis points (1 bps = 0.01%).
///
/// ## Why Basis Points?
/// 6000 bps = 0.6, the alchemy multiplier. Integer math keeps the rounding
/// exact for every store price instead of depending on float precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRate(u32);

/// Alchemy value is 60% of the store price, rounded to the nearest coin.
pub const ALCHEMY_RATE: ConversionRate = ConversionRate::from_bps(6_000);

impl ConversionRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        ConversionRate(bps)
    }

    /// Applies the rate to a unit price, rounding half away from zero.
    ///
    /// ## Implementation
    /// `(amount × bps ± 5000) / 10000` in i128, so no intermediate overflow.
    ///
    /// ## Example
    /// ```rust
    /// use hoard_core::coins::{Coins, ConversionRate};
    ///
    /// let rate = ConversionRate::from_bps(6_000);
    /// assert_eq!(rate.apply(Coins::new(7)).amount(), 4);   // 4.2 → 4
    /// assert_eq!(rate.apply(Coins::new(5)).amount(), 3);   // 3.0 → 3
    /// assert_eq!(rate.apply(Coins::new(4)).amount(), 2);   // 2.4 → 2
    /// assert_eq!(rate.apply(Coins::new(10)).amount(), 6);
    /// ```
    pub fn apply(&self, price: Coins) -> Coins {
        let scaled = price.0 as i128 * self.0 as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        Coins(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
