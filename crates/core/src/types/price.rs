//! Type-safe price representation using decimal arithmetic.
//!
//! The demo store sells in a single currency (USD), so a price is just an
//! exact decimal amount in dollars. Arithmetic never goes through floats;
//! rounding to cents happens only where a displayed total is produced.
//! Sums and products saturate at `Decimal::MAX` instead of panicking, since
//! prices can come back from stored state.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
    /// Prices cannot be negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount of money in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents (e.g. `8999` -> `$89.99`).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Parse a price such as `"89.99"` or `"$89.99"`.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Invalid` if the input is not a decimal number and
    /// `PriceError::Negative` if it is below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let amount =
            Decimal::from_str(digits).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Round to whole cents, midpoints away from zero.
    #[must_use]
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// A fraction of this price (e.g. `rate = 0.10` for 10% tax), rounded to cents.
    #[must_use]
    pub fn percent(self, rate: Decimal) -> Self {
        Self(self.0.saturating_mul(rate)).round_cents()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.round_cents().0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_display() {
        assert_eq!(Price::from_cents(8999).to_string(), "$89.99");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Price::parse("89.99").unwrap(), Price::from_cents(8999));
        assert_eq!(Price::parse("$24.99").unwrap(), Price::from_cents(2499));
        assert_eq!(Price::parse(" 10 ").unwrap(), Price::from_cents(1000));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(Price::parse("abc"), Err(PriceError::Invalid(_))));
        assert_eq!(Price::parse("-1.00"), Err(PriceError::Negative));
    }

    #[test]
    fn test_line_totals_are_exact() {
        // 0.1 + 0.2 style float drift must not appear.
        let total: Price = [Price::from_cents(10) * 1, Price::from_cents(20) * 1]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(30));

        let total: Price = [Price::from_cents(8999) * 2, Price::from_cents(2499) * 1]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "$204.97");
    }

    #[test]
    fn test_percent_rounds_to_cents() {
        let subtotal = Price::from_cents(20497);
        let tax = subtotal.percent(Decimal::new(10, 2));
        assert_eq!(tax, Price::from_cents(2050));
    }

    #[test]
    fn test_arithmetic_saturates_at_max() {
        let max = Price::new(Decimal::MAX);
        assert_eq!(max * 2, max);
        assert_eq!(max + Price::from_cents(1), max);

        let total: Price = [max * 3, Price::from_cents(2499)].into_iter().sum();
        assert_eq!(total, max);
        assert_eq!(max.percent(Decimal::ONE), max);
    }

    #[test]
    fn test_round_cents_midpoint() {
        let price = Price::new(Decimal::new(1005, 3)); // 1.005
        assert_eq!(price.round_cents(), Price::from_cents(101));
    }
}
