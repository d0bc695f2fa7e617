//! Monetary amount with fixed two-digit precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` and only touches `f64` when
//! rendering a JSON number at the edge.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits carried by every amount.
pub const CENTS_SCALE: u32 = 2;

/// A signed monetary amount.
///
/// Statement values are always positive; balances may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")] Decimal,
);

impl Amount {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal as-is.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if no more than two significant fractional digits are present.
    ///
    /// Trailing zeros do not count: `1.500` qualifies, `1.005` does not.
    #[must_use]
    pub fn fits_cents(self) -> bool {
        self.0.normalize().scale() <= CENTS_SCALE
    }

    /// Rounds half away from zero to exactly two fractional digits.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CENTS_SCALE);
        Self(rounded)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(100), true)]
    #[case(dec!(100.5), true)]
    #[case(dec!(100.05), true)]
    #[case(dec!(100.050), true)]
    #[case(dec!(100.005), false)]
    #[case(dec!(0.001), false)]
    fn test_fits_cents(#[case] value: Decimal, #[case] expected: bool) {
        assert_eq!(Amount::new(value).fits_cents(), expected);
    }

    #[rstest]
    #[case(dec!(1.005), dec!(1.01))]
    #[case(dec!(1.004), dec!(1.00))]
    #[case(dec!(-1.005), dec!(-1.01))]
    #[case(dec!(1000), dec!(1000.00))]
    fn test_round_to_cents(#[case] value: Decimal, #[case] expected: Decimal) {
        let rounded = Amount::new(value).round_to_cents();
        assert_eq!(rounded.value(), expected);
        assert_eq!(rounded.value().scale(), 2);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Amount::new(dec!(0.01)).is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(Amount::ZERO.is_zero());
        assert!(Amount::new(dec!(-3)).is_negative());
        assert!(!Amount::new(dec!(-0)).is_negative());
    }

    #[test]
    fn test_sum_and_arithmetic() {
        let total: Amount = [dec!(10.10), dec!(20.20), dec!(0.70)]
            .into_iter()
            .map(Amount::new)
            .sum();
        assert_eq!(total.value(), dec!(31.00));
        assert_eq!((Amount::new(dec!(5)) - Amount::new(dec!(7.5))).value(), dec!(-2.5));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_string(&Amount::new(dec!(1000.00))).unwrap();
        assert_eq!(json, "1000.0");
        let json = serde_json::to_string(&Amount::new(dec!(12.34))).unwrap();
        assert_eq!(json, "12.34");
    }
}
