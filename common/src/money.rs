//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops, str::FromStr};

#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

/// Amount of money with a fixed precision of 2 decimal digits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Money(Decimal);

impl Money {
    /// [`Money`] amount of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] amount.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `amount` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a new [`Money`] amount if the given `amount` is valid.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        Self::check(amount).then_some(Self(amount))
    }

    /// Returns the [`Decimal`] amount of this [`Money`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Checks whether the given `amount` is a valid [`Money`] amount.
    fn check(amount: Decimal) -> bool {
        !amount.is_sign_negative() && amount.scale() <= 2
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s).map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("invalid `Money` amount")
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("15.50").unwrap(),
            Money::new(decimal("15.50")).unwrap(),
        );
        assert_eq!(
            Money::from_str("100").unwrap(),
            Money::new(decimal("100")).unwrap(),
        );
        assert_eq!(Money::from_str("0").unwrap(), Money::ZERO);

        assert!(Money::from_str("-1").is_err());
        assert!(Money::from_str("1.999").is_err());
        assert!(Money::from_str("ten").is_err());
    }

    #[test]
    fn to_string_pads_to_two_decimal_digits() {
        assert_eq!(Money::from_str("62").unwrap().to_string(), "62.00");
        assert_eq!(Money::from_str("15.5").unwrap().to_string(), "15.50");
        assert_eq!(Money::from_str("15.50").unwrap().to_string(), "15.50");
    }

    #[test]
    fn multiplies_without_drift() {
        assert_eq!(
            Money::from_str("15.50").unwrap() * 4,
            Money::from_str("62.00").unwrap(),
        );
        assert_eq!(
            Money::from_str("33.33").unwrap() * 3,
            Money::from_str("99.99").unwrap(),
        );
        assert_eq!(Money::from_str("15.50").unwrap() * 0, Money::ZERO);
    }

    #[test]
    fn sums_exactly() {
        let total = ["30.00", "40.00", "0.01"]
            .into_iter()
            .map(|s| Money::from_str(s).unwrap())
            .sum::<Money>();
        assert_eq!(total, Money::from_str("70.01").unwrap());

        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::ZERO);
    }
}
