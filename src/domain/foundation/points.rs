//! Points value object - a score rounded to two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Number of decimal places every score is rounded to.
pub const SCORE_DECIMAL_PLACES: u32 = 2;

/// A score amount, always held at two decimal places (half-up).
///
/// Sums and differences of `Points` stay exact because both operands
/// are already rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(Decimal);

impl Points {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Rounds a raw decimal half-up to two places.
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(
            SCORE_DECIMAL_PLACES,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Saturating subtraction at zero, used for "remaining to target".
    pub fn saturating_sub(self, other: Points) -> Self {
        let diff = self.0 - other.0;
        if diff.is_sign_negative() {
            Self::ZERO
        } else {
            Self(diff)
        }
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.0;
        shown.rescale(SCORE_DECIMAL_PLACES);
        write!(f, "{}", shown)
    }
}

impl From<Decimal> for Points {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl Sub for Points {
    type Output = Points;

    fn sub(self, rhs: Points) -> Points {
        Points(self.0 - rhs.0)
    }
}

impl Neg for Points {
    type Output = Points;

    fn neg(self) -> Points {
        Points(-self.0)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_up_to_two_places() {
        assert_eq!(Points::from_decimal(dec!(1.005)).value(), dec!(1.01));
        assert_eq!(Points::from_decimal(dec!(1.004)).value(), dec!(1.00));
        assert_eq!(Points::from_decimal(dec!(2.675)).value(), dec!(2.68));
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Points::from_decimal(dec!(4.5)).to_string(), "4.50");
        assert_eq!(Points::ZERO.to_string(), "0.00");
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = Points::from_decimal(dec!(0.1));
        let b = Points::from_decimal(dec!(0.2));
        assert_eq!((a + b).value(), dec!(0.3));
        assert_eq!((b - a).value(), dec!(0.1));
        assert_eq!((-a).value(), dec!(-0.1));
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let small = Points::from_decimal(dec!(3));
        let big = Points::from_decimal(dec!(10));
        assert_eq!(big.saturating_sub(small).value(), dec!(7));
        assert_eq!(small.saturating_sub(big), Points::ZERO);
    }

    #[test]
    fn sums_an_iterator() {
        let total: Points = [dec!(1.25), dec!(2.25), dec!(0.5)]
            .into_iter()
            .map(Points::from_decimal)
            .sum();
        assert_eq!(total.value(), dec!(4.00));
    }

    #[test]
    fn negative_detection_ignores_zero() {
        assert!(!Points::ZERO.is_negative());
        assert!(Points::from_decimal(dec!(-0.01)).is_negative());
    }
}
