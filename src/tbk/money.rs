use std::fmt;

use thiserror::Error;

/// Number of decimal places carried by `Money`
const SCALE_DIGITS: usize = 4;
const SCALE: i64 = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Overflow error while multiplying {0:?} by {1}")]
    MulOverflow(Money, i64),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Signed fixed-point currency amount, stored as ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds a value from a whole number of currency units, e.g. `Money::whole(150)` is 150.0000.
    /// Saturates at `Money::MAX`/`Money::MIN` outside of roughly +/-922 trillion units.
    pub const fn whole(units: i64) -> Self {
        return Self(units.saturating_mul(SCALE));
    }

    /// Parses `[-]digits[.digits]`. Digits past the fourth decimal place are truncated.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if unsigned.split('.').count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let mut parts = unsigned.split('.');
        let dollars = parts.next().unwrap_or("");
        let cents = parts.next().unwrap_or("");

        if dollars.is_empty() && cents.is_empty() {
            Err(MoneyError::Parse("No digits found", string.to_string()))?
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(dollars) || !all_digits(cents) {
            Err(MoneyError::Parse("Unexpected character", string.to_string()))?
        }

        let too_large = || MoneyError::Parse("Value too large", string.to_string());

        let dollars: i64 = if dollars.is_empty() {
            0
        } else {
            dollars.parse().map_err(|_| too_large())?
        };

        let cents = format!("{:0<width$}", cents, width = SCALE_DIGITS);
        let cents: i64 = cents[..SCALE_DIGITS].parse().map_err(|_| too_large())?;

        let units = dollars
            .checked_mul(SCALE)
            .and_then(|units| units.checked_add(cents))
            .ok_or_else(too_large)?;

        return Ok(Money(if negative { -units } else { units }));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Adds `other` in place. On error `self` is left untouched.
    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        return Ok(());
    }

    /// Subtracts `other` in place. On error `self` is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        let difference = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", *self, *other)
            } else {
                MoneyError::Underflow("sub", *self, *other)
            }
        })?;

        self.0 = difference;

        return Ok(());
    }

    pub fn times(&self, quantity: i64) -> Result<Money, MoneyError> {
        return self
            .0
            .checked_mul(quantity)
            .map(Money)
            .ok_or(MoneyError::MulOverflow(*self, quantity));
    }
}

/// Prints all four decimal places unless a precision is given, in which case the value is
/// rounded half away from zero: `format!("{:.2}", Money(12_355))` is `"1.24"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = f.precision().unwrap_or(SCALE_DIGITS).min(SCALE_DIGITS);
        let divisor = 10i128.pow((SCALE_DIGITS - digits) as u32);

        let value = self.0 as i128;
        let rounded = (value.abs() + divisor / 2) / divisor;
        let sign = if value < 0 && rounded != 0 { "-" } else { "" };

        let unit = 10i128.pow(digits as u32);
        let whole = rounded / unit;

        if digits == 0 {
            return write!(f, "{sign}{whole}");
        }

        let fraction = rounded % unit;

        return write!(f, "{sign}{whole}.{fraction:0width$}", width = digits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("100").unwrap(), Money(1_000_000));
        assert_eq!(Money::parse("100.5").unwrap(), Money(1_005_000));
        assert_eq!(Money::parse(" 0.25 ").unwrap(), Money(2_500));
        assert_eq!(Money::parse(".5").unwrap(), Money(5_000));
        assert_eq!(Money::parse("7.").unwrap(), Money(70_000));
        assert_eq!(Money::parse("-50").unwrap(), Money(-500_000));
        assert_eq!(Money::parse("1.234567").unwrap(), Money(12_345));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(Money::parse(""), Err(MoneyError::Parse(..))));
        assert!(matches!(Money::parse("-"), Err(MoneyError::Parse(..))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyError::Parse(..))));
        assert!(matches!(Money::parse("abc"), Err(MoneyError::Parse(..))));
        assert!(matches!(Money::parse("1e5"), Err(MoneyError::Parse(..))));
        assert!(matches!(Money::parse("+5"), Err(MoneyError::Parse(..))));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyError::Parse(..))
        ));
    }

    #[test]
    fn add() {
        let mut money = Money::whole(10);
        money.add(&Money(2_500)).unwrap();
        assert_eq!(money, Money(102_500));

        let mut money = Money::MAX;
        assert!(matches!(
            money.add(&Money(1)),
            Err(MoneyError::Overflow(..))
        ));
        assert_eq!(money, Money::MAX);

        let mut money = Money::MIN;
        assert!(matches!(
            money.add(&Money(-1)),
            Err(MoneyError::Underflow(..))
        ));
        assert_eq!(money, Money::MIN);
    }

    #[test]
    fn sub() {
        let mut money = Money::whole(10);
        money.sub(&Money::whole(15)).unwrap();
        assert_eq!(money, Money::whole(-5));

        let mut money = Money::MIN;
        assert!(matches!(
            money.sub(&Money(1)),
            Err(MoneyError::Underflow(..))
        ));
        assert_eq!(money, Money::MIN);
    }

    #[test]
    fn times() {
        assert_eq!(Money::whole(10).times(5).unwrap(), Money::whole(50));
        assert_eq!(Money::ZERO.times(i64::MAX).unwrap(), Money::ZERO);
        assert!(matches!(
            Money::whole(10).times(i64::MAX),
            Err(MoneyError::MulOverflow(..))
        ));
    }

    #[test]
    fn whole() {
        assert_eq!(Money::whole(150), Money(1_500_000));
        assert_eq!(Money::whole(-3), Money(-30_000));
        assert_eq!(Money::whole(i64::MAX), Money::MAX);
        assert_eq!(Money::whole(i64::MIN / 1_000), Money::MIN);
    }

    #[test]
    fn abs() {
        assert_eq!(Money::whole(-5).abs(), Money::whole(5));
        assert_eq!(Money::whole(5).abs(), Money::whole(5));
        assert_eq!(Money::MIN.abs(), Money::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Money(12_345).to_string(), "1.2345");
        assert_eq!(format!("{:.2}", Money(12_345)), "1.23");
        assert_eq!(format!("{:.2}", Money(12_355)), "1.24");
        assert_eq!(format!("{:.2}", Money(-12_355)), "-1.24");
        assert_eq!(format!("{:.2}", Money(-40)), "0.00");
        assert_eq!(format!("{:.2}", Money::whole(1075)), "1075.00");
        assert_eq!(format!("{:.0}", Money(15_000)), "2");
    }
}
