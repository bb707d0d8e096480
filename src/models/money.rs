//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The `Display` form is the plain decimal used in the ledger file
//! (`1200.00`); UI code attaches the currency symbol separately.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use saldo_cli::models::Money;
    /// let rent = Money::from_units(1200, 0);
    /// assert_eq!(rent.cents(), 120_000);
    /// ```
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts `1200`, `1200.5`, `1200.50` and a leading minus sign.
    /// More than two fraction digits is an error, not a truncation: the
    /// ledger file must round-trip cent-exact.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (units_str, frac_str) = match digits.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (digits, ""),
        };

        if units_str.is_empty() && frac_str.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if !units_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if frac_str.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };
        let cents: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().unwrap_or(0) * 10,
            _ => frac_str.parse::<i64>().unwrap_or(0),
        };

        let total = units * 100 + cents;
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. `R$ 1200.00` / `-R$ 10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{} {}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{} {}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "invalid amount format: '{}'", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "amount '{}' has more than two decimal places", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
    }

    #[test]
    fn test_display_plain_decimal() {
        assert_eq!(format!("{}", Money::from_cents(120_000)), "1200.00");
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1200.00").unwrap().cents(), 120_000);
        assert_eq!(Money::parse("1200.5").unwrap().cents(), 120_050);
        assert_eq!(Money::parse("1200").unwrap().cents(), 120_000);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".50").unwrap().cents(), 50);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse(" 10.50 ").unwrap().cents(), 1050);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("10.5.0").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("1 200").is_err());
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert!(matches!(
            Money::parse("10.505"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        for cents in [0, 1, 99, 100, 1050, 120_000] {
            let m = Money::from_cents(cents);
            assert_eq!(Money::parse(&m.to_string()).unwrap(), m);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(
            Money::from_cents(120_000).format_with_symbol("R$"),
            "R$ 1200.00"
        );
        assert_eq!(
            Money::from_cents(-1050).format_with_symbol("R$"),
            "-R$ 10.50"
        );
    }
}
