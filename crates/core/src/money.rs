//! Money value object: non-negative amounts in the smallest currency unit.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::value_object::ValueObject;

/// A non-negative currency amount, stored in cents.
///
/// Arithmetic is explicit and checked; there is no `Add`/`Sub` operator
/// overloading because silent wrap-around has no place in a ledger.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    /// Parse a decimal dollar amount (e.g. `"1.50"`, `"$2"`, `".80"`).
    ///
    /// At most two fraction digits are accepted; negative values are rejected
    /// because `Money` cannot represent them.
    pub fn parse(input: &str) -> LedgerResult<Money> {
        let s = input.trim().trim_start_matches('$');
        if s.is_empty() {
            return Err(LedgerError::invalid_amount("empty amount"));
        }
        if s.starts_with('-') {
            return Err(LedgerError::invalid_amount(format!(
                "negative amount: {input}"
            )));
        }

        let (dollars_str, frac_str) = match s.split_once('.') {
            Some((d, f)) => (d, f),
            None => (s, ""),
        };

        let dollars: u64 = if dollars_str.is_empty() {
            0
        } else {
            dollars_str
                .parse()
                .map_err(|_| LedgerError::invalid_amount(format!("not a number: {input}")))?
        };

        if frac_str.len() > 2 {
            return Err(LedgerError::invalid_amount(format!(
                "more than two fraction digits: {input}"
            )));
        }
        let cents_part: u64 = if frac_str.is_empty() {
            0
        } else {
            let padded = format!("{frac_str:0<2}");
            padded
                .parse()
                .map_err(|_| LedgerError::invalid_amount(format!("not a number: {input}")))?
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .map(Money)
            .ok_or_else(|| LedgerError::invalid_amount(format!("amount too large: {input}")))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_decimals() {
        assert_eq!(Money::parse("1.50").unwrap(), Money::from_cents(150));
        assert_eq!(Money::parse("5").unwrap(), Money::from_cents(500));
        assert_eq!(Money::parse(".80").unwrap(), Money::from_cents(80));
        assert_eq!(Money::parse("1.2").unwrap(), Money::from_cents(120));
        assert_eq!(Money::parse(" $2.00 ").unwrap(), Money::from_cents(200));
        assert_eq!(Money::parse("0").unwrap(), Money::ZERO);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "  ", "-1.50", "abc", "1.505", "1.5x", "1,50"] {
            let err = Money::parse(bad).unwrap_err();
            assert!(
                matches!(err, LedgerError::InvalidAmount(_)),
                "expected InvalidAmount for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn display_formats_cents_with_two_digits() {
        assert_eq!(Money::from_cents(150).to_string(), "$1.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn checked_arithmetic_detects_overflow() {
        let max = Money::from_cents(u64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(
            Money::from_cents(100).checked_mul(3),
            Some(Money::from_cents(300))
        );
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = Money::from_cents(100);
        let b = Money::from_cents(150);
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(b.saturating_sub(a), Money::from_cents(50));
    }
}
