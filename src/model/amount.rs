//! Amount type for handling monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal` and keeps the scale that the value
//! was written with, so that `500.00` is written back as `500.00`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents a transaction amount. The sign is not constrained.
///
/// # Examples
///
/// ```
/// # use cardspend::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-50.00").unwrap();
/// assert_eq!(amount.to_string(), "-50.00");
/// ```
///
/// Scientific notation is accepted:
/// ```
/// # use cardspend::model::Amount;
/// # use rust_decimal::Decimal;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1.5e3").unwrap();
/// assert_eq!(amount.value(), Decimal::new(1500, 0));
/// ```
///
/// Values must fit in a `Decimal`: magnitudes up to `Decimal::MAX` (about 7.9e28) with at most 28
/// decimal places. Numbers outside that range, such as `1e29` or `1e-30`, are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Decimal::from_str(trimmed) {
            Ok(value) => Ok(Amount(value)),
            Err(plain) => {
                if trimmed.contains(&['e', 'E'][..]) {
                    Decimal::from_scientific(trimmed)
                        .map(Amount)
                        .map_err(AmountError)
                } else {
                    Err(AmountError(plain))
                }
            }
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let amount = Amount::from_str("500.00").unwrap();
        assert_eq!(amount.value(), Decimal::new(500, 0));
        assert_eq!(amount.to_string(), "500.00");
    }

    #[test]
    fn test_parse_negative() {
        let amount = Amount::from_str("-12.5").unwrap();
        assert_eq!(amount.value(), Decimal::new(-125, 1));
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::from_str("  42.10 ").unwrap();
        assert_eq!(amount.to_string(), "42.10");
    }

    #[test]
    fn test_parse_scientific() {
        let amount = Amount::from_str("2E2").unwrap();
        assert_eq!(amount.value(), Decimal::new(200, 0));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(Amount::from_str("").is_err());
        assert!(Amount::from_str("   ").is_err());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("12.5.1").is_err());
        assert!(Amount::from_str("$50.00").is_err());
    }

    #[test]
    fn test_non_finite_is_error() {
        assert!(Amount::from_str("inf").is_err());
        assert!(Amount::from_str("NaN").is_err());
    }

    #[test]
    fn test_equality_is_numeric() {
        let a = Amount::from_str("5").unwrap();
        let b = Amount::from_str("5.00").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_serialize() {
        let amount = Amount::from_str("50.00").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"50.00\"");
    }

    #[test]
    fn test_deserialize() {
        let amount: Amount = serde_json::from_str("\"-3.25\"").unwrap();
        assert_eq!(amount.value(), Decimal::new(-325, 2));
    }

    #[test]
    fn test_parse_out_of_range() {
        for s in ["1e29", "1e-30", "100000000000000000000000000000"] {
            assert!(Amount::from_str(s).is_err(), "expected '{s}' to be rejected");
        }
        let max = Amount::from_str("79228162514264337593543950335").unwrap();
        assert_eq!(max.value(), Decimal::MAX);
    }
}
