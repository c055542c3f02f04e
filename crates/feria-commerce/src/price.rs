//! Price type for catalog and cart amounts.
//!
//! The catalog sheet publishes prices as plain decimal numbers, and order
//! messages must render them back in the same notation. Amounts are kept
//! as published rather than converted to a smallest-unit integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A non-negative monetary amount.
///
/// Negative or non-finite inputs collapse to zero at every entry point,
/// including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a price, clamping negative or non-finite values to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Parse a sheet field as a price; anything unparseable is zero.
    pub fn parse_or_zero(field: &str) -> Self {
        field
            .trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or_default()
    }

    /// The raw numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Format with a currency symbol (e.g., "$3.5").
    pub fn display(&self) -> String {
        format!("${}", self.0)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price::new(self.0 + other.0)
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, quantity: i64) -> Price {
        Price::new(self.0 * quantity as f64)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_zero_numeric() {
        assert_eq!(Price::parse_or_zero("3.50"), Price::new(3.5));
        assert_eq!(Price::parse_or_zero(" 12000 "), Price::new(12000.0));
        assert_eq!(Price::parse_or_zero("0"), Price::zero());
    }

    #[test]
    fn test_parse_or_zero_invalid() {
        assert_eq!(Price::parse_or_zero(""), Price::zero());
        assert_eq!(Price::parse_or_zero("abc"), Price::zero());
        assert_eq!(Price::parse_or_zero("$10"), Price::zero());
        assert_eq!(Price::parse_or_zero("1,000"), Price::zero());
    }

    #[test]
    fn test_parse_or_zero_clamps_negative_and_non_finite() {
        assert_eq!(Price::parse_or_zero("-3"), Price::zero());
        assert_eq!(Price::parse_or_zero("NaN"), Price::zero());
        assert_eq!(Price::parse_or_zero("inf"), Price::zero());
    }

    #[test]
    fn test_display_matches_sheet_notation() {
        assert_eq!(Price::new(10000.0).to_string(), "10000");
        assert_eq!(Price::new(3.5).to_string(), "3.5");
        assert_eq!(Price::zero().to_string(), "0");
    }

    #[test]
    fn test_display_with_symbol() {
        assert_eq!(Price::new(2000.0).display(), "$2000");
        assert_eq!(Price::new(3.5).display(), "$3.5");
    }

    #[test]
    fn test_multiply_by_quantity() {
        assert_eq!(Price::new(5000.0) * 2, Price::new(10000.0));
        assert_eq!(Price::new(3.5) * 3, Price::new(10.5));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(10000.0), Price::new(2000.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(12000.0));
    }

    #[test]
    fn test_serde_round_trip_as_plain_number() {
        let json = serde_json::to_string(&Price::new(3.5)).unwrap();
        assert_eq!(json, "3.5");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::new(3.5));
    }

    #[test]
    fn test_deserialize_clamps_negative() {
        let price: Price = serde_json::from_str("-5.0").unwrap();
        assert_eq!(price, Price::zero());
    }
}
