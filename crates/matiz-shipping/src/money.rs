//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! sells in Mexican pesos; USD is kept for the handful of cross-border
//! wholesale accounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    MXN,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "MXN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MXN => "MXN",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "MX$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::MXN => "MX$",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "MXN" => Some(Currency::MXN),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (centavos for
/// MXN, cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use matiz_shipping::money::{Currency, Money};
    /// let cost = Money::from_decimal(150.0, Currency::MXN);
    /// assert_eq!(cost.amount_cents, 15000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Check whether this amount meets (is at least) another amount.
    ///
    /// Returns `false` when the currencies differ: a subtotal in one
    /// currency can never satisfy a threshold declared in another.
    pub fn meets(&self, other: &Money) -> bool {
        self.currency == other.currency && self.amount_cents >= other.amount_cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "MX$150.00").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .expect("Currency mismatch in addition")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(15000, Currency::MXN);
        assert_eq!(m.amount_cents, 15000);
        assert_eq!(m.currency, Currency::MXN);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(1499.99, Currency::MXN);
        assert_eq!(m.amount_cents, 149999);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(15000, Currency::MXN);
        assert_eq!(m.display(), "MX$150.00");

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_meets() {
        let threshold = Money::from_decimal(1500.0, Currency::MXN);

        assert!(Money::from_decimal(1500.0, Currency::MXN).meets(&threshold));
        assert!(Money::from_decimal(1600.0, Currency::MXN).meets(&threshold));
        assert!(!Money::from_decimal(1499.99, Currency::MXN).meets(&threshold));
        // Cross-currency comparison never qualifies.
        assert!(!Money::from_decimal(1500.0, Currency::USD).meets(&threshold));
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::MXN);
        let b = Money::new(500, Currency::MXN);
        assert_eq!((a + b).amount_cents, 1500);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let mxn = Money::new(1000, Currency::MXN);
        let usd = Money::new(1000, Currency::USD);
        let _ = mxn + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("MXN"), Some(Currency::MXN));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
