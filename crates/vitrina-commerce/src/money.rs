//! Money type for representing prices.
//!
//! Amounts are stored as integer minor units (centavos) so that offer and
//! promotion arithmetic never accumulates floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Argentine peso.
    #[default]
    ARS,
    /// US dollar.
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "ARS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol shown next to prices.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ARS => "$",
            Currency::USD => "US$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a peso amount from whole pesos.
    pub fn pesos(amount: i64) -> Self {
        Self::new(amount * 100, Currency::ARS)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrina_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(1499.99, Currency::ARS);
    /// assert_eq!(price.amount_cents, 149999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Multiply by a decimal factor, rounding to the nearest minor unit.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// The amount left after taking `percent` off.
    pub fn discounted(&self, percent: f64) -> Money {
        self.multiply_decimal(1.0 - percent / 100.0)
    }

    /// Format as a display string (e.g., "$1.234.567").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount())
    }

    /// Format the absolute amount in the storefront's locale.
    ///
    /// Thousands are separated with `.`, decimals with `,`, and the decimal
    /// part is only shown when it is not zero.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_cents.unsigned_abs();
        let whole = abs / divisor;
        let fraction = abs % divisor;

        let mut out = group_thousands(whole);
        if fraction != 0 {
            out.push(',');
            out.push_str(&format!("{:0width$}", fraction, width = places as usize));
        }
        out
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
