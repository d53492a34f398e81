//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog wire format carries amounts as JSON floats together with a
//! display currency (`{"currency": {"label": "USD", "symbol": "$"}, "amount":
//! 144.69}`). Amounts are decoded into [`rust_decimal::Decimal`] so cart
//! totals stay exact; the float representation is confined to the serde
//! boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display currency attached to a price.
///
/// The catalog assumes a single currency across the whole product list, so
/// this is presentation data, not an arithmetic dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217-style label (e.g. "USD").
    pub label: String,
    /// Display symbol (e.g. "$").
    pub symbol: String,
}

impl Currency {
    /// Create a new currency.
    #[must_use]
    pub fn new(label: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
        }
    }
}

/// A price with currency information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Currency this amount is denominated in.
    pub currency: Currency,
    /// Amount in the currency's standard unit (e.g. dollars, not cents).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(currency: Currency, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    /// Total for `quantity` units of this price.
    #[must_use]
    pub fn line_total(&self, quantity: i64) -> Decimal {
        self.amount * Decimal::from(quantity)
    }

    /// Format for display (e.g. "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: Decimal) -> Price {
        Price::new(Currency::new("USD", "$"), amount)
    }

    #[test]
    fn test_line_total_exact() {
        let price = usd(Decimal::new(14469, 2)); // 144.69
        assert_eq!(price.line_total(3), Decimal::new(43407, 2)); // 434.07
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(Decimal::new(5050, 2)).display(), "$50.50");
        assert_eq!(usd(Decimal::from(1000)).display(), "$1000.00");
    }

    #[test]
    fn test_deserialize_wire_float() {
        let json = r#"{"currency":{"label":"USD","symbol":"$"},"amount":689.49}"#;
        let price: Price = serde_json::from_str(json).expect("deserialize");
        assert_eq!(price.amount, Decimal::new(68949, 2));
        assert_eq!(price.currency.symbol, "$");
    }
}
