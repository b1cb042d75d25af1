//! Currency display for user-facing amounts
//!
//! Three hardcoded currencies, whole units only:
//! - DKK: `1,235 kr`
//! - USD: `$1,235`
//! - EUR: `€1,235`

use crate::error::BudgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    DKK,
    USD,
    EUR,
}

impl Currency {
    /// ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::DKK => "DKK",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Format an amount in this currency
    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, *self)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DKK" => Ok(Currency::DKK),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(BudgetError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Format `amount` rounded to whole units with the currency's symbol placement
pub fn format_currency(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    // f64::round rounds half away from zero: 1234.5 -> 1235
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(rounded.abs() as u64);

    match currency {
        Currency::DKK => format!("{}{} kr", sign, digits),
        Currency::USD => format!("{}${}", sign, digits),
        Currency::EUR => format!("{}€{}", sign, digits),
    }
}

/// Insert "," between every group of three digits
fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);

    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(format_currency(1234.5, Currency::USD), "$1,235");
        assert_eq!(format_currency(1234.5, Currency::DKK), "1,235 kr");
        assert_eq!(format_currency(1234.5, Currency::EUR), "€1,235");
        assert_eq!(format_currency(1234.49, Currency::USD), "$1,234");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(0.0, Currency::USD), "$0");
        assert_eq!(format_currency(999.0, Currency::USD), "$999");
        assert_eq!(format_currency(1000.0, Currency::USD), "$1,000");
        assert_eq!(format_currency(300_000.0, Currency::DKK), "300,000 kr");
        assert_eq!(format_currency(1_234_567.0, Currency::EUR), "€1,234,567");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1432.25, Currency::USD), "-$1,432");
        assert_eq!(format_currency(-1432.25, Currency::DKK), "-1,432 kr");
        // Rounds to zero, no sign
        assert_eq!(format_currency(-0.4, Currency::EUR), "€0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN, Currency::USD), "n/a");
        assert_eq!(format_currency(f64::INFINITY, Currency::DKK), "n/a");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("dkk".parse::<Currency>().unwrap(), Currency::DKK);
        assert_eq!(" Usd ".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::EUR);
        assert!(matches!(
            "GBP".parse::<Currency>(),
            Err(BudgetError::UnknownCurrency(_))
        ));
    }
}
