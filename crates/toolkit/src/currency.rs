//! Currency converter
//!
//! Rates are units of a currency per US dollar and come from a
//! [`RateSource`]. [`StaticRates`] is a fixed demonstration snapshot, not live
//! market data.

use crate::error::ToolError;

/// Units of each currency per 1 USD
pub trait RateSource {
    fn rate(&self, code: &str) -> Option<f64>;

    /// Supported currency codes
    fn currencies(&self) -> Vec<&str>;
}

const SNAPSHOT: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.91),
    ("GBP", 0.78),
    ("JPY", 149.5),
    ("CAD", 1.35),
    ("AUD", 1.51),
    ("CHF", 0.87),
    ("CNY", 7.23),
    ("INR", 83.12),
    ("BRL", 5.04),
];

/// Built-in sample rates
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRates;

impl RateSource for StaticRates {
    fn rate(&self, code: &str) -> Option<f64> {
        SNAPSHOT
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|&(_, rate)| rate)
    }

    fn currencies(&self) -> Vec<&str> {
        SNAPSHOT.iter().map(|&(code, _)| code).collect()
    }
}

/// Convert `amount` between two currencies via USD
pub fn convert(source: &dyn RateSource, amount: f64, from: &str, to: &str) -> Result<f64, ToolError> {
    let from_rate = source
        .rate(from)
        .ok_or_else(|| ToolError::UnknownCurrency(from.to_uppercase()))?;
    let to_rate = source
        .rate(to)
        .ok_or_else(|| ToolError::UnknownCurrency(to.to_uppercase()))?;

    Ok(amount / from_rate * to_rate)
}

/// Rate for 1 unit of `from` in `to`
pub fn exchange_rate(source: &dyn RateSource, from: &str, to: &str) -> Result<f64, ToolError> {
    convert(source, 1.0, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRates;

    impl RateSource for FixedRates {
        fn rate(&self, code: &str) -> Option<f64> {
            match code {
                "USD" => Some(1.0),
                "XTS" => Some(2.0),
                _ => None,
            }
        }

        fn currencies(&self) -> Vec<&str> {
            vec!["USD", "XTS"]
        }
    }

    #[test]
    fn test_static_rates() {
        let eur = convert(&StaticRates, 100.0, "USD", "EUR").unwrap();
        assert!((eur - 91.0).abs() < 1e-9);

        let usd = convert(&StaticRates, 149.5, "jpy", "usd").unwrap();
        assert!((usd - 1.0).abs() < 1e-9);

        assert_eq!(StaticRates.currencies().len(), 10);
    }

    #[test]
    fn test_cross_rate() {
        let rate = exchange_rate(&StaticRates, "GBP", "EUR").unwrap();
        assert!((rate - 0.91 / 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_currency() {
        let err = convert(&StaticRates, 1.0, "USD", "xyz").unwrap_err();
        assert_eq!(err, ToolError::UnknownCurrency("XYZ".to_string()));
    }

    #[test]
    fn test_injected_source() {
        assert_eq!(convert(&FixedRates, 3.0, "USD", "XTS").unwrap(), 6.0);
        assert!(convert(&FixedRates, 3.0, "USD", "EUR").is_err());
    }
}
