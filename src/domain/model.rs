use crate::utils::error::{FxError, Result};
use crate::utils::validation::{validate_currency_code, validate_positive_rate};
use std::collections::BTreeMap;

/// Immutable table of exchange rates against a single base currency.
///
/// Every rate means "1 unit of the base equals `rate` units of this
/// currency". Invariants (base present with rate 1.0, all rates finite and
/// strictly positive, codes 3 uppercase ASCII letters) are checked once at
/// construction; nothing mutates the table afterwards.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: String,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// The static ten-code table used when no rates file is given.
    pub fn builtin() -> Self {
        let rates = [
            ("USD", 1.0),
            ("EUR", 0.92),
            ("GBP", 0.79),
            ("JPY", 156.91),
            ("CAD", 1.37),
            ("AUD", 1.50),
            ("CHF", 0.89),
            ("CNY", 7.26),
            ("INR", 83.47),
            ("BRL", 5.43),
        ];
        Self {
            base: "USD".to_string(),
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }

    /// Validated construction from an arbitrary mapping, e.g. a rates file or
    /// a future live-rate provider. Codes are uppercased on entry.
    pub fn from_rates(base: &str, rates: impl IntoIterator<Item = (String, f64)>) -> Result<Self> {
        let base = base.trim().to_uppercase();
        validate_currency_code("base", &base)?;

        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = code.trim().to_uppercase();
            validate_currency_code("rates", &code)?;
            validate_positive_rate("rates", &code, rate)?;
            if table.insert(code.clone(), rate).is_some() {
                return Err(FxError::InvalidConfigValue {
                    field: "rates".to_string(),
                    value: code,
                    reason: "Duplicate currency code".to_string(),
                });
            }
        }

        if table.is_empty() {
            return Err(FxError::MissingConfig {
                field: "rates".to_string(),
            });
        }
        match table.get(&base) {
            None => {
                return Err(FxError::MissingConfig {
                    field: format!("rates.{}", base),
                })
            }
            Some(&rate) if rate != 1.0 => {
                return Err(FxError::InvalidConfigValue {
                    field: "rates".to_string(),
                    value: format!("{} = {}", base, rate),
                    reason: "Base currency rate must be exactly 1.0".to_string(),
                })
            }
            Some(_) => {}
        }

        Ok(Self { base, rates: table })
    }

    /// Bypasses invariant validation so tests can build tables that a
    /// misbehaving external provider could produce.
    #[cfg(test)]
    pub(crate) fn unchecked(base: &str, rates: Vec<(&str, f64)>) -> Self {
        Self {
            base: base.to_string(),
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }

    pub fn rate(&self, code: &str) -> Result<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| FxError::UnknownCurrency {
                code: code.to_string(),
            })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Supported codes in lexicographic order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// One conversion as collected from the user. Built fresh every loop
/// iteration and discarded after presenting the result.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let table = RateTable::builtin();
        assert_eq!(table.len(), 10);
        assert_eq!(table.base(), "USD");
        assert_eq!(table.rate("USD").unwrap(), 1.0);
        assert_eq!(table.rate("EUR").unwrap(), 0.92);
    }

    #[test]
    fn test_codes_sorted() {
        let table = RateTable::builtin();
        let codes: Vec<&str> = table.codes().collect();
        assert_eq!(
            codes,
            vec!["AUD", "BRL", "CAD", "CHF", "CNY", "EUR", "GBP", "INR", "JPY", "USD"]
        );
    }

    #[test]
    fn test_from_rates_normalizes_case() {
        let table = RateTable::from_rates(
            "usd",
            vec![("usd".to_string(), 1.0), ("eur".to_string(), 0.92)],
        )
        .unwrap();
        assert!(table.contains("EUR"));
        assert_eq!(table.base(), "USD");
    }

    #[test]
    fn test_from_rates_rejects_zero_rate() {
        let result = RateTable::from_rates(
            "USD",
            vec![("USD".to_string(), 1.0), ("EUR".to_string(), 0.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rates_rejects_missing_base() {
        let result = RateTable::from_rates("USD", vec![("EUR".to_string(), 0.92)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rates_rejects_base_rate_not_one() {
        let result = RateTable::from_rates(
            "USD",
            vec![("USD".to_string(), 2.0), ("EUR".to_string(), 0.92)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rates_rejects_empty() {
        assert!(RateTable::from_rates("USD", vec![]).is_err());
    }

    #[test]
    fn test_unknown_currency_lookup() {
        let table = RateTable::builtin();
        assert!(matches!(
            table.rate("ZZZ"),
            Err(crate::utils::error::FxError::UnknownCurrency { .. })
        ));
    }
}
