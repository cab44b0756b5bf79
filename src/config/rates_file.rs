use crate::domain::model::RateTable;
use crate::utils::error::{FxError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// TOML rates file, the stand-in for a live-rate provider:
///
/// ```toml
/// base = "USD"
///
/// [rates]
/// USD = 1.0
/// EUR = 0.92
/// ```
///
/// Shape is checked here; the per-entry invariants (code format, positive
/// finite rates, base at 1.0) are enforced by [`RateTable::from_rates`] when
/// the config becomes a table.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFileConfig {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl RatesFileConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn into_table(self) -> Result<RateTable> {
        RateTable::from_rates(&self.base, self.rates)
    }
}

impl Validate for RatesFileConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("base", &self.base)?;
        if self.rates.is_empty() {
            return Err(FxError::MissingConfig {
                field: "rates".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_convert_to_table() {
        let content = r#"
base = "USD"

[rates]
USD = 1.0
EUR = 0.92
GBP = 0.79
"#;
        let config = RatesFileConfig::from_str(content).unwrap();
        let table = config.into_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rate("GBP").unwrap(), 0.79);
    }

    #[test]
    fn test_missing_rates_section_is_parse_error() {
        assert!(RatesFileConfig::from_str("base = \"USD\"\n").is_err());
    }

    #[test]
    fn test_empty_rates_table_rejected() {
        let content = "base = \"USD\"\n\n[rates]\n";
        assert!(RatesFileConfig::from_str(content).is_err());
    }

    #[test]
    fn test_invalid_rate_rejected_at_table_construction() {
        let content = r#"
base = "USD"

[rates]
USD = 1.0
EUR = -0.5
"#;
        let config = RatesFileConfig::from_str(content).unwrap();
        assert!(config.into_table().is_err());
    }
}
