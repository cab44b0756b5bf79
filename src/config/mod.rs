#[cfg(feature = "cli")]
pub mod cli;
pub mod rates_file;

use crate::domain::model::RateTable;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use rates_file::RatesFileConfig;
use std::path::Path;

/// Resolves the session's rate table from the configuration: a validated
/// rates file when one is given, the builtin ten-code table otherwise.
pub fn load_table(config: &impl ConfigProvider) -> Result<RateTable> {
    match config.rates_file() {
        Some(path) => RatesFileConfig::from_path(Path::new(path))?.into_table(),
        None => Ok(RateTable::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestConfig {
        rates_file: Option<String>,
    }

    impl ConfigProvider for TestConfig {
        fn rates_file(&self) -> Option<&str> {
            self.rates_file.as_deref()
        }

        fn verbose(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_defaults_to_builtin_table() {
        let config = TestConfig { rates_file: None };
        let table = load_table(&config).unwrap();
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = TestConfig {
            rates_file: Some("/nonexistent/rates.toml".to_string()),
        };
        assert!(load_table(&config).is_err());
    }
}
