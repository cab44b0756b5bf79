use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Invalid amount '{input}': not a number")]
    ParseAmount { input: String },

    #[error("Amount must be positive, got {value}")]
    NonPositiveAmount { value: f64 },

    #[error("Currency '{code}' not supported")]
    UnknownCurrency { code: String },

    #[error("Source and target currencies are both '{code}'")]
    SameCurrency { code: String },

    #[error("Exchange rate for '{code}' is zero")]
    ZeroRate { code: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Rates file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, FxError>;
