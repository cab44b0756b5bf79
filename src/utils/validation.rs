use crate::utils::error::{FxError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Currency codes are exactly three ASCII uppercase letters (ISO 4217 shape).
pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Currency code must be 3 uppercase ASCII letters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_rate(field_name: &str, code: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: format!("{} = {}", code, rate),
            reason: "Exchange rate must be a finite positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
