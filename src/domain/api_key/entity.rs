//! API key configuration record

use serde::Serialize;

use super::validation::{validate_expiry_days, validate_prefix, ApiKeyConfigValidationError};

/// Immutable API key configuration
///
/// Holds the prefix that namespaces every issued key and the number of days
/// a key stays valid after issuance. Fields are private and there are no
/// setters; a value only exists if it passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyConfig {
    /// Namespacing token for generated keys (e.g. "ak_")
    prefix: String,
    /// Days after issuance that a key is considered expired
    expiry_days: u32,
}

impl ApiKeyConfig {
    /// Create a new configuration after validation
    pub fn new(
        prefix: impl Into<String>,
        expiry_days: i64,
    ) -> Result<Self, ApiKeyConfigValidationError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        let expiry_days = validate_expiry_days(expiry_days)?;

        Ok(Self {
            prefix,
            expiry_days,
        })
    }

    /// Get the key prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the expiry window in days
    pub fn expiry_days(&self) -> u32 {
        self.expiry_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = ApiKeyConfig::new("ak_", 30).unwrap();

        assert_eq!(config.prefix(), "ak_");
        assert_eq!(config.expiry_days(), 30);
    }

    #[test]
    fn test_prefix_is_not_transformed() {
        let config = ApiKeyConfig::new("AK_Live.", 1).unwrap();
        assert_eq!(config.prefix(), "AK_Live.");
    }

    #[test]
    fn test_rejects_zero_expiry() {
        assert_eq!(
            ApiKeyConfig::new("ak_", 0),
            Err(ApiKeyConfigValidationError::ExpiryNotPositive(0))
        );
    }

    #[test]
    fn test_rejects_empty_prefix() {
        assert_eq!(
            ApiKeyConfig::new("", 30),
            Err(ApiKeyConfigValidationError::EmptyPrefix)
        );
    }

    #[test]
    fn test_serialization_shape() {
        let config = ApiKeyConfig::new("ak_", 30).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json, serde_json::json!({ "prefix": "ak_", "expiryDays": 30 }));
    }
}
