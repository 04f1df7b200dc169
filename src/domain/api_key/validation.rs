//! API key configuration validation utilities

use thiserror::Error;

/// Errors that can occur while validating API key configuration values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiKeyConfigValidationError {
    #[error("API key prefix cannot be empty")]
    EmptyPrefix,

    #[error("API key prefix exceeds maximum length of {0} characters")]
    PrefixTooLong(usize),

    #[error("API key prefix contains invalid character: {0:?}. Whitespace and control characters are not allowed")]
    InvalidPrefixCharacter(char),

    #[error("API key expiry must be at least one day, got {0}")]
    ExpiryNotPositive(i64),

    #[error("API key expiry cannot exceed {max} days, got {value}")]
    ExpiryTooLong { value: i64, max: u32 },
}

pub const MAX_PREFIX_LENGTH: usize = 32;

/// Upper bound on the expiry window (100 years)
pub const MAX_EXPIRY_DAYS: u32 = 36_500;

/// Validate an API key prefix
///
/// Rules:
/// - Cannot be empty
/// - Maximum 32 characters
/// - No whitespace or control characters
///
/// The prefix is checked as-is; it is never trimmed or re-cased.
pub fn validate_prefix(prefix: &str) -> Result<(), ApiKeyConfigValidationError> {
    if prefix.is_empty() {
        return Err(ApiKeyConfigValidationError::EmptyPrefix);
    }

    if prefix.chars().count() > MAX_PREFIX_LENGTH {
        return Err(ApiKeyConfigValidationError::PrefixTooLong(MAX_PREFIX_LENGTH));
    }

    if let Some(c) = prefix
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return Err(ApiKeyConfigValidationError::InvalidPrefixCharacter(c));
    }

    Ok(())
}

/// Validate an expiry window, returning it narrowed to `u32`
pub fn validate_expiry_days(days: i64) -> Result<u32, ApiKeyConfigValidationError> {
    if days <= 0 {
        return Err(ApiKeyConfigValidationError::ExpiryNotPositive(days));
    }

    if days > i64::from(MAX_EXPIRY_DAYS) {
        return Err(ApiKeyConfigValidationError::ExpiryTooLong {
            value: days,
            max: MAX_EXPIRY_DAYS,
        });
    }

    Ok(days as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefixes() {
        assert!(validate_prefix("ak_").is_ok());
        assert!(validate_prefix("pk_live_").is_ok());
        assert!(validate_prefix("K").is_ok());
        assert!(validate_prefix("v2-key.").is_ok());
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(
            validate_prefix(""),
            Err(ApiKeyConfigValidationError::EmptyPrefix)
        );
    }

    #[test]
    fn test_prefix_too_long() {
        let long = "a".repeat(33);
        assert_eq!(
            validate_prefix(&long),
            Err(ApiKeyConfigValidationError::PrefixTooLong(32))
        );
        assert!(validate_prefix(&"a".repeat(32)).is_ok());
    }

    #[test]
    fn test_prefix_with_whitespace() {
        assert_eq!(
            validate_prefix("ak "),
            Err(ApiKeyConfigValidationError::InvalidPrefixCharacter(' '))
        );
        assert_eq!(
            validate_prefix("   "),
            Err(ApiKeyConfigValidationError::InvalidPrefixCharacter(' '))
        );
        assert_eq!(
            validate_prefix("ak\n"),
            Err(ApiKeyConfigValidationError::InvalidPrefixCharacter('\n'))
        );
    }

    #[test]
    fn test_zero_and_negative_expiry() {
        assert_eq!(
            validate_expiry_days(0),
            Err(ApiKeyConfigValidationError::ExpiryNotPositive(0))
        );
        assert_eq!(
            validate_expiry_days(-7),
            Err(ApiKeyConfigValidationError::ExpiryNotPositive(-7))
        );
    }

    #[test]
    fn test_expiry_bounds() {
        assert_eq!(validate_expiry_days(1), Ok(1));
        assert_eq!(validate_expiry_days(30), Ok(30));
        assert_eq!(validate_expiry_days(36_500), Ok(36_500));
        assert_eq!(
            validate_expiry_days(36_501),
            Err(ApiKeyConfigValidationError::ExpiryTooLong {
                value: 36_501,
                max: MAX_EXPIRY_DAYS
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiKeyConfigValidationError::ExpiryNotPositive(0).to_string(),
            "API key expiry must be at least one day, got 0"
        );
        assert_eq!(
            ApiKeyConfigValidationError::EmptyPrefix.to_string(),
            "API key prefix cannot be empty"
        );
    }
}
