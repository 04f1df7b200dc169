//! API Key configuration domain
//!
//! This module provides the immutable API key configuration record, the
//! constants table it is built from, and the rules a valid record obeys.

mod constants;
mod entity;
mod validation;

pub use constants::{
    ApiKeyConstants, BuiltinConstants, EXPIRY_DAYS, EXPIRY_DAYS_NAME, PREFIX, PREFIX_NAME,
};
#[cfg(test)]
pub use constants::MockApiKeyConstants;
pub use entity::ApiKeyConfig;
pub use validation::{
    validate_expiry_days, validate_prefix, ApiKeyConfigValidationError, MAX_EXPIRY_DAYS,
    MAX_PREFIX_LENGTH,
};

/// Namespace key under which the API key configuration is registered
pub const API_KEY_NAMESPACE: &str = "apiKey";
