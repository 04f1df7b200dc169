//! API key configuration provider
//!
//! Reads the constants table once, validates it, and hands out the resulting
//! record to anything that depends on the `apiKey` namespace.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::api_key::{
    ApiKeyConfig, ApiKeyConfigValidationError, ApiKeyConstants, BuiltinConstants,
    API_KEY_NAMESPACE, EXPIRY_DAYS_NAME, PREFIX_NAME,
};
use crate::domain::ConfigurationInitializationError;
use crate::infrastructure::config::ConfigRegistry;

/// Provider for the API key configuration record
#[derive(Debug, Clone)]
pub struct ApiKeyConfigProvider {
    config: Arc<ApiKeyConfig>,
}

impl ApiKeyConfigProvider {
    /// Build the record from a constants table
    ///
    /// Fails if either constant is missing or violates the record's
    /// invariants; no partial record is ever produced.
    pub fn new(
        constants: &dyn ApiKeyConstants,
    ) -> Result<Self, ConfigurationInitializationError> {
        let prefix = constants
            .prefix()
            .ok_or_else(|| ConfigurationInitializationError::missing_constant(PREFIX_NAME))?;
        let expiry_days = constants
            .expiry_days()
            .ok_or_else(|| ConfigurationInitializationError::missing_constant(EXPIRY_DAYS_NAME))?;

        let config = ApiKeyConfig::new(prefix, expiry_days).map_err(|e| {
            ConfigurationInitializationError::invalid_constant(constant_name(&e), e)
        })?;

        debug!(
            prefix = %config.prefix(),
            expiry_days = config.expiry_days(),
            "Resolved API key configuration"
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Build the record from the compile-time constants
    pub fn builtin() -> Result<Self, ConfigurationInitializationError> {
        Self::new(&BuiltinConstants)
    }

    /// Namespace the record is registered under
    pub fn namespace(&self) -> &'static str {
        API_KEY_NAMESPACE
    }

    /// Get the API key configuration
    ///
    /// Every call returns the same allocation.
    pub fn get_api_key_config(&self) -> Arc<ApiKeyConfig> {
        Arc::clone(&self.config)
    }

    /// Bind the record into the registry under the `apiKey` namespace
    pub fn register(
        self,
        registry: &mut ConfigRegistry,
    ) -> Result<(), ConfigurationInitializationError> {
        registry.register_shared(API_KEY_NAMESPACE, self.config)?;

        info!(namespace = API_KEY_NAMESPACE, "Registered API key configuration");

        Ok(())
    }
}

fn constant_name(error: &ApiKeyConfigValidationError) -> &'static str {
    match error {
        ApiKeyConfigValidationError::EmptyPrefix
        | ApiKeyConfigValidationError::PrefixTooLong(_)
        | ApiKeyConfigValidationError::InvalidPrefixCharacter(_) => PREFIX_NAME,
        ApiKeyConfigValidationError::ExpiryNotPositive(_)
        | ApiKeyConfigValidationError::ExpiryTooLong { .. } => EXPIRY_DAYS_NAME,
    }
}
