//! API Key Config
//!
//! Typed configuration provider for an API key subsystem:
//! - Immutable `{prefix, expiry_days}` record with validated invariants
//! - Constants table with built-in values and file/environment overrides
//! - Namespace-keyed registry the record is bound into (`"apiKey"`)

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{ApiKeyConfig, ConfigurationInitializationError, API_KEY_NAMESPACE};
pub use infrastructure::api_key::{ApiKeyConfigProvider, LayeredConstants};
pub use infrastructure::config::ConfigRegistry;

use tracing::info;

/// Build the configuration registry from the loaded application configuration
///
/// Every configuration namespace is registered exactly once. Any missing or
/// malformed constant aborts the whole build.
pub fn create_config_registry(
    config: &AppConfig,
) -> Result<ConfigRegistry, ConfigurationInitializationError> {
    let mut registry = ConfigRegistry::new();

    let constants = LayeredConstants::new(config.api_key.clone());
    ApiKeyConfigProvider::new(&constants)?.register(&mut registry)?;

    info!(namespaces = registry.len(), "Configuration registry initialized");

    Ok(registry)
}
