use thiserror::Error;

use super::api_key::ApiKeyConfigValidationError;

/// Startup-time configuration errors
///
/// Raised while the configuration registry is being built. None of these are
/// retried; the process is expected to stop.
#[derive(Debug, Error)]
pub enum ConfigurationInitializationError {
    #[error("Missing constant: {name}")]
    MissingConstant { name: String },

    #[error("Invalid constant {name}: {source}")]
    InvalidConstant {
        name: String,
        #[source]
        source: ApiKeyConfigValidationError,
    },

    #[error("Configuration namespace already registered: {namespace}")]
    AlreadyRegistered { namespace: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigurationInitializationError {
    pub fn missing_constant(name: impl Into<String>) -> Self {
        Self::MissingConstant { name: name.into() }
    }

    pub fn invalid_constant(name: impl Into<String>, source: ApiKeyConfigValidationError) -> Self {
        Self::InvalidConstant {
            name: name.into(),
            source,
        }
    }

    pub fn already_registered(namespace: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            namespace: namespace.into(),
        }
    }
}
