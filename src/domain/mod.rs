//! Domain layer - Core configuration types and rules

pub mod api_key;
pub mod error;

pub use api_key::{
    ApiKeyConfig, ApiKeyConfigValidationError, ApiKeyConstants, BuiltinConstants,
    API_KEY_NAMESPACE,
};
pub use error::ConfigurationInitializationError;
