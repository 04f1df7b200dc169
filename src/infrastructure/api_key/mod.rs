//! API Key configuration infrastructure
//!
//! This module provides the configuration provider and the constants table
//! that layers application configuration over the built-in constants.

mod constants;
mod provider;

pub use constants::LayeredConstants;
pub use provider::ApiKeyConfigProvider;
