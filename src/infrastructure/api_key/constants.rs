//! Constants table layered over the application configuration

use crate::config::ApiKeySection;
use crate::domain::api_key::{ApiKeyConstants, BuiltinConstants};

/// Constants table that prefers values from the `api_key` configuration
/// section and falls back to the built-in table for anything not set
#[derive(Debug, Clone)]
pub struct LayeredConstants<F = BuiltinConstants> {
    section: ApiKeySection,
    fallback: F,
}

impl LayeredConstants<BuiltinConstants> {
    /// Layer the section over the built-in constants
    pub fn new(section: ApiKeySection) -> Self {
        Self::with_fallback(section, BuiltinConstants)
    }
}

impl<F: ApiKeyConstants> LayeredConstants<F> {
    /// Layer the section over an arbitrary constants table
    pub fn with_fallback(section: ApiKeySection, fallback: F) -> Self {
        Self { section, fallback }
    }
}

impl<F: ApiKeyConstants> ApiKeyConstants for LayeredConstants<F> {
    fn prefix(&self) -> Option<String> {
        self.section
            .prefix
            .clone()
            .or_else(|| self.fallback.prefix())
    }

    fn expiry_days(&self) -> Option<i64> {
        self.section.expiry_days.or_else(|| self.fallback.expiry_days())
    }
}
