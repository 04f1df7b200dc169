//! Application configuration loading

mod app_config;

pub use app_config::{ApiKeySection, AppConfig, LogFormat, LoggingConfig};
