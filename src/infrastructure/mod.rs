//! Infrastructure layer - Configuration sources, registry and logging

pub mod api_key;
pub mod config;
pub mod logging;
