//! CLI module for API Key Config
//!
//! Provides subcommands for inspecting the resolved configuration:
//! - `show`: print the `apiKey` entry
//! - `check`: validate the configuration and report the result

pub mod check;
pub mod show;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::ConfigurationInitializationError;
use crate::infrastructure::config::ConfigRegistry;
use crate::infrastructure::logging;

/// API Key Config - typed configuration for the API key subsystem
#[derive(Parser)]
#[command(name = "apikey-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved API key configuration
    Show(show::ShowArgs),

    /// Validate the configuration without printing it
    Check,
}

/// Load `.env` and the layered configuration, install logging, and build
/// the configuration registry
pub fn bootstrap() -> anyhow::Result<ConfigRegistry> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(ConfigurationInitializationError::from)?;
    logging::init_logging(&config.logging)?;

    let registry = crate::create_config_registry(&config)?;

    Ok(registry)
}
