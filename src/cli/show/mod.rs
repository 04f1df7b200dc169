//! Show command - prints the resolved API key configuration

use anyhow::Context;
use clap::{Args, ValueEnum};
use tracing::info;

use crate::domain::api_key::{ApiKeyConfig, API_KEY_NAMESPACE};

/// Output format for the show command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"apiKey": {...}}` as pretty-printed JSON
    #[default]
    Json,
    /// One `key = value` line per field
    Text,
}

/// Arguments for the show command
#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Run the show command
pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let registry = super::bootstrap()?;
    let api_key = registry
        .api_key_config()
        .with_context(|| format!("namespace {API_KEY_NAMESPACE} is not registered"))?;

    info!(format = ?args.format, "Printing API key configuration");
    println!("{}", render(&api_key, args.format)?);

    Ok(())
}

/// Render the configuration in the requested format
pub fn render(config: &ApiKeyConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let document = serde_json::json!({ API_KEY_NAMESPACE: config });
            Ok(serde_json::to_string_pretty(&document)?)
        }
        OutputFormat::Text => Ok(format!(
            "{API_KEY_NAMESPACE}.prefix = {}\n{API_KEY_NAMESPACE}.expiryDays = {}",
            config.prefix(),
            config.expiry_days()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let config = ApiKeyConfig::new("ak_", 30).unwrap();
        let output = render(&config, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!({ "apiKey": { "prefix": "ak_", "expiryDays": 30 } })
        );
    }

    #[test]
    fn test_render_text() {
        let config = ApiKeyConfig::new("ak_", 30).unwrap();
        let output = render(&config, OutputFormat::Text).unwrap();

        assert_eq!(output, "apiKey.prefix = ak_\napiKey.expiryDays = 30");
    }

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
