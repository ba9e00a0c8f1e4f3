//! Configuration commands
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path();

    let json_output = json!({
        "api_url": config.api_url,
        "effective_api_url": config.api_base()?.as_str(),
        "request_timeout": config.request_timeout,
        "log_file": config.log_path().to_string_lossy(),
        "config_file": path.to_string_lossy(),
    });

    let text_output = format!(
        "{}\n\n{}\n\n{} {}",
        "Configuration:".cyan().bold(),
        config,
        "config file:".dimmed(),
        path.display()
    );

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let text = value.clone().unwrap_or_else(|| "not set".to_string());
    CommandOutput::new(json!({ "key": key, "value": value }))
        .with_text(text)
        .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?;
    tracing::debug!(key, ?stored, "config updated");

    let text = match &stored {
        Some(v) => format!("Set {} to {}", key.cyan(), v),
        None => format!("Cleared {}", key.cyan()),
    };
    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(text)
    .print(output_json)
}
