//! Command implementations for the `portal` binary

mod config;
mod dashboard;
mod ls;
mod show;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use ls::cmd_ls;
pub use show::cmd_show;

use serde_json::Value;

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::remote::{FetchFailure, HttpSource};
use crate::types::RecordKind;

/// Output of a one-shot command, printed as JSON or text
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print to stdout; falls back to pretty JSON when there is no text form
    pub fn print(self, as_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !as_json => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

/// Print a value as pretty JSON
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Record source built from the config file
fn configured_source() -> Result<HttpSource> {
    let config = Config::load()?;
    HttpSource::from_config(&config)
}

/// One-shot commands report load failures instead of showing an empty list
fn fetch_error(kind: RecordKind, failure: FetchFailure) -> PortalError {
    tracing::warn!(resource = kind.noun(), error = %failure, "failed to load records");
    PortalError::Api(format!(
        "failed to load {}: {}",
        kind.plural_title().to_lowercase(),
        failure
    ))
}
