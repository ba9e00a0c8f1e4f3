//! Application configuration.
//!
//! Configuration is stored in `<config dir>/portal/config.yaml` and includes:
//! - The base URL of the records API
//! - An optional request timeout
//! - An optional log file location
//!
//! `PORTAL_CONFIG` points at an alternative file and `PORTAL_API_URL`
//! overrides the configured API URL for a single run.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PortalError, Result};

/// API used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://voice-unitech.onrender.com";

/// Keys accepted by `portal config get/set`
pub const VALID_KEYS: &[&str] = &["api_url", "request_timeout", "log_file"];

const CONFIG_ENV: &str = "PORTAL_CONFIG";
const API_URL_ENV: &str = "PORTAL_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the records API (without the `/api/...` suffix)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// Where the dashboard writes its log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout: None,
            log_file: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "portal")
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        match project_dirs() {
            Some(dirs) => dirs.config_dir().join("config.yaml"),
            None => PathBuf::from(".portal").join("config.yaml"),
        }
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// The API base URL, honoring `PORTAL_API_URL`
    pub fn api_base(&self) -> Result<Url> {
        let raw = match env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => url,
            _ => self.api_url.clone(),
        };
        parse_api_url(&raw)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }

    /// Log file used by the dashboard
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        match project_dirs() {
            Some(dirs) => dirs.data_local_dir().join("portal.log"),
            None => PathBuf::from(".portal").join("portal.log"),
        }
    }

    /// Read a single key as a display string
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api_url" => Ok(Some(self.api_url.clone())),
            "request_timeout" => Ok(self.request_timeout.map(|t| t.to_string())),
            "log_file" => Ok(self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from its string form. `none` clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let clear = value.is_empty() || value.eq_ignore_ascii_case("none");

        match key {
            "api_url" => {
                let url = parse_api_url(value)?;
                self.api_url = url.as_str().trim_end_matches('/').to_string();
            }
            "request_timeout" => {
                self.request_timeout = if clear {
                    None
                } else {
                    let secs: u64 = value.parse().map_err(|_| {
                        PortalError::Config(format!(
                            "request_timeout must be a whole number of seconds, got '{value}'"
                        ))
                    })?;
                    if secs == 0 { None } else { Some(secs) }
                };
            }
            "log_file" => {
                self.log_file = if clear {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "api_url: {}", self.api_url)?;
        match self.request_timeout {
            Some(t) => writeln!(f, "request_timeout: {t}s")?,
            None => writeln!(f, "request_timeout: none")?,
        }
        write!(f, "log_file: {}", self.log_path().display())
    }
}

fn unknown_key(key: &str) -> PortalError {
    PortalError::Config(format!(
        "unknown config key '{}', expected one of: {}",
        key,
        VALID_KEYS.join(", ")
    ))
}

/// Parse and validate an API base URL
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| PortalError::InvalidUrl(raw.to_string(), e))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(PortalError::Config(format!(
            "API URL must be an http(s) URL, got '{raw}'"
        )));
    }

    Ok(url)
}
