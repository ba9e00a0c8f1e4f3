//! Tracing subscriber setup.
//!
//! The dashboard owns the terminal while it runs, so its log goes to a file.
//! One-shot commands log warnings and errors to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

const LOG_ENV: &str = "PORTAL_LOG";

/// Where log records are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "portal=warn",
            LogTarget::File(_) => "portal=info",
        }
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logging(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(target.default_directive()));

    let installed = match target {
        LogTarget::Stderr => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogTarget::File(ref path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    if installed.is_ok() {
        tracing::debug!(?target, "logging initialized");
    }

    Ok(())
}
