//! Records dashboard command (`portal dashboard`)

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::logging::{LogTarget, init_logging};
use crate::remote::HttpSource;
use crate::tui::{Dashboard, RevealObserver};

/// Launch the dashboard TUI
pub async fn cmd_dashboard() -> Result<()> {
    let config = Config::load()?;
    init_logging(LogTarget::File(config.log_path()))?;

    let source = HttpSource::from_config(&config)?;
    tracing::info!(api = %source.base(), "starting dashboard");

    // Released when the dashboard exits, even on error
    let observer = RevealObserver::acquire();
    let reveal = observer.handle();

    let result = element!(Dashboard(source: Some(source), reveal: Some(reveal)))
        .fullscreen()
        .await
        .map_err(|e| PortalError::Tui(e.to_string()));

    drop(observer);
    tracing::info!("dashboard closed");
    result
}
