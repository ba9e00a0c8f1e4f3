use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_dashboard, cmd_ls, cmd_show,
};
use crate::config::VALID_KEYS;
use crate::error::Result;
use crate::logging::{LogTarget, init_logging};
use crate::types::RecordKind;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Terminal management portal for companies and project inquiries")]
#[command(version)]
pub struct Cli {
    /// Defaults to the dashboard
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive records dashboard
    #[command(visible_alias = "d")]
    Dashboard,

    /// List companies or projects
    Ls {
        /// Which list: companies or projects
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,

        /// Case-insensitive substring filter
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one company or project
    #[command(visible_alias = "s")]
    Show {
        /// Record type: company or project
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,

        /// Record id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api_url, request_timeout, log_file)
        #[arg(value_parser = parse_config_key)]
        key: String,
        /// Value to set, `none` clears optional keys
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_url, request_timeout, log_file)
        #[arg(value_parser = parse_config_key)]
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Run the selected command, the dashboard when none was given
    pub async fn run(self) -> Result<()> {
        self.command.unwrap_or(Commands::Dashboard).run().await
    }
}

impl Commands {
    pub async fn run(self) -> Result<()> {
        // The dashboard logs to a file once it owns the terminal
        if !matches!(self, Commands::Dashboard) {
            init_logging(LogTarget::Stderr)?;
        }

        match self {
            Commands::Dashboard => cmd_dashboard().await,
            Commands::Ls { kind, search, json } => cmd_ls(kind, search.as_deref(), json).await,
            Commands::Show { kind, id, json } => cmd_show(kind, &id, json).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_kind(s: &str) -> std::result::Result<RecordKind, String> {
    s.parse::<RecordKind>().map_err(|e| e.to_string())
}

fn parse_config_key(s: &str) -> std::result::Result<String, String> {
    if VALID_KEYS.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unknown config key '{s}', expected one of: {}",
            VALID_KEYS.join(", ")
        ))
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "portal", &mut io::stdout());
}
