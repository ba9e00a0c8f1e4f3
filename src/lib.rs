pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod query;
pub mod remote;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{PortalError, Result};
pub use query::{SearchQuery, Searchable, filter_records};
pub use remote::{FetchFailure, HttpSource, LoadedRecords, RecordSource, load_records};
pub use types::{Company, Project, Record, RecordKind};
