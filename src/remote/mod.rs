//! Loading the two record lists from the records API.
//!
//! The loader asks a [`RecordSource`] for both lists at once and waits for
//! both to settle. Failures never propagate: they are logged and turn into
//! empty lists. A transport failure or an unreadable body on either request
//! empties both lists. A non-success status or `success: false` empties only
//! the list it belongs to.

pub mod client;

use std::fmt;
use std::future::Future;

use serde::Deserialize;

use crate::types::{Company, Project, RecordKind};

pub use client::HttpSource;

/// Path segments of each resource below the API base URL
pub fn endpoint_segments(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Company => &["api", "companies"],
        RecordKind::Project => &["api", "projects", "all"],
    }
}

/// Response body shared by both endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Vec<T>>,
}

impl<T> ApiEnvelope<T> {
    /// The records when the API reported success
    pub fn into_records(self) -> FetchOutcome<T> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(FetchFailure::Rejected)
        }
    }
}

/// Why a resource produced no records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The request did not complete
    Transport(String),
    /// The body was not a readable envelope
    Malformed(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The envelope said `success: false`
    Rejected,
}

impl FetchFailure {
    /// Whether this failure discards the other resource's records too
    pub fn empties_both(&self) -> bool {
        matches!(self, FetchFailure::Transport(_) | FetchFailure::Malformed(_))
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Transport(msg) => write!(f, "request failed: {msg}"),
            FetchFailure::Malformed(msg) => write!(f, "malformed response: {msg}"),
            FetchFailure::Status(code) => write!(f, "HTTP status {code}"),
            FetchFailure::Rejected => write!(f, "API reported success: false"),
        }
    }
}

pub type FetchOutcome<T> = std::result::Result<Vec<T>, FetchFailure>;

/// Anything that can produce the two record lists
pub trait RecordSource: Send + Sync {
    fn fetch_companies(&self) -> impl Future<Output = FetchOutcome<Company>> + Send;

    fn fetch_projects(&self) -> impl Future<Output = FetchOutcome<Project>> + Send;
}

/// Both record lists as held by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRecords {
    pub companies: Vec<Company>,
    pub projects: Vec<Project>,
}

/// Fetch both lists concurrently and apply the failure rules
pub async fn load_records<S: RecordSource>(source: &S) -> LoadedRecords {
    let (companies, projects) = futures::join!(source.fetch_companies(), source.fetch_projects());
    combine_outcomes(companies, projects)
}

/// Merge the two outcomes into the lists the dashboard shows
pub fn combine_outcomes(
    companies: FetchOutcome<Company>,
    projects: FetchOutcome<Project>,
) -> LoadedRecords {
    let fatal = [
        (RecordKind::Company, companies.as_ref().err()),
        (RecordKind::Project, projects.as_ref().err()),
    ]
    .into_iter()
    .find_map(|(kind, failure)| failure.filter(|f| f.empties_both()).map(|f| (kind, f.clone())));

    if let Some((kind, failure)) = fatal {
        tracing::error!(
            resource = kind.noun(),
            error = %failure,
            "failed to load records, showing no companies or projects"
        );
        return LoadedRecords::default();
    }

    LoadedRecords {
        companies: settle(RecordKind::Company, companies),
        projects: settle(RecordKind::Project, projects),
    }
}

fn settle<T>(kind: RecordKind, outcome: FetchOutcome<T>) -> Vec<T> {
    match outcome {
        Ok(records) => {
            tracing::info!(resource = kind.noun(), count = records.len(), "records loaded");
            records
        }
        Err(failure) => {
            tracing::warn!(
                resource = kind.noun(),
                error = %failure,
                "failed to load records, showing an empty list"
            );
            Vec::new()
        }
    }
}
