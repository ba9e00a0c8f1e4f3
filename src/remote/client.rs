//! HTTP implementation of [`RecordSource`] backed by reqwest.

use std::time::Duration;

use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ApiEnvelope, FetchFailure, FetchOutcome, RecordSource, endpoint_segments};
use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::types::{Company, Project, RecordKind};

/// Reads both record lists from the records API
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a source for `base`. Requests never time out unless `timeout`
    /// is set.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("portal/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base()?, config.timeout())
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Full URL of the resource listing `kind`
    pub fn endpoint(&self, kind: RecordKind) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| PortalError::Config(format!("API URL '{}' cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(endpoint_segments(kind));
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: RecordKind) -> FetchOutcome<T> {
        let url = self
            .endpoint(kind)
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        tracing::debug!(resource = kind.noun(), %url, "fetching records");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_slice(&body).map_err(|e| FetchFailure::Malformed(e.to_string()))?;

        envelope.into_records()
    }
}

impl RecordSource for HttpSource {
    async fn fetch_companies(&self) -> FetchOutcome<Company> {
        self.fetch(RecordKind::Company).await
    }

    async fn fetch_projects(&self) -> FetchOutcome<Project> {
        self.fetch(RecordKind::Project).await
    }
}
