//! Blocking HTTP transport shared by the ranking and metadata requests

use crate::config::schema::HttpConfig;
use crate::error::{PkgSizeError, PkgSizeResult};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use ureq::Agent;

/// Why a JSON GET failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, non-success status or body read failure
    #[error("{0}")]
    Transport(String),
    /// Body was received but did not decode into the expected shape
    #[error("{0}")]
    Decode(String),
}

/// Thin wrapper around a `ureq` agent
#[derive(Clone)]
pub struct HttpClient {
    agent: Agent,
    user_agent: String,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(config.timeout_secs.map(Duration::from_secs))
            .build();

        Self {
            agent: Agent::new_with_config(agent_config),
            user_agent: config.user_agent.clone(),
        }
    }

    /// GET `url` and decode the body as JSON
    ///
    /// Runs the blocking request on tokio's blocking pool.
    pub async fn get_json<T>(&self, url: &str) -> PkgSizeResult<Result<T, FetchError>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || client.get_json_blocking(&url))
            .await
            .map_err(|e| PkgSizeError::Internal(format!("HTTP task failed: {}", e)))
    }

    fn get_json_blocking<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // Metadata for packages with long release histories runs to tens of MB.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
