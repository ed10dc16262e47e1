//! Blocking HTTP client for the tracker's player endpoints

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{encode_url_path_segment, GainsSource, DEFAULT_API_BASE_URL};
use crate::domain::Period;

/// Connection settings for the tracker API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Root URL for player endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Errors from one player's API calls. Failures stay scoped to that
/// player and never abort the batch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("username is empty")]
    EmptyUsername,

    #[error("api returned status {status} for '{username}'")]
    Status { username: String, status: u16 },

    #[error("request for '{username}' failed: {source}")]
    Request {
        username: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("invalid response body for '{username}': {source}")]
    Body {
        username: String,
        #[source]
        source: std::io::Error,
    },
}

fn call_error(username: &str, err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Status(status, _) => FetchError::Status {
            username: username.to_string(),
            status,
        },
        other => FetchError::Request {
            username: username.to_string(),
            source: Box::new(other),
        },
    }
}

/// Client for the tracker's player endpoints.
pub struct WomClient {
    agent: ureq::Agent,
    base_url: String,
}

impl WomClient {
    /// Builds a client from the configured base URL and timeout.
    pub fn new(settings: &ApiSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn player_url(&self, username: &str) -> String {
        format!("{}/{}", self.base_url, encode_url_path_segment(username))
    }
}

impl GainsSource for WomClient {
    fn fetch_gained(&self, username: &str, period: Period) -> Result<Value, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::EmptyUsername);
        }

        let url = format!(
            "{}/gained?period={}",
            self.player_url(username),
            period.as_str()
        );
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|err| call_error(username, err))?;

        response.into_json().map_err(|source| FetchError::Body {
            username: username.to_string(),
            source,
        })
    }

    fn request_update(&self, username: &str) -> Result<(), FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::EmptyUsername);
        }

        self.agent
            .post(&self.player_url(username))
            .call()
            .map_err(|err| call_error(username, err))?;
        Ok(())
    }
}
