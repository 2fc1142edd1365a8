//! HTTP-based `TileServerProbe` using the tile service's health endpoint.
//!
//! The probe treats any 2xx response as healthy. Timeouts, connection
//! failures, and other statuses are reported as [`ProbeError`] values; the
//! probe never retries.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use poimap_core::{ProbeError, TileServerProbe};
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Error type for [`HttpTileServerProbe`] construction failures.
#[derive(Debug, Error)]
pub enum ProbeBuildError {
    /// The base URL could not be parsed.
    #[error("invalid tile service URL {url:?}: {source}")]
    InvalidUrl {
        /// Rejected URL.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Default user agent for health requests.
pub const DEFAULT_USER_AGENT: &str = "poimap-health/0.1";

/// Default bound on a single probe, covering connect and response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`HttpTileServerProbe`].
#[derive(Debug, Clone)]
pub struct HttpTileServerProbeConfig {
    /// Base URL for the tile service (e.g., `"http://localhost:8080"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpTileServerProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpTileServerProbeConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Tile-service probe issuing `GET {base_url}/health`.
#[derive(Debug, Clone)]
pub struct HttpTileServerProbe {
    client: Client,
    health_url: String,
    timeout: Duration,
}

impl HttpTileServerProbe {
    /// Create a probe with the default five second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProbeBuildError> {
        Self::with_config(HttpTileServerProbeConfig::new(base_url))
    }

    /// Create a probe with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn with_config(config: HttpTileServerProbeConfig) -> Result<Self, ProbeBuildError> {
        let health_url = build_health_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProbeBuildError::HttpClient)?;
        Ok(Self {
            client,
            health_url,
            timeout: config.timeout,
        })
    }

    /// URL probed on each call.
    #[must_use]
    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// Convert a reqwest error to a `ProbeError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error) -> ProbeError {
        if error.is_timeout() {
            return ProbeError::Timeout {
                url: self.health_url.clone(),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ProbeError::Status {
                url: self.health_url.clone(),
                status: status.as_u16(),
            };
        }

        ProbeError::Network {
            url: self.health_url.clone(),
            message: error.to_string(),
        }
    }
}

/// Build the health URL: `{base_url}/health` with trailing slashes trimmed.
fn build_health_url(base_url: &str) -> Result<String, ProbeBuildError> {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    Url::parse(&url).map_err(|source| ProbeBuildError::InvalidUrl {
        url: base_url.to_owned(),
        source,
    })?;
    Ok(url)
}

#[async_trait]
impl TileServerProbe for HttpTileServerProbe {
    async fn probe(&self) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;

        let status = response.status();
        debug!("tile service health returned {status}");
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::Status {
                url: self.health_url.clone(),
                status: status.as_u16(),
            })
        }
    }
}
