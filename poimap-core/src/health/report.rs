//! Health report returned by the API.

use log::warn;

use super::{ProbeError, TileServerProbe};

/// Overall service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HealthStatus {
    /// The tile service answered its health check.
    Ok,
    /// The tile service was slow, unreachable, or unhealthy.
    Degraded,
}

/// Internal and browser-facing base URLs of the tile service.
///
/// The two may differ, e.g. a container-internal DNS name and an externally
/// routable host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileServerEndpoints {
    /// Base URL used for server-to-service calls.
    pub internal: String,
    /// Base URL embedded in pages served to browsers.
    pub public: String,
}

/// Snapshot of service health.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthReport {
    /// `ok` when the tile service is healthy, otherwise `degraded`.
    pub status: HealthStatus,
    /// Internal tile-service base URL.
    pub tileserver_internal: String,
    /// Public tile-service base URL.
    pub tileserver_public: String,
    /// Whether the probe succeeded.
    pub tileserver_healthy: bool,
}

impl HealthReport {
    /// Build a report from a probe outcome.
    ///
    /// A failed probe is logged and reported as [`HealthStatus::Degraded`].
    ///
    /// # Examples
    /// ```
    /// use poimap_core::{HealthReport, HealthStatus, ProbeError, TileServerEndpoints};
    ///
    /// let endpoints = TileServerEndpoints {
    ///     internal: "http://tileserver:8080".to_owned(),
    ///     public: "http://localhost:8080".to_owned(),
    /// };
    /// let failure = Err(ProbeError::Status {
    ///     url: "http://tileserver:8080/health".to_owned(),
    ///     status: 503,
    /// });
    ///
    /// let report = HealthReport::from_probe(failure, &endpoints);
    /// assert_eq!(report.status, HealthStatus::Degraded);
    /// assert!(!report.tileserver_healthy);
    /// ```
    #[must_use]
    pub fn from_probe(outcome: Result<(), ProbeError>, endpoints: &TileServerEndpoints) -> Self {
        let healthy = match outcome {
            Ok(()) => true,
            Err(err) => {
                warn!("tile service unhealthy: {err}");
                false
            }
        };
        Self {
            status: if healthy {
                HealthStatus::Ok
            } else {
                HealthStatus::Degraded
            },
            tileserver_internal: endpoints.internal.clone(),
            tileserver_public: endpoints.public.clone(),
            tileserver_healthy: healthy,
        }
    }

    /// Run `probe` once and report the outcome.
    pub async fn check<P>(probe: &P, endpoints: &TileServerEndpoints) -> Self
    where
        P: TileServerProbe + ?Sized,
    {
        Self::from_probe(probe.probe().await, endpoints)
    }
}
