//! Error types emitted while configuring and running the map server.
//!
//! Request-level failures live in [`crate::http::ApiError`]; this type only
//! covers startup and the serve loop, all of which end the process.

use std::{net::SocketAddr, sync::Arc};

use poimap_core::PointOfInterestError;
use poimap_data::ProbeBuildError;
use thiserror::Error;

/// Errors emitted by the `poimap` binary.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A tile-service URL could not be parsed.
    #[error("invalid {field} {url:?} (set --{field} or {env}): {source}")]
    InvalidUrl {
        /// CLI flag naming the option.
        field: &'static str,
        /// Environment variable naming the option.
        env: &'static str,
        /// Rejected value.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// A tile-service URL used a scheme other than `http` or `https`.
    #[error("{field} {url:?} must use http or https")]
    UnsupportedScheme {
        /// CLI flag naming the option.
        field: &'static str,
        /// Rejected value.
        url: String,
    },
    /// The listen address could not be parsed.
    #[error("invalid bind address {value:?} (set --bind or POIMAP_BIND): {source}")]
    InvalidBindAddress {
        /// Rejected value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// The embedded manifest held an invalid record.
    #[error("failed to load embedded points of interest: {0}")]
    Manifest(#[from] PointOfInterestError),
    /// The tile-service probe could not be constructed.
    #[error("failed to build tile-service probe: {0}")]
    Probe(#[from] ProbeBuildError),
    /// Installing the tracing subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Binding the listen socket failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested listen address.
        addr: SocketAddr,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
