//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::ServerError;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber.
///
/// # Errors
/// Returns [`ServerError::Telemetry`] when a global subscriber is already
/// installed.
pub fn init() -> Result<(), ServerError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(ServerError::Telemetry)
}
