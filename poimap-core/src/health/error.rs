use thiserror::Error;

/// Errors from [`crate::health::TileServerProbe::probe`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The probe did not complete within its time limit.
    #[error("health probe to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Probed URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The connection could not be established or was interrupted.
    #[error("health probe to {url} failed: {message}")]
    Network {
        /// Probed URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("health probe to {url} returned HTTP {status}")]
    Status {
        /// Probed URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}
