//! Tile-service probe trait.

use async_trait::async_trait;

use super::ProbeError;

/// Check whether the tile service is reachable and healthy.
///
/// Implementations must bound the check in time so a slow service cannot
/// stall the caller indefinitely. They must not retry.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use poimap_core::{ProbeError, TileServerProbe};
///
/// struct AlwaysDown;
///
/// #[async_trait]
/// impl TileServerProbe for AlwaysDown {
///     async fn probe(&self) -> Result<(), ProbeError> {
///         Err(ProbeError::Network {
///             url: "http://tiles.invalid/health".to_owned(),
///             message: "connection refused".to_owned(),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait TileServerProbe: Send + Sync {
    /// Probe the tile service once.
    async fn probe(&self) -> Result<(), ProbeError>;
}
