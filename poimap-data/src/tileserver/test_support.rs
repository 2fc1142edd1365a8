//! Test utilities for tile-service probes.
//!
//! This module provides [`StubTileServerProbe`], a deterministic test double
//! for [`TileServerProbe`] that returns a pre-configured outcome without
//! making HTTP requests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use poimap_core::{ProbeError, TileServerProbe};

/// Stub `TileServerProbe` for testing.
///
/// The stub counts calls so tests can check that callers do not retry.
///
/// # Example
///
/// ```
/// use poimap_core::TileServerProbe;
/// use poimap_data::tileserver::test_support::StubTileServerProbe;
///
/// let probe = StubTileServerProbe::healthy();
/// assert_eq!(probe.calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct StubTileServerProbe {
    failure: Option<ProbeError>,
    calls: AtomicUsize,
}

impl StubTileServerProbe {
    /// Create a probe that always succeeds.
    #[must_use]
    pub fn healthy() -> Self {
        Self::default()
    }

    /// Create a probe that always fails with `error`.
    #[must_use]
    pub fn failing(error: ProbeError) -> Self {
        Self {
            failure: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`TileServerProbe::probe`] has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TileServerProbe for StubTileServerProbe {
    async fn probe(&self) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.failure.clone().map_or(Ok(()), Err)
    }
}
