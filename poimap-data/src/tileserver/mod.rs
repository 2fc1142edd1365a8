//! HTTP health probing for the tile service.
//!
//! This module provides [`HttpTileServerProbe`], an implementation of
//! [`poimap_core::TileServerProbe`] that issues a single bounded-time
//! `GET {base_url}/health` request against the tile service.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use poimap_core::TileServerProbe;
//! use poimap_data::tileserver::{HttpTileServerProbe, HttpTileServerProbeConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpTileServerProbeConfig::new("http://tileserver:8080")
//!     .with_timeout(Duration::from_secs(2));
//! let probe = HttpTileServerProbe::with_config(config)?;
//!
//! probe.probe().await?;
//! # Ok(())
//! # }
//! ```

mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, HttpTileServerProbe, HttpTileServerProbeConfig,
    ProbeBuildError,
};
