//! Data sources for the POI map service.
//!
//! - [`manifest`] holds the embedded point-of-interest records and builds the
//!   process-wide [`MemoryPoiStore`](poimap_core::MemoryPoiStore).
//! - [`tileserver`] probes the external tile service's health endpoint over
//!   HTTP.

#![forbid(unsafe_code)]

pub mod manifest;
pub mod tileserver;

pub use manifest::{MANIFEST_LEN, embedded_store, points_of_interest};
pub use tileserver::{HttpTileServerProbe, HttpTileServerProbeConfig, ProbeBuildError};
