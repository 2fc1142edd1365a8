//! Facade crate for the POI map service.
//!
//! This crate re-exports the core domain types and, behind the
//! `embedded-data` feature, the embedded manifest and the HTTP tile-service
//! probe.

#![forbid(unsafe_code)]

pub use poimap_core::{
    Category, HealthReport, HealthStatus, MemoryPoiStore, PoiQueryService, PoiStore,
    PointOfInterest, PointOfInterestError, ProbeError, Region, TileServerEndpoints,
    TileServerProbe, UnknownRegionError,
};

#[cfg(feature = "embedded-data")]
pub use poimap_data::{
    HttpTileServerProbe, HttpTileServerProbeConfig, MANIFEST_LEN, ProbeBuildError,
    embedded_store, points_of_interest,
};
