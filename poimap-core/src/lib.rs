//! Core domain types for the POI map service.
//!
//! The crate models the static points of interest served by the API, the
//! closed sets of categories and regions used to filter them, a read-only
//! store abstraction, the query layer over it, and the tile-service health
//! report. Constructors return `Result` to surface invalid coordinates early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
pub mod health;
mod poi;
pub mod query;
mod region;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::Category;
pub use health::{HealthReport, HealthStatus, ProbeError, TileServerEndpoints, TileServerProbe};
pub use poi::{PointOfInterest, PointOfInterestError};
pub use query::PoiQueryService;
pub use region::{Region, RegionExtent, UnknownRegionError};
pub use store::{MemoryPoiStore, PoiIter, PoiStore};
