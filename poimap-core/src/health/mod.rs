//! Health reporting for the downstream tile service.
//!
//! The `TileServerProbe` trait abstracts a bounded-time reachability check
//! against the tile service. [`HealthReport::from_probe`] folds the probe
//! outcome into a report: failures degrade the status and are never
//! propagated to the caller.

mod error;
mod probe;
mod report;

pub use error::ProbeError;
pub use probe::TileServerProbe;
pub use report::{HealthReport, HealthStatus, TileServerEndpoints};
