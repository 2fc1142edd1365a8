//! HTTP surface of the map service.
//!
//! - [`router`] wires routes to handlers and adds request tracing.
//! - [`handlers`] translate requests into [`PoiQueryService`] calls and
//!   health probes.
//! - [`state`] holds the shared, read-only [`AppState`].
//! - [`error`] maps request failures to JSON error bodies.
//! - [`page`] renders the MapLibre map page.
//!
//! [`PoiQueryService`]: poimap_core::PoiQueryService

pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
