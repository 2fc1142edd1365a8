//! Route table.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::{AppState, handlers};

/// Build the application router over `state`.
///
/// Route paths:
///
/// | path | handler |
/// |---|---|
/// | `/` | [`handlers::index`] |
/// | `/api/pois` | [`handlers::list_pois`] |
/// | `/api/pois/{country}` | [`handlers::pois_by_country`] |
/// | `/api/pois/region/{region}` | [`handlers::pois_by_region`] |
/// | `/api/health` | [`handlers::health`] |
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/pois", get(handlers::list_pois))
        .route("/api/pois/{country}", get(handlers::pois_by_country))
        .route("/api/pois/region/{region}", get(handlers::pois_by_region))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
