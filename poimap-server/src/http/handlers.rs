//! Route handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::Html,
};
use poimap_core::{HealthReport, PointOfInterest};
use tracing::debug;

use super::{ApiError, AppState};

/// `GET /`: the interactive map page.
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page())
}

/// `GET /api/pois`: every point of interest in manifest order.
pub async fn list_pois(State(state): State<AppState>) -> Json<Vec<PointOfInterest>> {
    Json(state.pois().list_all())
}

/// `GET /api/pois/{country}`: points of interest whose country matches
/// case-insensitively. Unknown countries yield an empty array.
pub async fn pois_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Json<Vec<PointOfInterest>> {
    Json(state.pois().filter_by_country(&country))
}

/// `GET /api/pois/region/{region}`: points of interest inside a named
/// bounding box.
///
/// # Errors
/// Returns [`ApiError::UnknownRegion`] for names outside the predefined set.
pub async fn pois_by_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<Vec<PointOfInterest>>, ApiError> {
    let pois = state.pois().filter_by_region(&region).inspect_err(|err| {
        debug!(region = %err.name, "rejected unknown region");
    })?;
    Ok(Json(pois))
}

/// `GET /api/health`: probe the tile service once.
///
/// Always answers 200; a failed probe is reported as `degraded`.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::check(state.probe(), state.tileserver()).await)
}
