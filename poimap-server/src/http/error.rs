//! Request-level errors and their JSON representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use poimap_core::UnknownRegionError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested region is not one of the predefined boxes.
    #[error(transparent)]
    UnknownRegion(#[from] UnknownRegionError),
}

impl ApiError {
    /// HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnknownRegion(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
