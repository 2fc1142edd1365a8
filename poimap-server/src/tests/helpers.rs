//! Helpers for driving the router in-process.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use poimap_core::{TileServerEndpoints, TileServerProbe};
use poimap_data::{embedded_store, tileserver::test_support::StubTileServerProbe};
use tower::ServiceExt;

use crate::http::{AppState, create_router};

pub(super) const INTERNAL_URL: &str = "http://tileserver:8080";
pub(super) const PUBLIC_URL: &str = "https://tiles.example.com";

/// Response captured from a single request.
#[derive(Debug)]
pub(super) struct Captured {
    pub(super) status: StatusCode,
    pub(super) content_type: Option<String>,
    pub(super) body: Bytes,
}

impl Captured {
    pub(super) fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub(super) fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body should be UTF-8")
    }
}

pub(super) fn endpoints() -> TileServerEndpoints {
    TileServerEndpoints {
        internal: INTERNAL_URL.to_owned(),
        public: PUBLIC_URL.to_owned(),
    }
}

pub(super) fn app_with_probe(probe: Arc<StubTileServerProbe>) -> Router {
    let store = Arc::new(embedded_store().expect("embedded manifest should be valid"));
    let probe: Arc<dyn TileServerProbe> = probe;
    create_router(AppState::new(store, probe, endpoints()))
}

pub(super) fn app() -> Router {
    app_with_probe(Arc::new(StubTileServerProbe::healthy()))
}

pub(super) async fn get(router: Router, uri: &str) -> Captured {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = router
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    Captured {
        status,
        content_type,
        body,
    }
}

pub(super) fn names(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|poi| {
            poi["name"]
                .as_str()
                .expect("every POI has a name")
                .to_owned()
        })
        .collect()
}
