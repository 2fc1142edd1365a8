//! Shared application state.

use std::sync::Arc;

use axum::body::Bytes;
use poimap_core::{MemoryPoiStore, PoiQueryService, TileServerEndpoints, TileServerProbe};

use super::page::render_map_page;

/// Read-only state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pois: PoiQueryService<MemoryPoiStore>,
    probe: Arc<dyn TileServerProbe>,
    tileserver: Arc<TileServerEndpoints>,
    page: Bytes,
}

impl AppState {
    /// Build state over `store`, probing the tile service with `probe`.
    ///
    /// The map page is rendered once here since the public URL is fixed for
    /// the life of the process.
    #[must_use]
    pub fn new(
        store: Arc<MemoryPoiStore>,
        probe: Arc<dyn TileServerProbe>,
        tileserver: TileServerEndpoints,
    ) -> Self {
        let page = Bytes::from(render_map_page(&tileserver.public));
        Self {
            pois: PoiQueryService::new(store),
            probe,
            tileserver: Arc::new(tileserver),
            page,
        }
    }

    /// Query service over the loaded points of interest.
    #[must_use]
    pub const fn pois(&self) -> &PoiQueryService<MemoryPoiStore> {
        &self.pois
    }

    /// Tile-service health probe.
    #[must_use]
    pub fn probe(&self) -> &dyn TileServerProbe {
        self.probe.as_ref()
    }

    /// Configured tile-service URLs.
    #[must_use]
    pub fn tileserver(&self) -> &TileServerEndpoints {
        &self.tileserver
    }

    /// Pre-rendered map page.
    #[must_use]
    pub fn page(&self) -> Bytes {
        self.page.clone()
    }
}
