//! In-memory `PoiStore` populated once at construction.

use crate::PointOfInterest;

use super::PoiStore;

/// Immutable, ordered POI collection.
///
/// The store performs linear scans and is intended for small datasets such as
/// the embedded manifest. There is no mutation API; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPoiStore {
    pois: Vec<PointOfInterest>,
}

impl MemoryPoiStore {
    /// Create a store holding `pois` in the given order.
    #[must_use]
    pub const fn new(pois: Vec<PointOfInterest>) -> Self {
        Self { pois }
    }

    /// Number of stored POIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the store holds no POIs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

impl FromIterator<PointOfInterest> for MemoryPoiStore {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PoiStore for MemoryPoiStore {
    fn all(&self) -> &[PointOfInterest] {
        &self.pois
    }
}
