//! Read-only queries over a [`PoiStore`].
//!
//! `PoiQueryService` turns request-shaped inputs (free-text country names,
//! region names) into filters over the store and returns owned results ready
//! for serialisation. Every operation is a linear scan that preserves store
//! order.

use std::str::FromStr;
use std::sync::Arc;

use log::debug;

use crate::{PoiStore, PointOfInterest, Region, UnknownRegionError};

/// Stateless query layer shared by request handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use geo::Coord;
/// use poimap_core::{MemoryPoiStore, PoiQueryService, PointOfInterest};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let trenton = PointOfInterest::new(
///     "CFB Trenton",
///     "",
///     Coord { x: -77.5281, y: 44.1189 },
///     "",
///     "Canada",
/// )?;
/// let service = PoiQueryService::new(Arc::new(MemoryPoiStore::new(vec![trenton])));
///
/// assert_eq!(service.filter_by_country("CANADA").len(), 1);
/// assert_eq!(service.filter_by_region("ontario")?.len(), 1);
/// assert!(service.filter_by_region("mars").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PoiQueryService<S> {
    store: Arc<S>,
}

impl<S> Clone for PoiQueryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PoiStore> PoiQueryService<S> {
    /// Create a service reading from `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return every POI in store order.
    #[must_use]
    pub fn list_all(&self) -> Vec<PointOfInterest> {
        self.store.all().to_vec()
    }

    /// Return POIs whose country equals `country`, ignoring case.
    ///
    /// Unknown countries yield an empty list rather than an error.
    #[must_use]
    pub fn filter_by_country(&self, country: &str) -> Vec<PointOfInterest> {
        let matches: Vec<_> = self.store.get_pois_by_country(country).cloned().collect();
        debug!("country filter {country:?} matched {} POIs", matches.len());
        matches
    }

    /// Return POIs inside the named region.
    ///
    /// # Errors
    /// Returns [`UnknownRegionError`] when `region` is not one of
    /// [`Region::ALL`], compared case-insensitively.
    pub fn filter_by_region(&self, region: &str) -> Result<Vec<PointOfInterest>, UnknownRegionError> {
        let region = Region::from_str(region)?;
        Ok(self.pois_in_region(region))
    }

    /// Return POIs inside an already-parsed region.
    #[must_use]
    pub fn pois_in_region(&self, region: Region) -> Vec<PointOfInterest> {
        let matches: Vec<_> = self
            .store
            .get_pois_in_bbox(&region.bounds())
            .cloned()
            .collect();
        debug!("region filter {region} matched {} POIs", matches.len());
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryPoiStore, test_support::poi_at};
    use rstest::{fixture, rstest};

    #[fixture]
    fn service() -> PoiQueryService<MemoryPoiStore> {
        let store = MemoryPoiStore::new(vec![
            poi_at("CFB Trenton", 44.1189, -77.5281),
            poi_at("CFB Esquimalt", 48.4322, -123.4139),
            poi_at("CFS Alert", 82.5018, -62.3481),
            poi_at("CFB Borden", 44.2708, -79.9128),
        ]);
        PoiQueryService::new(Arc::new(store))
    }

    fn names(pois: &[PointOfInterest]) -> Vec<&str> {
        pois.iter().map(|p| p.name.as_str()).collect()
    }

    #[rstest]
    fn list_all_is_stable(service: PoiQueryService<MemoryPoiStore>) {
        let first = service.list_all();
        let second = service.list_all();
        assert_eq!(first, second);
        assert_eq!(
            names(&first),
            ["CFB Trenton", "CFB Esquimalt", "CFS Alert", "CFB Borden"]
        );
    }

    #[rstest]
    fn region_filter_keeps_store_order(service: PoiQueryService<MemoryPoiStore>) {
        let ontario = service.filter_by_region("ONTARIO").expect("known region");
        assert_eq!(names(&ontario), ["CFB Trenton", "CFB Borden"]);
    }

    #[rstest]
    #[case("bc", &["CFB Esquimalt"])]
    #[case("arctic", &["CFS Alert"])]
    #[case("alberta", &[])]
    fn region_filter_matches_table(
        service: PoiQueryService<MemoryPoiStore>,
        #[case] region: &str,
        #[case] expected: &[&str],
    ) {
        let found = service.filter_by_region(region).expect("known region");
        assert_eq!(names(&found), expected);
    }

    #[rstest]
    fn unknown_region_is_an_error(service: PoiQueryService<MemoryPoiStore>) {
        let err = service.filter_by_region("mars").expect_err("unknown region");
        assert_eq!(err.name, "mars");
    }

    #[rstest]
    fn clones_share_the_store(service: PoiQueryService<MemoryPoiStore>) {
        let clone = service.clone();
        assert!(std::ptr::eq(service.store(), clone.store()));
    }
}
