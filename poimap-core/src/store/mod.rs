//! Data access traits for points of interest.
//!
//! The `PoiStore` trait defines a read-only interface over an ordered,
//! immutable collection of [`PointOfInterest`] values. Filters preserve the
//! store order, which clients rely on to align list and marker positions.

use geo::{Intersects, Rect};

use crate::PointOfInterest;

mod memory;

pub use memory::MemoryPoiStore;

/// Borrowing iterator over stored POIs.
pub type PoiIter<'a> = Box<dyn Iterator<Item = &'a PointOfInterest> + Send + 'a>;

/// Read-only access to points of interest.
///
/// Implementers provide [`PoiStore::all`]; the filters default to linear
/// scans over it. Bounding boxes use WGS84 coordinates (`x = longitude`,
/// `y = latitude`).
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, Rect};
/// use poimap_core::{PoiStore, PointOfInterest};
///
/// struct SliceStore {
///     pois: Vec<PointOfInterest>,
/// }
///
/// impl PoiStore for SliceStore {
///     fn all(&self) -> &[PointOfInterest] {
///         &self.pois
///     }
/// }
///
/// # fn main() -> Result<(), poimap_core::PointOfInterestError> {
/// let poi = PointOfInterest::new("Origin", "", Coord { x: 0.0, y: 0.0 }, "", "Nowhere")?;
/// let store = SliceStore { pois: vec![poi.clone()] };
/// let bbox = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
///
/// let found: Vec<_> = store.get_pois_in_bbox(&bbox).collect();
/// assert_eq!(found, vec![&poi]);
/// # Ok(())
/// # }
/// ```
pub trait PoiStore {
    /// Return every POI in manifest order.
    fn all(&self) -> &[PointOfInterest];

    /// Return all POIs that fall within the provided bounding box.
    ///
    /// Containment includes boundary points. Regions crossing the
    /// antimeridian are not modelled.
    fn get_pois_in_bbox(&self, bbox: &Rect<f64>) -> PoiIter<'_> {
        let bbox = *bbox;
        Box::new(
            self.all()
                .iter()
                // `Intersects` treats boundary points as inside the rectangle.
                .filter(move |p| bbox.intersects(&p.location)),
        )
    }

    /// Return all POIs whose country matches `country`, ignoring case.
    fn get_pois_by_country(&self, country: &str) -> PoiIter<'_> {
        let wanted = country.to_lowercase();
        Box::new(
            self.all()
                .iter()
                .filter(move |p| p.country.to_lowercase() == wanted),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PoiStore;
    use crate::{MemoryPoiStore, Region, RegionExtent, test_support::poi_at};
    use geo::{Coord, Rect};
    use rstest::rstest;

    fn unit_box() -> Rect<f64> {
        Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 })
    }

    #[rstest]
    #[case::west_edge(|e: RegionExtent| Coord { x: e.min_lon, y: e.max_lat }, true)]
    #[case::east_edge(|e: RegionExtent| Coord { x: e.max_lon, y: e.min_lat }, true)]
    #[case::south_west_corner(|e: RegionExtent| Coord { x: e.min_lon, y: e.min_lat }, true)]
    #[case::north_east_corner(|e: RegionExtent| Coord { x: e.max_lon, y: e.max_lat }, true)]
    #[case::past_west(|e: RegionExtent| Coord { x: e.min_lon.next_down(), y: e.min_lat }, false)]
    #[case::past_east(|e: RegionExtent| Coord { x: e.max_lon.next_up(), y: e.min_lat }, false)]
    #[case::past_south(|e: RegionExtent| Coord { x: e.min_lon, y: e.min_lat.next_down() }, false)]
    #[case::past_north(|e: RegionExtent| Coord { x: e.max_lon, y: e.max_lat.next_up() }, false)]
    fn region_edges_are_inclusive(
        #[values(Region::Ontario, Region::Bc, Region::Alberta, Region::Arctic)] region: Region,
        #[case] place: fn(RegionExtent) -> Coord<f64>,
        #[case] inside: bool,
    ) {
        let location = place(region.extent());
        let store = MemoryPoiStore::new(vec![poi_at("edge", location.y, location.x)]);
        let found = store.get_pois_in_bbox(&region.bounds()).count();
        assert_eq!(found, usize::from(inside), "{region} at {location:?}");
    }

    #[rstest]
    fn empty_store_matches_nothing() {
        let store = MemoryPoiStore::default();
        assert_eq!(store.get_pois_in_bbox(&Region::Arctic.bounds()).count(), 0);
    }

    #[rstest]
    fn bbox_results_keep_store_order() {
        let store = MemoryPoiStore::new(vec![
            poi_at("first", 0.5, 0.5),
            poi_at("skipped", 5.0, 5.0),
            poi_at("second", -0.5, -0.5),
        ]);
        let names: Vec<_> = store
            .get_pois_in_bbox(&unit_box())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}
