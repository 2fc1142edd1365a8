//! Named bounding boxes used to filter points of interest.
//!
//! The lookup is a fixed table; regions are not stored on POIs and are only
//! used to build a containment predicate at query time.

use geo::{Coord, Intersects, Rect};
use thiserror::Error;

use crate::PointOfInterest;

/// A named region with a fixed latitude/longitude extent.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use poimap_core::Region;
///
/// let region = Region::from_str("Ontario")?;
/// assert_eq!(region, Region::Ontario);
/// assert_eq!(region.bounds().min().x, -95.0);
/// # Ok::<(), poimap_core::UnknownRegionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Southern and northern Ontario.
    Ontario,
    /// British Columbia.
    Bc,
    /// Alberta.
    Alberta,
    /// The Canadian Arctic above the Arctic Circle.
    Arctic,
}

/// Latitude and longitude limits in degrees, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionExtent {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lon: f64,
    /// Eastern edge.
    pub max_lon: f64,
}

impl Region {
    /// Every region in lookup order.
    pub const ALL: [Self; 4] = [Self::Ontario, Self::Bc, Self::Alberta, Self::Arctic];

    /// Return the lowercase lookup name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ontario => "ontario",
            Self::Bc => "bc",
            Self::Alberta => "alberta",
            Self::Arctic => "arctic",
        }
    }

    /// Return the region's extent from the fixed table.
    #[must_use]
    pub const fn extent(&self) -> RegionExtent {
        match self {
            Self::Ontario => RegionExtent {
                min_lat: 41.0,
                max_lat: 57.0,
                min_lon: -95.0,
                max_lon: -74.0,
            },
            Self::Bc => RegionExtent {
                min_lat: 48.0,
                max_lat: 60.0,
                min_lon: -139.0,
                max_lon: -114.0,
            },
            Self::Alberta => RegionExtent {
                min_lat: 49.0,
                max_lat: 60.0,
                min_lon: -120.0,
                max_lon: -110.0,
            },
            Self::Arctic => RegionExtent {
                min_lat: 66.0,
                max_lat: 84.0,
                min_lon: -141.0,
                max_lon: -52.0,
            },
        }
    }

    /// Return the region as a WGS84 rectangle (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn bounds(&self) -> Rect<f64> {
        let extent = self.extent();
        Rect::new(
            Coord {
                x: extent.min_lon,
                y: extent.min_lat,
            },
            Coord {
                x: extent.max_lon,
                y: extent.max_lat,
            },
        )
    }

    /// Whether `poi` lies inside the region. Boundary points count as inside.
    #[must_use]
    pub fn contains(&self, poi: &PointOfInterest) -> bool {
        self.bounds().intersects(&poi.location)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = UnknownRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == wanted)
            .ok_or_else(|| UnknownRegionError { name: s.to_owned() })
    }
}

/// Raised when a region name is not in the fixed table.
///
/// The message lists every valid name so API clients can correct the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown region. Valid: [{}]", valid_region_list())]
pub struct UnknownRegionError {
    /// The name that failed to match.
    pub name: String,
}

impl UnknownRegionError {
    /// Names accepted by [`Region::from_str`](std::str::FromStr::from_str).
    #[must_use]
    pub fn valid_names() -> Vec<&'static str> {
        Region::ALL.iter().map(Region::as_str).collect()
    }
}

fn valid_region_list() -> String {
    UnknownRegionError::valid_names()
        .into_iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
