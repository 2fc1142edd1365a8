//! Embedded manifest of points of interest.
//!
//! The records are allied military installations compiled from public
//! government sources. They are constructed once at startup, in the order
//! below, which is also the order clients receive them in.

use geo::Coord;
use poimap_core::{Category, MemoryPoiStore, PointOfInterest, PointOfInterestError};

/// Number of records in the manifest.
pub const MANIFEST_LEN: usize = 63;

fn poi(
    name: &str,
    description: &str,
    (latitude, longitude): (f64, f64),
    flag: &str,
    country: &str,
    country_code: &str,
    category: Category,
) -> Result<PointOfInterest, PointOfInterestError> {
    let location = Coord {
        x: longitude,
        y: latitude,
    };
    Ok(PointOfInterest::new(name, description, location, flag, country)?
        .with_country_code(country_code)
        .with_category(category))
}

/// Construct every embedded point of interest in manifest order.
///
/// # Errors
/// Returns [`PointOfInterestError`] if a record has invalid coordinates. The
/// records are literals, so this indicates a programming error.
pub fn points_of_interest() -> Result<Vec<PointOfInterest>, PointOfInterestError> {
    Ok(vec![
        // Canada - Army
        poi(
            "CFB Petawawa",
            "Home of 2 Canadian Mechanized Brigade Group, 4th Canadian Division Support Base",
            (45.8972, -77.2819),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Edmonton",
            "Home of 1 Canadian Mechanized Brigade Group, 3rd Canadian Division HQ",
            (53.4972, -113.4636),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Gagetown",
            "Largest military base in Canada, Combat Training Centre",
            (45.7500, -66.4500),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Valcartier",
            "Home of 5 Canadian Mechanized Brigade Group, 2nd Canadian Division",
            (46.9000, -71.5000),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Shilo",
            "Artillery training center, Royal Regiment of Canadian Artillery",
            (49.8333, -99.6333),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Wainwright",
            "Canadian Manoeuvre Training Centre, major training area",
            (52.8333, -110.8667),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Suffield",
            "British Army Training Unit Suffield (BATUS), large training area",
            (50.2667, -111.1833),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Kingston",
            "Canadian Forces Base, home to multiple army schools",
            (44.2333, -76.5000),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        poi(
            "CFB Borden",
            "Largest training base in Canada, multiple schools",
            (44.2708, -79.9128),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Army,
        )?,
        // Canada - Navy
        poi(
            "CFB Esquimalt",
            "Pacific Fleet HQ, Maritime Forces Pacific (MARPAC)",
            (48.4322, -123.4139),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Navy,
        )?,
        poi(
            "CFB Halifax",
            "Atlantic Fleet HQ, Maritime Forces Atlantic (MARLANT)",
            (44.6667, -63.5833),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Navy,
        )?,
        poi(
            "HMCS Naden",
            "Naval training establishment, Pacific coast",
            (48.4319, -123.4186),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Navy,
        )?,
        poi(
            "Fleet Diving Unit Atlantic",
            "Naval diving and EOD unit, Halifax",
            (44.6700, -63.5700),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Navy,
        )?,
        // Canada - Air Force
        poi(
            "CFB Trenton",
            "8 Wing, main air transport hub, CC-130 Hercules, CC-177 Globemaster",
            (44.1189, -77.5281),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Cold Lake",
            "4 Wing, CF-18 fighter jet base, Air Weapons Evaluation",
            (54.4050, -110.2794),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Bagotville",
            "3 Wing, CF-18 operations, NORAD alert facility",
            (48.3306, -70.9964),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Comox",
            "19 Wing, maritime patrol, CP-140 Aurora, SAR",
            (49.7108, -124.8867),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Greenwood",
            "14 Wing, maritime patrol, CP-140 Aurora",
            (44.9844, -64.9169),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Winnipeg",
            "17 Wing, 1 Canadian Air Division HQ, training center",
            (49.9100, -97.2400),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Moose Jaw",
            "15 Wing, NATO Flying Training Canada, CT-156 Harvard II",
            (50.3303, -105.5592),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB North Bay",
            "22 Wing, NORAD operations center, underground complex",
            (46.3500, -79.4167),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFB Goose Bay",
            "5 Wing, NATO tactical training, forward operating base",
            (53.3192, -60.4258),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFS Alert",
            "Signals intelligence station, northernmost military base",
            (82.5018, -62.3481),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        poi(
            "CFS Leitrim",
            "Communications Security Establishment signals station",
            (45.3500, -75.6167),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Air,
        )?,
        // Canada - Special Forces
        poi(
            "JTF2 Headquarters",
            "Joint Task Force 2, Tier 1 special operations unit",
            (45.4600, -75.8800),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Special,
        )?,
        poi(
            "CSOR Base",
            "Canadian Special Operations Regiment, Petawawa",
            (45.9000, -77.2500),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Special,
        )?,
        poi(
            "427 SOAS",
            "427 Special Operations Aviation Squadron, Petawawa",
            (45.9100, -77.2600),
            "🇨🇦",
            "Canada",
            "ca",
            Category::Special,
        )?,
        // USA - Army
        poi(
            "Fort Drum",
            "10th Mountain Division, near Canadian border",
            (44.0500, -75.7667),
            "🇺🇸",
            "USA",
            "us",
            Category::Army,
        )?,
        poi(
            "Joint Base Lewis-McChord",
            "I Corps HQ, near Vancouver BC",
            (47.0867, -122.5797),
            "🇺🇸",
            "USA",
            "us",
            Category::Army,
        )?,
        poi(
            "Fort Wainwright",
            "US Army Alaska, Fairbanks",
            (64.8300, -147.6500),
            "🇺🇸",
            "USA",
            "us",
            Category::Army,
        )?,
        // USA - Navy
        poi(
            "Naval Station Everett",
            "Carrier Strike Group, Puget Sound",
            (47.9856, -122.2278),
            "🇺🇸",
            "USA",
            "us",
            Category::Navy,
        )?,
        poi(
            "Naval Base Kitsap",
            "Submarine base, Trident ballistic missiles",
            (47.7178, -122.7328),
            "🇺🇸",
            "USA",
            "us",
            Category::Navy,
        )?,
        poi(
            "Naval Station Norfolk (HQ)",
            "Largest naval base in the world, fleet operations",
            (36.9461, -76.3156),
            "🇺🇸",
            "USA",
            "us",
            Category::Navy,
        )?,
        // USA - Air Force
        poi(
            "Thule Air Base",
            "US Space Force, NORAD early warning, Greenland",
            (76.5311, -68.7033),
            "🇺🇸",
            "USA",
            "us",
            Category::Air,
        )?,
        poi(
            "Elmendorf-Richardson",
            "Joint Base, 11th Air Force, F-22 Raptors",
            (61.2500, -149.8000),
            "🇺🇸",
            "USA",
            "us",
            Category::Air,
        )?,
        poi(
            "Eielson AFB",
            "354th Fighter Wing, F-35A Lightning II",
            (64.6656, -147.1019),
            "🇺🇸",
            "USA",
            "us",
            Category::Air,
        )?,
        poi(
            "Clear Space Force Station",
            "Ballistic missile early warning system",
            (64.2917, -149.1917),
            "🇺🇸",
            "USA",
            "us",
            Category::Air,
        )?,
        poi(
            "Peterson SFB",
            "NORAD/USNORTHCOM HQ, Colorado Springs",
            (38.8236, -104.7003),
            "🇺🇸",
            "USA",
            "us",
            Category::Air,
        )?,
        poi(
            "Cheyenne Mountain SFS",
            "NORAD Alternate Command Center, underground complex",
            (38.7436, -104.8469),
            "🇺🇸",
            "USA",
            "us",
            Category::Air,
        )?,
        // USA - Special Forces
        poi(
            "Fort Liberty (Bragg)",
            "US Army Special Operations Command, Delta Force",
            (35.1392, -78.9967),
            "🇺🇸",
            "USA",
            "us",
            Category::Special,
        )?,
        poi(
            "Naval Special Warfare Command",
            "US Navy SEALs HQ, Coronado",
            (32.6833, -117.1833),
            "🇺🇸",
            "USA",
            "us",
            Category::Special,
        )?,
        poi(
            "Dam Neck",
            "SEAL Team Six (DEVGRU), Virginia Beach",
            (36.8167, -75.9667),
            "🇺🇸",
            "USA",
            "us",
            Category::Special,
        )?,
        // UK - Army
        poi(
            "BATUS",
            "British Army Training Unit Suffield, Alberta",
            (50.2833, -111.2000),
            "🇬🇧",
            "UK",
            "gb",
            Category::Army,
        )?,
        poi(
            "Catterick Garrison",
            "Largest British Army garrison, North Yorkshire",
            (54.3833, -1.6333),
            "🇬🇧",
            "UK",
            "gb",
            Category::Army,
        )?,
        poi(
            "Aldershot Garrison",
            "Home of the British Army, Hampshire",
            (51.2500, -0.7667),
            "🇬🇧",
            "UK",
            "gb",
            Category::Army,
        )?,
        // UK - Navy
        poi(
            "HMNB Portsmouth",
            "Home of the Royal Navy, Queen Elizabeth carriers",
            (50.8000, -1.1000),
            "🇬🇧",
            "UK",
            "gb",
            Category::Navy,
        )?,
        poi(
            "HMNB Clyde",
            "Trident submarine base, Scotland",
            (55.9833, -4.8333),
            "🇬🇧",
            "UK",
            "gb",
            Category::Navy,
        )?,
        poi(
            "HMNB Devonport",
            "Largest naval base in Western Europe, Plymouth",
            (50.3833, -4.1833),
            "🇬🇧",
            "UK",
            "gb",
            Category::Navy,
        )?,
        // UK - Air Force
        poi(
            "RAF Coningsby",
            "Typhoon FGR4, Quick Reaction Alert",
            (53.0936, -0.1661),
            "🇬🇧",
            "UK",
            "gb",
            Category::Air,
        )?,
        poi(
            "RAF Lossiemouth",
            "Typhoon, P-8 Poseidon maritime patrol",
            (57.7056, -3.3392),
            "🇬🇧",
            "UK",
            "gb",
            Category::Air,
        )?,
        poi(
            "RAF Marham",
            "F-35B Lightning II, UK stealth fighter base",
            (52.6483, 0.5506),
            "🇬🇧",
            "UK",
            "gb",
            Category::Air,
        )?,
        poi(
            "RAF Brize Norton",
            "Air Mobility Force, C-17 Globemaster, A400M",
            (51.7500, -1.5833),
            "🇬🇧",
            "UK",
            "gb",
            Category::Air,
        )?,
        poi(
            "RAF Lakenheath",
            "USAF in UK, F-15E Strike Eagles, F-35A",
            (52.4092, 0.5611),
            "🇬🇧",
            "UK",
            "gb",
            Category::Air,
        )?,
        // UK - Special Forces
        poi(
            "SAS Headquarters",
            "22 Special Air Service Regiment, Hereford",
            (52.0567, -2.7150),
            "🇬🇧",
            "UK",
            "gb",
            Category::Special,
        )?,
        poi(
            "SBS Headquarters",
            "Special Boat Service, Poole",
            (50.7167, -1.9833),
            "🇬🇧",
            "UK",
            "gb",
            Category::Special,
        )?,
        poi(
            "SFSG Base",
            "Special Forces Support Group, St Athan",
            (51.4050, -3.4400),
            "🇬🇧",
            "UK",
            "gb",
            Category::Special,
        )?,
        // NATO - Commands
        poi(
            "NATO HQ Brussels",
            "North Atlantic Treaty Organization Headquarters",
            (50.8792, 4.4281),
            "🔵",
            "NATO",
            "nato",
            Category::Army,
        )?,
        poi(
            "SHAPE",
            "Supreme Headquarters Allied Powers Europe, Mons",
            (50.5033, 3.9678),
            "🔵",
            "NATO",
            "nato",
            Category::Army,
        )?,
        poi(
            "Allied Joint Force Command Norfolk",
            "JFC Norfolk, Atlantic operations",
            (36.9461, -76.2892),
            "🔵",
            "NATO",
            "nato",
            Category::Navy,
        )?,
        poi(
            "MARCOM Northwood",
            "Allied Maritime Command, UK",
            (51.6167, -0.4167),
            "🔵",
            "NATO",
            "nato",
            Category::Navy,
        )?,
        poi(
            "AIRCOM Ramstein",
            "Allied Air Command, Germany",
            (49.4369, 7.6003),
            "🔵",
            "NATO",
            "nato",
            Category::Air,
        )?,
        poi(
            "NATO AWACS Geilenkirchen",
            "E-3A Sentry AWACS aircraft base, Germany",
            (50.9617, 6.0428),
            "🔵",
            "NATO",
            "nato",
            Category::Air,
        )?,
        poi(
            "NSHQ Mons",
            "NATO Special Operations Headquarters",
            (50.4500, 3.9500),
            "🔵",
            "NATO",
            "nato",
            Category::Special,
        )?,
    ])
}

/// Build the process-wide store from the embedded manifest.
///
/// # Errors
/// Propagates [`PointOfInterestError`] from [`points_of_interest`].
pub fn embedded_store() -> Result<MemoryPoiStore, PointOfInterestError> {
    let pois = points_of_interest()?;
    log::debug!("loaded {} points of interest from the embedded manifest", pois.len());
    Ok(MemoryPoiStore::new(pois))
}

#[cfg(test)]
mod tests {
    use super::*;
    use poimap_core::{PoiStore, Region};
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    #[fixture]
    fn pois() -> Vec<PointOfInterest> {
        points_of_interest().expect("manifest records are valid")
    }

    fn named<'a>(pois: &'a [PointOfInterest], name: &str) -> &'a PointOfInterest {
        pois.iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("{name} missing from manifest"))
    }

    #[rstest]
    fn manifest_has_expected_size_and_order(pois: Vec<PointOfInterest>) {
        assert_eq!(pois.len(), MANIFEST_LEN);
        assert_eq!(pois.first().map(|p| p.name.as_str()), Some("CFB Petawawa"));
        assert_eq!(pois.last().map(|p| p.name.as_str()), Some("NSHQ Mons"));
    }

    #[rstest]
    fn coordinates_are_in_range(pois: Vec<PointOfInterest>) {
        for poi in &pois {
            assert!((-90.0..=90.0).contains(&poi.latitude()), "{}", poi.name);
            assert!((-180.0..=180.0).contains(&poi.longitude()), "{}", poi.name);
        }
    }

    #[rstest]
    fn names_are_unique(pois: Vec<PointOfInterest>) {
        let names: HashSet<_> = pois.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), pois.len());
    }

    #[rstest]
    fn country_codes_match_flag_sources(pois: Vec<PointOfInterest>) {
        for poi in &pois {
            let expected = match poi.country.as_str() {
                "Canada" => "ca",
                "USA" => "us",
                "UK" => "gb",
                "NATO" => "nato",
                other => panic!("unexpected country {other}"),
            };
            assert_eq!(poi.country_code, expected, "{}", poi.name);
        }
    }

    #[rstest]
    fn every_category_is_represented(pois: Vec<PointOfInterest>) {
        for category in Category::ALL {
            assert!(pois.iter().any(|p| p.category == category), "{category}");
        }
    }

    #[rstest]
    fn trenton_is_in_ontario_and_esquimalt_is_not(pois: Vec<PointOfInterest>) {
        let trenton = named(&pois, "CFB Trenton");
        assert_eq!((trenton.latitude(), trenton.longitude()), (44.1189, -77.5281));
        assert!(Region::Ontario.contains(trenton));
        assert!(!Region::Ontario.contains(named(&pois, "CFB Esquimalt")));
    }

    #[rstest]
    fn embedded_store_preserves_manifest(pois: Vec<PointOfInterest>) {
        let store = embedded_store().expect("manifest records are valid");
        assert_eq!(store.all(), pois.as_slice());
    }
}
