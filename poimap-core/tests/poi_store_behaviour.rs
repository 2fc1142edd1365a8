//! Behavioural tests for [`PoiQueryService`] over a [`MemoryPoiStore`].

use geo::Coord;
use poimap_core::{MemoryPoiStore, PoiQueryService, PointOfInterest, Region, UnknownRegionError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::sync::Arc;

type Service = PoiQueryService<MemoryPoiStore>;
type ResultCell = RefCell<Option<Result<Vec<PointOfInterest>, UnknownRegionError>>>;

#[fixture]
fn service() -> RefCell<Option<Service>> {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn installation(name: &str, country: &str, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(name, "", Coord { x: lon, y: lat }, "", country)
        .expect("valid installation")
}

fn names(pois: &[PointOfInterest]) -> Vec<&str> {
    pois.iter().map(|p| p.name.as_str()).collect()
}

fn with_service(
    cell: &RefCell<Option<Service>>,
    result: &ResultCell,
    query: impl Fn(&Service) -> Result<Vec<PointOfInterest>, UnknownRegionError>,
) {
    let guard = cell.borrow();
    let service = guard.as_ref().expect("service must be initialised");
    *result.borrow_mut() = Some(query(service));
}

// --- Given steps ---

#[given("a store with installations in Canada and the UK")]
fn given_store(#[from(service)] service: &RefCell<Option<Service>>) {
    let store = MemoryPoiStore::new(vec![
        installation("CFB Trenton", "Canada", 44.1189, -77.5281),
        installation("RAF Marham", "UK", 52.6483, 0.5506),
        installation("CFB Esquimalt", "Canada", 48.4322, -123.4139),
        installation("CFB Borden", "Canada", 44.2708, -79.9128),
    ]);
    *service.borrow_mut() = Some(PoiQueryService::new(Arc::new(store)));
}

// --- When steps ---

#[when("I list all points of interest")]
fn when_list_all(
    #[from(service)] service: &RefCell<Option<Service>>,
    #[from(result)] result: &ResultCell,
) {
    with_service(service, result, |s| Ok(s.list_all()));
}

#[when("I filter by country CANADA")]
fn when_filter_canada(
    #[from(service)] service: &RefCell<Option<Service>>,
    #[from(result)] result: &ResultCell,
) {
    with_service(service, result, |s| Ok(s.filter_by_country("CANADA")));
}

#[when("I filter by country Atlantis")]
fn when_filter_atlantis(
    #[from(service)] service: &RefCell<Option<Service>>,
    #[from(result)] result: &ResultCell,
) {
    with_service(service, result, |s| Ok(s.filter_by_country("Atlantis")));
}

#[when("I filter by region ontario")]
fn when_filter_ontario(
    #[from(service)] service: &RefCell<Option<Service>>,
    #[from(result)] result: &ResultCell,
) {
    with_service(service, result, |s| s.filter_by_region("ontario"));
}

#[when("I filter by region mars")]
fn when_filter_mars(
    #[from(service)] service: &RefCell<Option<Service>>,
    #[from(result)] result: &ResultCell,
) {
    with_service(service, result, |s| s.filter_by_region("mars"));
}

// --- Then steps ---

fn matched(result: &ResultCell) -> Vec<PointOfInterest> {
    match result.borrow().as_ref().expect("query must have run") {
        Ok(pois) => pois.clone(),
        Err(err) => panic!("expected matches, got {err}"),
    }
}

#[then("every installation is returned in store order")]
fn then_all_in_order(#[from(result)] result: &ResultCell) {
    assert_eq!(
        names(&matched(result)),
        ["CFB Trenton", "RAF Marham", "CFB Esquimalt", "CFB Borden"]
    );
}

#[then("only the Canadian installations are returned")]
fn then_canadian(#[from(result)] result: &ResultCell) {
    assert_eq!(
        names(&matched(result)),
        ["CFB Trenton", "CFB Esquimalt", "CFB Borden"]
    );
}

#[then("no installations are returned")]
fn then_none(#[from(result)] result: &ResultCell) {
    assert!(matched(result).is_empty(), "expected an empty result");
}

#[then("only installations inside the Ontario box are returned")]
fn then_ontario(#[from(result)] result: &ResultCell) {
    let pois = matched(result);
    assert_eq!(names(&pois), ["CFB Trenton", "CFB Borden"]);
    assert!(pois.iter().all(|p| Region::Ontario.contains(p)));
}

#[then("an unknown region error lists the valid regions")]
fn then_unknown_region(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    match borrowed.as_ref().expect("query must have run") {
        Err(err) => {
            assert_eq!(err.name, "mars");
            assert_eq!(
                UnknownRegionError::valid_names(),
                ["ontario", "bc", "alberta", "arctic"]
            );
        }
        Ok(pois) => panic!("expected an error, got {} POIs", pois.len()),
    }
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/poi_store.feature", name = $title)]
        fn $fn_name(service: RefCell<Option<Service>>, result: ResultCell) {
            let _ = (service, result);
        }
    };
}

register_scenario!(listing_every_poi, "listing every point of interest");
register_scenario!(country_filter_ignores_case, "filtering by country ignores case");
register_scenario!(unknown_country_is_empty, "filtering by an unknown country");
register_scenario!(region_filter, "filtering by region");
register_scenario!(unknown_region_errors, "filtering by an unknown region");
