//! Nearby incident and safe-stop ranking around a driver

use crate::test_utils::{driver_position, place_near, random_places};
use fogwatch_core::{GeoCoordinate, RankingConfig};
use fogwatch_proximity::{
    nearest_incidents, nearest_safe_stops, IncidentSeverity, NearbyPlace, PlaceCategory,
    ProximityRanker, RankError, StopKind,
};

#[test]
fn incidents_are_capped_and_sorted() {
    let config = RankingConfig::default();
    let places = random_places(40, 7);

    let incidents = nearest_incidents(driver_position(), &places, &config).unwrap();
    assert_eq!(incidents.total, 12);
    assert_eq!(incidents.results.len(), 12);
    assert_eq!(incidents.search_radius_km, 5.0);
    assert!(incidents
        .results
        .windows(2)
        .all(|pair| pair[0].distance_km <= pair[1].distance_km));
}

#[test]
fn safe_stops_are_capped_at_fifteen() {
    let config = RankingConfig::default();
    let places = random_places(40, 11);

    let stops = nearest_safe_stops(driver_position(), &places, &config).unwrap();
    assert_eq!(stops.results.len(), 15);
    assert!(stops
        .results
        .windows(2)
        .all(|pair| pair[0].distance_km <= pair[1].distance_km));
}

#[test]
fn fewer_places_than_the_limit_are_all_returned() {
    let places = random_places(5, 3);
    let stops = nearest_safe_stops(driver_position(), &places, &RankingConfig::default()).unwrap();
    assert_eq!(stops.total, 5);
}

#[test]
fn nearest_place_wins_over_input_order() {
    let places = vec![
        place_near("Far Fuel", PlaceCategory::GasStation, 0.04, 0.0, Some(4.2)),
        place_near("Near Parking", PlaceCategory::Parking, 0.002, 0.0, Some(3.9)),
        place_near("Mid Hotel", PlaceCategory::Lodging, 0.0, 0.02, None),
    ];

    let stops = nearest_safe_stops(driver_position(), &places, &RankingConfig::default()).unwrap();
    let names: Vec<_> = stops.results.iter().map(|r| r.item.name.as_str()).collect();
    assert_eq!(names, vec!["Near Parking", "Mid Hotel", "Far Fuel"]);

    assert_eq!(stops.results[0].item.kind, StopKind::Parking);
    assert_eq!(stops.results[0].item.id, "place-near-parking");
    assert_eq!(stops.results[0].distance_km, 0.2);
    assert_eq!(stops.results[2].item.kind, StopKind::Fuel);
}

#[test]
fn incident_severity_and_text_follow_place_category() {
    let places = vec![
        place_near("Connaught Police Station", PlaceCategory::Police, 0.01, 0.0, Some(4.5)),
        place_near("AIIMS Hospital", PlaceCategory::Hospital, 0.02, 0.0, Some(4.8)),
        place_near("Lot 9", PlaceCategory::Parking, 0.03, 0.0, Some(2.1)),
        place_near("Palika Parking", PlaceCategory::Parking, 0.035, 0.0, Some(4.0)),
    ];

    let incidents =
        nearest_incidents(driver_position(), &places, &RankingConfig::default()).unwrap();
    let items: Vec<_> = incidents.results.iter().map(|r| &r.item).collect();

    assert_eq!(items[0].severity, IncidentSeverity::High);
    assert_eq!(items[0].message, "Traffic incident at Connaught Police Station");
    assert_eq!(items[0].reporter, "Connaught");
    assert_eq!(items[1].message, "Emergency services nearby: AIIMS Hospital");
    assert_eq!(items[2].severity, IncidentSeverity::Medium);
    assert_eq!(items[3].severity, IncidentSeverity::Low);
    assert_eq!(items[3].message, "Safe stop available: Palika Parking");
}

#[test]
fn places_with_bad_coordinates_are_dropped() {
    let mut places = random_places(3, 21);
    places.push(NearbyPlace::new("Nowhere", 123.0, 77.2, PlaceCategory::Parking));
    places.push(NearbyPlace::new("Broken", f64::NAN, 77.2, PlaceCategory::Police));

    let incidents =
        nearest_incidents(driver_position(), &places, &RankingConfig::default()).unwrap();
    assert_eq!(incidents.total, 3);
    assert!(incidents.results.iter().all(|r| r.item.reporter != "Nowhere"));
}

#[test]
fn zero_limit_is_rejected() {
    let config = RankingConfig {
        incident_limit: 0,
        ..RankingConfig::default()
    };
    let result = nearest_incidents(driver_position(), &random_places(4, 1), &config);
    assert_eq!(result.unwrap_err(), RankError::InvalidLimit(0));
}

#[test]
fn truncation_keeps_the_nearest_prefix() {
    let places = random_places(30, 99);
    let driver = driver_position();
    let positions: Vec<GeoCoordinate> = places.iter().filter_map(NearbyPlace::coordinate).collect();

    let ranker = ProximityRanker::new(driver);
    let everything = ranker.rank(positions.clone(), positions.len()).unwrap();
    let top = ranker.rank(positions, 8).unwrap();

    assert_eq!(top.as_slice(), &everything[..8]);
}

#[test]
fn ranked_results_serialize_flat() {
    let places = vec![place_near("Shell Pump", PlaceCategory::GasStation, 0.0, 0.01, Some(4.1))];
    let stops = nearest_safe_stops(driver_position(), &places, &RankingConfig::default()).unwrap();

    let json = serde_json::to_value(&stops).unwrap();
    let first = &json["results"][0];
    assert_eq!(first["name"], "Shell Pump");
    assert_eq!(first["kind"], "fuel");
    assert_eq!(first["distanceKm"], 1.0);
    assert_eq!(json["total"], 1);
    assert_eq!(json["searchRadiusKm"], 5.0);
}
