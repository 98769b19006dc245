//! Nearby places: safe stops and community incidents
//!
//! Maps-API place results are labeled for presentation (stop kind,
//! incident severity and message) and then handed to the ranker.
//! Places without a usable position are dropped here, before ranking.

use crate::error::Result;
use crate::ranker::{Positioned, ProximityRanker, RankedPoint};
use fogwatch_core::config::RankingConfig;
use fogwatch_core::geo::GeoCoordinate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Google place type a nearby-search result was requested with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    GasStation,
    Parking,
    Lodging,
    RestStop,
    Police,
    Hospital,
    #[serde(other)]
    Other,
}

impl PlaceCategory {
    /// Place types queried when looking for somewhere to pull over
    pub const SAFE_STOP_SEARCH: [PlaceCategory; 4] = [
        PlaceCategory::GasStation,
        PlaceCategory::Parking,
        PlaceCategory::Lodging,
        PlaceCategory::RestStop,
    ];

    /// Place types queried for community incident reports
    pub const INCIDENT_SEARCH: [PlaceCategory; 3] = [
        PlaceCategory::Police,
        PlaceCategory::Hospital,
        PlaceCategory::Parking,
    ];

    pub fn from_place_type(place_type: &str) -> Self {
        match place_type {
            "gas_station" => PlaceCategory::GasStation,
            "parking" => PlaceCategory::Parking,
            "lodging" => PlaceCategory::Lodging,
            "rest_stop" => PlaceCategory::RestStop,
            "police" => PlaceCategory::Police,
            "hospital" => PlaceCategory::Hospital,
            _ => PlaceCategory::Other,
        }
    }
}

/// A place returned by a nearby search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    pub place_id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: PlaceCategory,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
    pub vicinity: Option<String>,
    pub open_now: Option<bool>,
}

impl NearbyPlace {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        category: PlaceCategory,
    ) -> Self {
        Self {
            place_id: None,
            name: name.into(),
            latitude,
            longitude,
            category,
            rating: None,
            user_ratings_total: None,
            vicinity: None,
            open_now: None,
        }
    }

    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        GeoCoordinate::new(self.latitude, self.longitude).ok()
    }
}

impl Positioned for NearbyPlace {
    fn position(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Kind of safe stop shown to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Fuel,
    Parking,
    Hotel,
    RestArea,
}

impl From<PlaceCategory> for StopKind {
    fn from(category: PlaceCategory) -> Self {
        match category {
            PlaceCategory::GasStation => StopKind::Fuel,
            PlaceCategory::Parking => StopKind::Parking,
            PlaceCategory::Lodging => StopKind::Hotel,
            _ => StopKind::RestArea,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeStop {
    pub id: String,
    pub name: String,
    pub kind: StopKind,
    pub address: String,
    pub open_now: Option<bool>,
    #[serde(flatten)]
    pub position: GeoCoordinate,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
}

impl SafeStop {
    /// `index` names stops whose place id is missing
    pub fn from_place(place: &NearbyPlace, index: usize) -> Self {
        Self {
            id: place
                .place_id
                .clone()
                .unwrap_or_else(|| format!("stop-{}", index)),
            name: place.name.clone(),
            kind: place.category.into(),
            address: place
                .vicinity
                .clone()
                .unwrap_or_else(|| "Address not available".to_string()),
            open_now: place.open_now,
            position: place.position(),
            rating: place.rating,
            user_ratings_total: place.user_ratings_total,
        }
    }
}

impl Positioned for SafeStop {
    fn position(&self) -> GeoCoordinate {
        self.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Low,
    Medium,
    High,
}

impl IncidentSeverity {
    /// Police and hospital results are high; poorly rated places are medium
    pub fn for_place(category: PlaceCategory, rating: Option<f32>) -> Self {
        match category {
            PlaceCategory::Police | PlaceCategory::Hospital => IncidentSeverity::High,
            _ if rating.unwrap_or(0.0) < 3.5 => IncidentSeverity::Medium,
            _ => IncidentSeverity::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityIncident {
    pub id: String,
    pub reporter: String,
    pub message: String,
    pub location: String,
    #[serde(flatten)]
    pub position: GeoCoordinate,
    pub severity: IncidentSeverity,
    pub rating: f32,
    pub category: PlaceCategory,
}

impl CommunityIncident {
    pub fn from_place(place: &NearbyPlace, index: usize) -> Self {
        let message = match place.category {
            PlaceCategory::Police => format!("Traffic incident at {}", place.name),
            PlaceCategory::Hospital => format!("Emergency services nearby: {}", place.name),
            _ => format!("Safe stop available: {}", place.name),
        };

        let reporter = place
            .name
            .split(' ')
            .next()
            .filter(|word| !word.is_empty())
            .unwrap_or("Anonymous")
            .to_string();

        Self {
            id: place
                .place_id
                .clone()
                .unwrap_or_else(|| format!("incident-{}", index)),
            reporter,
            message,
            location: place.vicinity.clone().unwrap_or_else(|| place.name.clone()),
            position: place.position(),
            severity: IncidentSeverity::for_place(place.category, place.rating),
            rating: place.rating.unwrap_or(0.0),
            category: place.category,
        }
    }
}

impl Positioned for CommunityIncident {
    fn position(&self) -> GeoCoordinate {
        self.position
    }
}

/// Ranked results of one nearby query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyResults<T> {
    pub results: Vec<RankedPoint<T>>,
    pub total: usize,
    pub search_radius_km: f64,
}

impl<T> NearbyResults<T> {
    fn new(results: Vec<RankedPoint<T>>, config: &RankingConfig) -> Self {
        Self {
            total: results.len(),
            results,
            search_radius_km: config.search_radius_km(),
        }
    }
}

fn usable_places(places: &[NearbyPlace]) -> impl Iterator<Item = (usize, &NearbyPlace)> {
    places.iter().enumerate().filter(|(_, place)| {
        let usable = place.coordinate().is_some();
        if !usable {
            warn!(
                name = %place.name,
                latitude = place.latitude,
                longitude = place.longitude,
                "dropping place with invalid coordinates"
            );
        }
        usable
    })
}

/// Nearest safe stops to the observer, up to `config.safe_stop_limit`
pub fn nearest_safe_stops(
    observer: GeoCoordinate,
    places: &[NearbyPlace],
    config: &RankingConfig,
) -> Result<NearbyResults<SafeStop>> {
    let stops = usable_places(places).map(|(index, place)| SafeStop::from_place(place, index));
    let ranked = ProximityRanker::new(observer).rank(stops, config.safe_stop_limit)?;

    debug!(found = ranked.len(), "safe stops ranked");
    Ok(NearbyResults::new(ranked, config))
}

/// Nearest community incidents to the observer, up to `config.incident_limit`
pub fn nearest_incidents(
    observer: GeoCoordinate,
    places: &[NearbyPlace],
    config: &RankingConfig,
) -> Result<NearbyResults<CommunityIncident>> {
    let incidents =
        usable_places(places).map(|(index, place)| CommunityIncident::from_place(place, index));
    let ranked = ProximityRanker::new(observer).rank(incidents, config.incident_limit)?;

    debug!(found = ranked.len(), "community incidents ranked");
    Ok(NearbyResults::new(ranked, config))
}
