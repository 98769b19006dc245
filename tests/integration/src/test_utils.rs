//! Fixtures shared by the integration tests

use async_trait::async_trait;
use fogwatch_advisory::{AdvisoryError, AdvisoryRequest, RiskAdvisor};
use fogwatch_core::GeoCoordinate;
use fogwatch_proximity::{NearbyPlace, PlaceCategory};
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::sync::Mutex;

/// India Gate, New Delhi: the driver position most fixtures are built around
pub fn driver_position() -> GeoCoordinate {
    GeoCoordinate {
        latitude: 28.6129,
        longitude: 77.2295,
    }
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// OpenWeatherMap-style current-conditions payload
pub fn openweather_payload(visibility_m: u32, main: &str) -> String {
    json!({
        "visibility": visibility_m,
        "weather": [{ "main": main, "description": main.to_lowercase() }],
        "main": { "temp": 6.0, "humidity": 94 },
        "name": "New Delhi"
    })
    .to_string()
}

/// Place offset from the driver by the given degrees
pub fn place_near(
    name: &str,
    category: PlaceCategory,
    dlat: f64,
    dlon: f64,
    rating: Option<f32>,
) -> NearbyPlace {
    let origin = driver_position();
    let mut place = NearbyPlace::new(
        name,
        origin.latitude + dlat,
        origin.longitude + dlon,
        category,
    );
    place.place_id = Some(format!("place-{}", name.to_lowercase().replace(' ', "-")));
    place.rating = rating;
    place.vicinity = Some(format!("{} Road, New Delhi", name));
    place
}

/// A reproducible cloud of places within roughly 5 km of the driver
pub fn random_places(count: usize, seed: u64) -> Vec<NearbyPlace> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let categories = [
        PlaceCategory::GasStation,
        PlaceCategory::Parking,
        PlaceCategory::Lodging,
        PlaceCategory::RestStop,
        PlaceCategory::Police,
        PlaceCategory::Hospital,
    ];

    (0..count)
        .map(|i| {
            let category = categories[rng.gen_range(0..categories.len())];
            place_near(
                &format!("Place {}", i),
                category,
                rng.gen_range(-0.045..0.045),
                rng.gen_range(-0.045..0.045),
                Some(rng.gen_range(1.0..5.0)),
            )
        })
        .collect()
}

/// Advisory that replays queued answers and records the requests it saw
pub struct ScriptedAdvisor {
    answers: Mutex<Vec<Result<String, AdvisoryError>>>,
    seen: Mutex<Vec<AdvisoryRequest>>,
}

impl ScriptedAdvisor {
    /// Answers are handed out in order; once exhausted the advisor reports a transport error
    pub fn new(answers: Vec<Result<String, AdvisoryError>>) -> Self {
        let mut answers = answers;
        answers.reverse();
        Self {
            answers: Mutex::new(answers),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<AdvisoryRequest> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RiskAdvisor for ScriptedAdvisor {
    async fn advise(&self, request: &AdvisoryRequest) -> Result<String, AdvisoryError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop())
            .unwrap_or_else(|| Err(AdvisoryError::Transport("no scripted answer left".to_string())))
    }
}
