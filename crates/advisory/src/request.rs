//! Advisory request payload

use fogwatch_domain::{FogLevel, ObservedConditions, RoadType, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Weather text sent when the caller has none
pub const UNKNOWN_WEATHER: &str = "unknown";

/// Inputs sent to the external risk advisory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub fog_level: FogLevel,
    pub visibility_meters: f64,
    pub time_of_day: TimeOfDay,
    pub road_type: RoadType,
    pub weather_condition_text: String,
}

impl AdvisoryRequest {
    pub fn new(
        fog_level: FogLevel,
        visibility_meters: f64,
        time_of_day: TimeOfDay,
        road_type: RoadType,
        weather_condition_text: impl Into<String>,
    ) -> Self {
        let weather_condition_text = weather_condition_text.into();
        let weather_condition_text = if weather_condition_text.trim().is_empty() {
            UNKNOWN_WEATHER.to_string()
        } else {
            weather_condition_text
        };

        Self {
            fog_level,
            visibility_meters,
            time_of_day,
            road_type,
            weather_condition_text,
        }
    }

    pub fn from_conditions(conditions: &ObservedConditions, weather: impl Into<String>) -> Self {
        Self::new(
            conditions.fog_level,
            conditions.visibility.meters(),
            conditions.time_of_day,
            conditions.road_type,
            weather,
        )
    }

    /// Instructions for a text model acting as the advisory service
    pub fn prompt(&self) -> String {
        format!(
            "You are a road safety AI system. Analyze the following driving conditions and predict accident risk.

Conditions:
- Fog Level: {fog}
- Visibility: {visibility} meters
- Time of Day: {time}
- Road Type: {road}
- Weather: {weather}

Respond with ONLY a JSON object in this exact format:
{{
  \"riskLevel\": \"LOW\" | \"MEDIUM\" | \"HIGH\",
  \"riskScore\": number (0-100),
  \"reasoning\": \"brief explanation\",
  \"recommendedSpeed\": number (km/h),
  \"alert\": \"specific driver alert message\"
}}

Risk Assessment Guidelines:
- Dense fog + night + highway = HIGH risk (score 80-100)
- Dense fog = HIGH risk (score 70-90)
- Medium fog + night = MEDIUM-HIGH risk (score 60-75)
- Medium fog = MEDIUM risk (score 40-60)
- Light fog or clear = LOW risk (score 0-40)

Be concise and safety-focused.",
            fog = self.fog_level,
            visibility = self.visibility_meters.round(),
            time = self.time_of_day,
            road = self.road_type,
            weather = self.weather_condition_text,
        )
    }
}
