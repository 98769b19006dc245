//! Weather enrichment input
//!
//! Reads the current-conditions payload of an OpenWeatherMap-style API.
//! Only visibility and the condition text feed the risk policy; the rest
//! is carried for display.

use crate::error::{AdvisoryError, Result};
use fogwatch_domain::{FogLevel, VisibilityReading};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visibility assumed when the provider omits it
pub const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub visibility: VisibilityReading,
    /// Lowercased main condition, e.g. "fog", "rain", "clear"
    pub condition: String,
    pub description: String,
    pub temperature_c: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub location: Option<String>,
}

impl WeatherObservation {
    pub fn fog_level(&self) -> FogLevel {
        self.visibility.fog_level()
    }

    pub fn from_openweather_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;
        Self::from_openweather_value(&value)
    }

    pub fn from_openweather_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AdvisoryError::MalformedResponse(
                "weather payload is not a JSON object".to_string(),
            ));
        }

        // A reported visibility of 0 is treated as missing, like an absent field
        let visibility = value
            .get("visibility")
            .and_then(Value::as_f64)
            .filter(|v| *v > 0.0)
            .unwrap_or(DEFAULT_VISIBILITY_M);

        let weather = value.get("weather").and_then(|w| w.get(0));
        let condition = weather
            .and_then(|w| w.get("main"))
            .and_then(Value::as_str)
            .map(str::to_lowercase)
            .unwrap_or_else(|| "clear".to_string());
        let description = weather
            .and_then(|w| w.get("description"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let main = value.get("main");

        Ok(Self {
            visibility: VisibilityReading::new(visibility),
            condition,
            description,
            temperature_c: main.and_then(|m| m.get("temp")).and_then(Value::as_f64),
            humidity_percent: main.and_then(|m| m.get("humidity")).and_then(Value::as_f64),
            location: value
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        })
    }
}
