//! Vision-model fog detection input
//!
//! A detection asserts the fog level directly. It is trusted as given and
//! replaces the threshold-derived level rather than being checked against
//! the reported visibility.

use crate::error::{AdvisoryError, Result};
use crate::payload::extract_json_object;
use fogwatch_domain::{FogLevel, ObservedConditions, TimeOfDay, VisibilityReading};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDetection")]
pub struct FogDetection {
    pub fog_level: FogLevel,
    /// Estimated visibility, clamped to the reported band
    pub visibility: VisibilityReading,
    /// 0 to 100
    pub confidence_percent: u8,
    pub time_of_day: Option<TimeOfDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetection {
    fog_level: FogLevel,
    visibility: f64,
    #[serde(alias = "confidencePercent")]
    confidence: f64,
    #[serde(default)]
    time_of_day: Option<TimeOfDay>,
}

impl TryFrom<RawDetection> for FogDetection {
    type Error = AdvisoryError;

    fn try_from(raw: RawDetection) -> Result<Self> {
        if !raw.visibility.is_finite() {
            return Err(AdvisoryError::MalformedResponse(
                "visibility must be a finite number".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&raw.confidence) {
            return Err(AdvisoryError::MalformedResponse(format!(
                "confidence out of range: {}",
                raw.confidence
            )));
        }

        Ok(Self {
            fog_level: raw.fog_level,
            visibility: VisibilityReading::clamped(raw.visibility),
            confidence_percent: raw.confidence.round() as u8,
            time_of_day: raw.time_of_day,
        })
    }
}

impl FogDetection {
    /// Parse a vision model answer
    pub fn parse(text: &str) -> Result<Self> {
        let value = extract_json_object(text)?;
        let raw: RawDetection = serde_json::from_value(value)
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Override fog level, visibility and (when detected) time of day
    pub fn apply_to(&self, conditions: ObservedConditions) -> ObservedConditions {
        debug!(
            fog = %self.fog_level,
            visibility = self.visibility.meters(),
            confidence = self.confidence_percent,
            "applying vision fog detection"
        );

        let updated = conditions.override_fog(self.fog_level, self.visibility);
        match self.time_of_day {
            Some(time) => updated.with_time_of_day(time),
            None => updated,
        }
    }
}
