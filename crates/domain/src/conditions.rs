//! Driving conditions supplied by callers

use crate::error::{DomainError, Result};
use crate::visibility::{FogLevel, VisibilityReading};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 2] = [TimeOfDay::Day, TimeOfDay::Night];

    /// Clock-based classification: 20:00 to 05:59 is night
    pub fn from_hour(hour: u8) -> Self {
        if hour >= 20 || hour < 6 {
            TimeOfDay::Night
        } else {
            TimeOfDay::Day
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "day",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    Highway,
    City,
}

impl RoadType {
    pub const ALL: [RoadType; 2] = [RoadType::Highway, RoadType::City];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadType::Highway => "highway",
            RoadType::City => "city",
        }
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the fog level of an observation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FogSource {
    /// Derived from visibility through the threshold function
    Threshold,
    /// Asserted directly by an upstream classifier (vision model)
    Override,
}

/// Snapshot of the inputs a risk classification runs on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedConditions {
    pub visibility: VisibilityReading,
    pub fog_level: FogLevel,
    pub fog_source: FogSource,
    pub time_of_day: TimeOfDay,
    pub road_type: RoadType,
}

impl ObservedConditions {
    /// Conditions with the fog level derived from visibility
    pub fn from_visibility(
        visibility: VisibilityReading,
        time_of_day: TimeOfDay,
        road_type: RoadType,
    ) -> Self {
        Self {
            visibility,
            fog_level: visibility.fog_level(),
            fog_source: FogSource::Threshold,
            time_of_day,
            road_type,
        }
    }

    /// New visibility reading; re-derives fog level unless it was overridden
    pub fn with_visibility(self, visibility: VisibilityReading) -> Self {
        match self.fog_source {
            FogSource::Threshold => Self {
                visibility,
                fog_level: visibility.fog_level(),
                ..self
            },
            FogSource::Override => Self { visibility, ..self },
        }
    }

    /// Trusted override path: take the fog level as asserted
    pub fn override_fog(self, fog_level: FogLevel, visibility: VisibilityReading) -> Self {
        Self {
            visibility,
            fog_level,
            fog_source: FogSource::Override,
            ..self
        }
    }

    pub fn with_time_of_day(self, time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            ..self
        }
    }

    pub fn with_road_type(self, road_type: RoadType) -> Self {
        Self { road_type, ..self }
    }

    /// Threshold-derived fog must agree with the visibility it was derived from
    pub fn check_consistency(&self) -> Result<()> {
        if self.fog_source == FogSource::Threshold
            && self.visibility.fog_level() != self.fog_level
        {
            return Err(DomainError::InvariantViolation(format!(
                "fog level {} does not match visibility {} m",
                self.fog_level,
                self.visibility.meters()
            )));
        }
        Ok(())
    }
}
