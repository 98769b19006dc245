//! Composite hazard index for the dashboard risk panel
//!
//! Adds up points from five independent factors (fog, visibility, nearby
//! incidents, weather text, hour of day) and buckets the total into a
//! four-tier scale. This is separate from [`crate::risk`], which drives
//! speed recommendations and driver alerts.

use crate::visibility::{FogLevel, VisibilityReading};
use serde::{Deserialize, Serialize};

/// Severity attached to a single contributing factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorSeverity {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

/// Four-tier bucket of the summed hazard points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardTier {
    Low,
    Medium,
    High,
    Critical,
}

impl HazardTier {
    pub fn from_points(points: u32) -> Self {
        if points >= 70 {
            HazardTier::Critical
        } else if points >= 50 {
            HazardTier::High
        } else if points >= 30 {
            HazardTier::Medium
        } else {
            HazardTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardFactor {
    pub name: String,
    pub severity: FactorSeverity,
    pub points: u32,
}

impl HazardFactor {
    fn new(name: impl Into<String>, severity: FactorSeverity, points: u32) -> Self {
        Self {
            name: name.into(),
            severity,
            points,
        }
    }
}

/// Inputs to the hazard index
#[derive(Debug, Clone, PartialEq)]
pub struct HazardInputs<'a> {
    pub fog_level: FogLevel,
    pub visibility: VisibilityReading,
    pub incident_count: usize,
    pub weather_condition: &'a str,
    /// Local hour, 0-23
    pub hour: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardIndex {
    pub points: u32,
    pub tier: HazardTier,
    pub factors: Vec<HazardFactor>,
}

impl HazardIndex {
    pub fn compute(inputs: &HazardInputs<'_>) -> Self {
        let mut factors = vec![
            fog_factor(inputs.fog_level),
            visibility_factor(inputs.visibility),
            incident_factor(inputs.incident_count),
            weather_factor(inputs.weather_condition),
        ];
        if let Some(factor) = hour_factor(inputs.hour) {
            factors.push(factor);
        }

        let points = factors.iter().map(|f| f.points).sum();

        Self {
            points,
            tier: HazardTier::from_points(points),
            factors,
        }
    }
}

fn fog_factor(fog: FogLevel) -> HazardFactor {
    match fog {
        FogLevel::Dense => HazardFactor::new("Dense Fog", FactorSeverity::Critical, 30),
        FogLevel::Medium => HazardFactor::new("Moderate Fog", FactorSeverity::High, 20),
        FogLevel::None => HazardFactor::new("No Fog", FactorSeverity::Safe, 0),
    }
}

fn visibility_factor(visibility: VisibilityReading) -> HazardFactor {
    let meters = visibility.meters();
    if meters < 300.0 {
        HazardFactor::new("Critical Visibility", FactorSeverity::Critical, 25)
    } else if meters < 1000.0 {
        HazardFactor::new("Poor Visibility", FactorSeverity::High, 20)
    } else if meters < 5000.0 {
        HazardFactor::new("Moderate Visibility", FactorSeverity::Medium, 10)
    } else {
        HazardFactor::new("Good Visibility", FactorSeverity::Safe, 0)
    }
}

fn incident_factor(count: usize) -> HazardFactor {
    if count > 5 {
        HazardFactor::new(
            format!("Multiple Incidents ({})", count),
            FactorSeverity::High,
            20,
        )
    } else if count > 2 {
        HazardFactor::new(
            format!("Some Incidents ({})", count),
            FactorSeverity::Medium,
            15,
        )
    } else if count > 0 {
        HazardFactor::new(
            format!("Minor Incidents ({})", count),
            FactorSeverity::Low,
            5,
        )
    } else {
        HazardFactor::new("No Recent Incidents", FactorSeverity::Safe, 0)
    }
}

fn weather_factor(condition: &str) -> HazardFactor {
    let condition = condition.to_lowercase();
    if ["rain", "snow", "sleet"].iter().any(|w| condition.contains(w)) {
        HazardFactor::new("Adverse Weather", FactorSeverity::High, 15)
    } else if ["mist", "drizzle"].iter().any(|w| condition.contains(w)) {
        HazardFactor::new("Wet Conditions", FactorSeverity::Medium, 10)
    } else {
        HazardFactor::new("Favorable Weather", FactorSeverity::Safe, 0)
    }
}

fn hour_factor(hour: u8) -> Option<HazardFactor> {
    match hour {
        h if h >= 20 || h < 6 => Some(HazardFactor::new(
            "Night Driving",
            FactorSeverity::High,
            10,
        )),
        6..=8 => Some(HazardFactor::new(
            "Peak Fog Hours (Morning)",
            FactorSeverity::High,
            8,
        )),
        17..=19 => Some(HazardFactor::new(
            "Peak Fog Hours (Evening)",
            FactorSeverity::High,
            8,
        )),
        _ => None,
    }
}
