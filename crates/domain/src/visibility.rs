//! Visibility readings and the fog level derived from them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this many meters fog is dense
pub const DENSE_FOG_BELOW_M: f64 = 300.0;

/// Below this many meters (and at or above the dense bound) fog is medium
pub const MEDIUM_FOG_BELOW_M: f64 = 1000.0;

/// Lower bound producers clamp simulated or estimated readings to
pub const MIN_REPORTED_VISIBILITY_M: f64 = 50.0;

/// Upper bound producers clamp simulated or estimated readings to
pub const MAX_REPORTED_VISIBILITY_M: f64 = 1500.0;

/// Discretized visibility bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FogLevel {
    /// Visibility at or above 1000 m
    None,
    /// Visibility in [300, 1000) m
    Medium,
    /// Visibility below 300 m
    Dense,
}

impl FogLevel {
    pub const ALL: [FogLevel; 3] = [FogLevel::None, FogLevel::Medium, FogLevel::Dense];

    /// Threshold function mapping visibility in meters to a fog level
    pub fn from_visibility(meters: f64) -> Self {
        if meters < DENSE_FOG_BELOW_M {
            FogLevel::Dense
        } else if meters < MEDIUM_FOG_BELOW_M {
            FogLevel::Medium
        } else {
            FogLevel::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FogLevel::None => "none",
            FogLevel::Medium => "medium",
            FogLevel::Dense => "dense",
        }
    }
}

impl fmt::Display for FogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visibility measurement in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct VisibilityReading(f64);

impl VisibilityReading {
    /// Negative or NaN inputs are treated as zero visibility.
    pub fn new(meters: f64) -> Self {
        if meters.is_nan() {
            return Self(0.0);
        }
        Self(meters.max(0.0))
    }

    /// Reading clamped to the [50, 1500] m band producers report in
    pub fn clamped(meters: f64) -> Self {
        Self(Self::new(meters).0.clamp(
            MIN_REPORTED_VISIBILITY_M,
            MAX_REPORTED_VISIBILITY_M,
        ))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn fog_level(&self) -> FogLevel {
        FogLevel::from_visibility(self.0)
    }
}

impl From<f64> for VisibilityReading {
    fn from(meters: f64) -> Self {
        Self::new(meters)
    }
}

impl From<VisibilityReading> for f64 {
    fn from(reading: VisibilityReading) -> Self {
        reading.0
    }
}
