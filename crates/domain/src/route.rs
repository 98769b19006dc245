//! Route safety sampling
//!
//! A route is reduced to a handful of checkpoints; a visibility reading is
//! taken at each and the route is scored by how many checkpoints sit in
//! low or reduced visibility.

use crate::error::{DomainError, Result};
use crate::risk::RiskLevel;
use crate::visibility::VisibilityReading;
use fogwatch_core::geo::{round_tenths, GeoCoordinate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visibility below this counts as a dense-fog area
const LOW_VISIBILITY_BELOW_M: f64 = 1000.0;
/// Visibility below this (and at or above the low bound) counts as reduced
const REDUCED_VISIBILITY_BELOW_M: f64 = 5000.0;

const LOW_VISIBILITY_PENALTY: i64 = 30;
const REDUCED_VISIBILITY_PENALTY: i64 = 15;

/// A sampled point along a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCheckpoint {
    pub name: String,
    pub position: GeoCoordinate,
}

impl RouteCheckpoint {
    pub fn new(name: impl Into<String>, position: GeoCoordinate) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Pick Start, two intermediate checkpoints and Destination from route step start points.
///
/// Returns an empty vector when there are no steps.
pub fn sample_checkpoints(step_starts: &[GeoCoordinate]) -> Vec<RouteCheckpoint> {
    let n = step_starts.len();
    if n == 0 {
        return Vec::new();
    }

    let indices = [0, n / 3, (n * 2) / 3, n - 1];
    let last = indices.len() - 1;

    indices
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let name = match i {
                0 => "Start".to_string(),
                i if i == last => "Destination".to_string(),
                i => format!("Checkpoint {}", i),
            };
            RouteCheckpoint::new(name, step_starts[idx])
        })
        .collect()
}

/// Start, arithmetic midpoint and destination, used when no directions are available
pub fn fallback_checkpoints(
    origin: GeoCoordinate,
    destination: GeoCoordinate,
) -> Vec<RouteCheckpoint> {
    vec![
        RouteCheckpoint::new("Start", origin),
        RouteCheckpoint::new("Midpoint", origin.midpoint(&destination)),
        RouteCheckpoint::new("Destination", destination),
    ]
}

/// Sampled checkpoints, or the fallback triple when the directions had no steps
pub fn plan_checkpoints(
    origin: GeoCoordinate,
    destination: GeoCoordinate,
    step_starts: &[GeoCoordinate],
) -> Vec<RouteCheckpoint> {
    let sampled = sample_checkpoints(step_starts);
    if sampled.is_empty() {
        debug!("no route steps, falling back to straight-line checkpoints");
        fallback_checkpoints(origin, destination)
    } else {
        sampled
    }
}

/// Weather observed at one checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointReading {
    pub checkpoint: RouteCheckpoint,
    pub visibility: VisibilityReading,
    pub weather: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSafety {
    /// 0 to 100, higher is safer
    pub safety_score: u8,
    pub risk_level: RiskLevel,
    /// Mean checkpoint visibility, rounded to whole meters
    pub avg_visibility_m: u32,
    pub warnings: Vec<String>,
    pub recommendation: String,
}

/// Score a route from its checkpoint readings
pub fn assess_route(readings: &[CheckpointReading]) -> Result<RouteSafety> {
    if readings.is_empty() {
        return Err(DomainError::ValidationError(
            "route assessment needs at least one checkpoint reading".to_string(),
        ));
    }

    let low = readings
        .iter()
        .filter(|r| r.visibility.meters() < LOW_VISIBILITY_BELOW_M)
        .count();
    let reduced = readings
        .iter()
        .filter(|r| {
            let m = r.visibility.meters();
            (LOW_VISIBILITY_BELOW_M..REDUCED_VISIBILITY_BELOW_M).contains(&m)
        })
        .count();

    let score = 100
        - LOW_VISIBILITY_PENALTY * low as i64
        - REDUCED_VISIBILITY_PENALTY * reduced as i64;

    let risk_level = if score < 50 {
        RiskLevel::High
    } else if score < 75 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let mut warnings = Vec::new();
    if low > 0 {
        warnings.push(format!("{} area(s) with dense fog detected", low));
    }
    if reduced > 0 {
        warnings.push(format!("{} area(s) with reduced visibility", reduced));
    }

    let total: f64 = readings.iter().map(|r| r.visibility.meters()).sum();
    let avg_visibility_m = (total / readings.len() as f64).round() as u32;

    let recommendation = match risk_level {
        RiskLevel::High => "Consider delaying your trip or taking an alternative route",
        RiskLevel::Medium => "Exercise caution and reduce speed in low visibility areas",
        RiskLevel::Low => "Route is safe for travel",
    };

    debug!(
        checkpoints = readings.len(),
        low_visibility = low,
        reduced_visibility = reduced,
        score,
        "route assessed"
    );

    Ok(RouteSafety {
        safety_score: score.clamp(0, 100) as u8,
        risk_level,
        avg_visibility_m,
        warnings,
        recommendation: recommendation.to_string(),
    })
}

/// Route safety plus trip length and duration for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    #[serde(flatten)]
    pub safety: RouteSafety,
    pub readings: Vec<CheckpointReading>,
    /// Kilometers, rounded to 0.1
    pub distance_km: f64,
    /// Whole minutes
    pub estimated_duration_min: u32,
}

impl RouteSummary {
    /// Build a summary from raw directions totals (meters and seconds)
    pub fn new(readings: Vec<CheckpointReading>, distance_m: f64, duration_s: f64) -> Result<Self> {
        let safety = assess_route(&readings)?;
        Ok(Self {
            safety,
            readings,
            distance_km: round_tenths(distance_m.max(0.0) / 1000.0),
            estimated_duration_min: (duration_s.max(0.0) / 60.0).round() as u32,
        })
    }
}
