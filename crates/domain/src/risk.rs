//! Rule-based accident risk classification
//!
//! The decision table is evaluated top to bottom and the first matching
//! row wins:
//!
//! | Fog    | Time  | Road    | Level  | Score | Speed |
//! |--------|-------|---------|--------|-------|-------|
//! | dense  | night | highway | HIGH   | 85    | 30    |
//! | dense  | any   | any     | HIGH   | 75    | 40    |
//! | medium | night | any     | MEDIUM | 65    | 50    |
//! | medium | day   | any     | MEDIUM | 50    | 60    |
//! | none   | any   | any     | LOW    | 20    | 80    |
//!
//! The same [`RiskAssessment`] shape is produced by the external advisory
//! service, which is why it also has a validating constructor.

use crate::conditions::{ObservedConditions, RoadType, TimeOfDay};
use crate::error::{DomainError, Result};
use crate::visibility::FogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Discretized hazard bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Driver alert shown for this level
    pub fn alert_message(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Dense fog ahead – reduce speed significantly, use fog lights, increase following distance."
            }
            RiskLevel::Medium => "Moderate fog detected – reduce speed and use headlights.",
            RiskLevel::Low => "Clear conditions – drive safely and stay alert.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a risk classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRiskAssessment")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// 0 to 100
    pub risk_score: u8,
    /// Always greater than zero
    pub recommended_speed_kmh: u16,
    pub alert_message: String,
}

/// Wire shape of an assessment; deserialization goes through [`RiskAssessment::new`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRiskAssessment {
    risk_level: RiskLevel,
    risk_score: u8,
    recommended_speed_kmh: u16,
    alert_message: String,
}

impl TryFrom<RawRiskAssessment> for RiskAssessment {
    type Error = DomainError;

    fn try_from(raw: RawRiskAssessment) -> Result<Self> {
        Self::new(
            raw.risk_level,
            raw.risk_score,
            raw.recommended_speed_kmh,
            raw.alert_message,
        )
    }
}

impl RiskAssessment {
    /// Build an assessment from an external producer, validating every field
    pub fn new(
        risk_level: RiskLevel,
        risk_score: u8,
        recommended_speed_kmh: u16,
        alert_message: impl Into<String>,
    ) -> Result<Self> {
        let alert_message = alert_message.into();

        if risk_score > 100 {
            return Err(DomainError::ValidationError(format!(
                "risk score must be within 0-100, got {}",
                risk_score
            )));
        }
        if recommended_speed_kmh == 0 {
            return Err(DomainError::ValidationError(
                "recommended speed must be greater than 0".to_string(),
            ));
        }
        if alert_message.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "alert message must not be empty".to_string(),
            ));
        }

        Ok(Self {
            risk_level,
            risk_score,
            recommended_speed_kmh,
            alert_message,
        })
    }

    fn from_table(risk_level: RiskLevel, risk_score: u8, recommended_speed_kmh: u16) -> Self {
        Self {
            risk_level,
            risk_score,
            recommended_speed_kmh,
            alert_message: risk_level.alert_message().to_string(),
        }
    }
}

/// Deterministic classifier over the fog × time × road domain
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one combination of conditions
    pub fn classify(&self, fog: FogLevel, time: TimeOfDay, road: RoadType) -> RiskAssessment {
        let assessment = match (fog, time, road) {
            (FogLevel::Dense, TimeOfDay::Night, RoadType::Highway) => {
                RiskAssessment::from_table(RiskLevel::High, 85, 30)
            }
            (FogLevel::Dense, _, _) => RiskAssessment::from_table(RiskLevel::High, 75, 40),
            (FogLevel::Medium, TimeOfDay::Night, _) => {
                RiskAssessment::from_table(RiskLevel::Medium, 65, 50)
            }
            (FogLevel::Medium, TimeOfDay::Day, _) => {
                RiskAssessment::from_table(RiskLevel::Medium, 50, 60)
            }
            (FogLevel::None, _, _) => RiskAssessment::from_table(RiskLevel::Low, 20, 80),
        };

        debug!(
            fog = %fog,
            time = %time,
            road = %road,
            level = %assessment.risk_level,
            score = assessment.risk_score,
            "rule-based risk classification"
        );

        assessment
    }

    /// Classify an observation snapshot
    pub fn classify_conditions(&self, conditions: &ObservedConditions) -> RiskAssessment {
        self.classify(
            conditions.fog_level,
            conditions.time_of_day,
            conditions.road_type,
        )
    }
}

/// Free-function form of [`RiskClassifier::classify`]
pub fn classify(fog: FogLevel, time: TimeOfDay, road: RoadType) -> RiskAssessment {
    RiskClassifier.classify(fog, time, road)
}

/// Explanation attached to assessments produced by the rule table
pub fn rule_based_reasoning(fog: FogLevel, time: TimeOfDay, road: RoadType) -> String {
    format!("Rule-based analysis: {} fog at {} on {}", fog, time, road)
}
