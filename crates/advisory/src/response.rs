//! Advisory response parsing and validation

use crate::error::{AdvisoryError, Result};
use crate::payload::extract_json_object;
use fogwatch_domain::{RiskAssessment, RiskLevel};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An assessment produced by the external advisory, with its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssessment {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub reasoning: String,
}

/// Wire shape of an advisory answer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAdvisory {
    risk_level: RiskLevel,
    risk_score: f64,
    recommended_speed: f64,
    alert: String,
    #[serde(default)]
    reasoning: Option<String>,
}

fn whole_number(field: &str, value: f64, max: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 || value > max {
        return Err(AdvisoryError::MalformedResponse(format!(
            "{} out of range: {}",
            field, value
        )));
    }
    Ok(value.round())
}

/// Parse raw model output into a validated assessment.
///
/// Fails on the `useRuleBased` sentinel, on missing or mistyped fields and
/// on out-of-range values. Nothing from a failed parse is returned.
pub fn parse_advisory_response(text: &str) -> Result<AiAssessment> {
    let value = extract_json_object(text)?;
    parse_advisory_value(value)
}

/// Same as [`parse_advisory_response`] for an already decoded payload
pub fn parse_advisory_value(value: Value) -> Result<AiAssessment> {
    if value.get("useRuleBased").and_then(Value::as_bool) == Some(true) {
        return Err(AdvisoryError::RuleBasedRequested);
    }

    let raw: RawAdvisory = serde_json::from_value(value)
        .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;

    let risk_score = whole_number("riskScore", raw.risk_score, 100.0)? as u8;
    let recommended_speed = whole_number(
        "recommendedSpeed",
        raw.recommended_speed,
        f64::from(u16::MAX),
    )? as u16;

    let assessment =
        RiskAssessment::new(raw.risk_level, risk_score, recommended_speed, raw.alert)?;

    Ok(AiAssessment {
        assessment,
        reasoning: raw.reasoning.unwrap_or_default(),
    })
}
