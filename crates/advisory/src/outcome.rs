//! Advisory outcome and fallback resolution
//!
//! An external assessment is either used whole or dropped whole. When it
//! is dropped the rule table supplies every field, including the alert.

use crate::error::AdvisoryError;
use crate::response::AiAssessment;
use fogwatch_domain::{
    rule_based_reasoning, FogLevel, RiskAssessment, RiskClassifier, RoadType, TimeOfDay,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Result of asking the external advisory
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryOutcome {
    Assessed(AiAssessment),
    Unavailable(AdvisoryError),
}

impl From<Result<AiAssessment, AdvisoryError>> for AdvisoryOutcome {
    fn from(result: Result<AiAssessment, AdvisoryError>) -> Self {
        match result {
            Ok(assessment) => AdvisoryOutcome::Assessed(assessment),
            Err(error) => AdvisoryOutcome::Unavailable(error),
        }
    }
}

/// Which producer an assessment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    Ai,
    RuleBased,
}

/// The assessment a caller should display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssessment {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub source: AssessmentSource,
    pub reasoning: String,
}

impl ResolvedAssessment {
    /// Assessment straight from the rule table
    pub fn rule_based(fog: FogLevel, time: TimeOfDay, road: RoadType) -> Self {
        Self {
            assessment: RiskClassifier::new().classify(fog, time, road),
            source: AssessmentSource::RuleBased,
            reasoning: rule_based_reasoning(fog, time, road),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == AssessmentSource::RuleBased
    }
}

impl AdvisoryOutcome {
    /// Pick the assessment to show, falling back to the rule table on any failure
    pub fn resolve(self, fog: FogLevel, time: TimeOfDay, road: RoadType) -> ResolvedAssessment {
        match self {
            AdvisoryOutcome::Assessed(ai) => ResolvedAssessment {
                assessment: ai.assessment,
                source: AssessmentSource::Ai,
                reasoning: ai.reasoning,
            },
            AdvisoryOutcome::Unavailable(reason) => {
                warn!(
                    %reason,
                    fog = %fog,
                    time = %time,
                    road = %road,
                    "advisory unavailable, using rule-based assessment"
                );
                ResolvedAssessment::rule_based(fog, time, road)
            }
        }
    }
}
