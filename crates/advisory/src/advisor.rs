//! Seam for the external risk advisory
//!
//! Implementations wrap whatever service answers advisory requests (an
//! LLM endpoint in production, a canned responder in tests). They return
//! the raw response text; parsing, validation, timeouts and fallback are
//! applied uniformly by [`assess_with_fallback`].

use crate::error::{AdvisoryError, Result};
use crate::outcome::{AdvisoryOutcome, ResolvedAssessment};
use crate::request::AdvisoryRequest;
use crate::response::parse_advisory_response;
use async_trait::async_trait;
use fogwatch_core::config::AdvisoryConfig;
use std::time::Duration;
use tracing::{debug, info};

#[async_trait]
pub trait RiskAdvisor: Send + Sync {
    /// Send the request and return the service's raw answer text
    async fn advise(&self, request: &AdvisoryRequest) -> Result<String>;
}

/// Ask the advisory, bounded by `timeout`, and classify the answer
pub async fn request_advisory<A>(
    advisor: &A,
    request: &AdvisoryRequest,
    timeout: Duration,
) -> AdvisoryOutcome
where
    A: RiskAdvisor + ?Sized,
{
    let result = match tokio::time::timeout(timeout, advisor.advise(request)).await {
        Ok(Ok(text)) => parse_advisory_response(&text),
        Ok(Err(error)) => Err(error),
        Err(_) => Err(AdvisoryError::Timeout(timeout.as_millis() as u64)),
    };
    result.into()
}

/// Resolve the assessment to display for `request`.
///
/// Uses the advisory when it is enabled and answers in time with a valid
/// payload; otherwise every field comes from the rule table.
pub async fn assess_with_fallback<A>(
    advisor: &A,
    request: &AdvisoryRequest,
    config: &AdvisoryConfig,
) -> ResolvedAssessment
where
    A: RiskAdvisor + ?Sized,
{
    let outcome = if config.enabled {
        request_advisory(advisor, request, config.timeout()).await
    } else {
        AdvisoryOutcome::Unavailable(AdvisoryError::Disabled)
    };

    let resolved = outcome.resolve(request.fog_level, request.time_of_day, request.road_type);

    if resolved.is_fallback() {
        debug!(score = resolved.assessment.risk_score, "rule-based assessment resolved");
    } else {
        info!(
            level = %resolved.assessment.risk_level,
            score = resolved.assessment.risk_score,
            "advisory assessment accepted"
        );
    }

    resolved
}

/// Advisory that never answers; every request falls back to the rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAdvisor;

#[async_trait]
impl RiskAdvisor for OfflineAdvisor {
    async fn advise(&self, _request: &AdvisoryRequest) -> Result<String> {
        Err(AdvisoryError::RuleBasedRequested)
    }
}
