//! Errors from external producers
//!
//! Every variant ends in the same place: the caller discards the external
//! output and falls back to the rule table.

use fogwatch_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvisoryError {
    /// Advisory lookups are switched off in configuration
    #[error("Advisory service disabled")]
    Disabled,

    /// The service answered with the explicit rule-based sentinel
    #[error("Advisory service requested rule-based fallback")]
    RuleBasedRequested,

    #[error("Advisory request timed out after {0} ms")]
    Timeout(u64),

    /// Network or HTTP-level failure reported by the producer
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response text did not contain the expected JSON payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Payload parsed but a field failed validation
    #[error("Invalid assessment: {0}")]
    InvalidAssessment(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
