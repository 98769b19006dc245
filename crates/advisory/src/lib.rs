//! Contracts for the external producers feeding Fogwatch
//!
//! This crate does not talk to any service itself. It defines:
//! - the advisory request and the validated shape of its answer
//! - the tagged outcome (`Assessed` / `Unavailable`) and the all-or-nothing
//!   fallback to the rule table
//! - parsers for weather observations and vision fog detections
//!
//! # Examples
//!
//! ```
//! use fogwatch_advisory::{parse_advisory_response, AdvisoryOutcome};
//! use fogwatch_domain::{FogLevel, RoadType, TimeOfDay};
//!
//! let outcome: AdvisoryOutcome = parse_advisory_response(r#"{"useRuleBased": true}"#).into();
//! let resolved = outcome.resolve(FogLevel::Dense, TimeOfDay::Night, RoadType::Highway);
//!
//! assert!(resolved.is_fallback());
//! assert_eq!(resolved.assessment.recommended_speed_kmh, 30);
//! ```

pub mod advisor;
pub mod error;
pub mod outcome;
pub mod payload;
pub mod request;
pub mod response;
pub mod vision;
pub mod weather;

pub use advisor::{assess_with_fallback, request_advisory, OfflineAdvisor, RiskAdvisor};
pub use error::{AdvisoryError, Result};
pub use outcome::{AdvisoryOutcome, AssessmentSource, ResolvedAssessment};
pub use payload::extract_json_object;
pub use request::AdvisoryRequest;
pub use response::{parse_advisory_response, parse_advisory_value, AiAssessment};
pub use vision::FogDetection;
pub use weather::WeatherObservation;
