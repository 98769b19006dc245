//! Domain module for Fogwatch
//!
//! This crate contains pure domain logic with no I/O dependencies:
//! - Visibility readings and fog levels
//! - Rule-based accident risk classification
//! - Composite hazard index for the dashboard panel
//! - Route checkpoint sampling and route safety scoring

pub mod conditions;
pub mod error;
pub mod hazard;
pub mod risk;
pub mod route;
pub mod visibility;

pub use conditions::{FogSource, ObservedConditions, RoadType, TimeOfDay};
pub use error::{DomainError, Result};
pub use hazard::{FactorSeverity, HazardFactor, HazardIndex, HazardInputs, HazardTier};
pub use risk::{classify, rule_based_reasoning, RiskAssessment, RiskClassifier, RiskLevel};
pub use route::{
    assess_route, fallback_checkpoints, plan_checkpoints, sample_checkpoints, CheckpointReading,
    RouteCheckpoint, RouteSafety, RouteSummary,
};
pub use visibility::{FogLevel, VisibilityReading};
