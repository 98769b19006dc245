//! Core functionality for the Fogwatch driving-safety workspace.
//!
//! This crate provides the ambient pieces shared by every other crate:
//! error types, logging initialization, configuration and the
//! geographic coordinate type with its great-circle distance.

pub mod config;
pub mod error;
pub mod geo;
pub mod logging;

pub use config::{AdvisoryConfig, FogwatchConfig, LoggingConfig, RankingConfig};
pub use error::{CoreError, Result};
pub use geo::{round_tenths, GeoCoordinate, EARTH_RADIUS_KM};
