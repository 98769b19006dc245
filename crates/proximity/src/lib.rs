//! Proximity ranking for Fogwatch
//!
//! Ranks community incidents, safe stops and route checkpoints by
//! great-circle distance from the driver.
//!
//! # Examples
//!
//! ```
//! use fogwatch_core::GeoCoordinate;
//! use fogwatch_proximity::ProximityRanker;
//!
//! let driver = GeoCoordinate::new(0.0, 0.0).unwrap();
//! let candidates = vec![
//!     GeoCoordinate::new(0.0, 2.0).unwrap(),
//!     GeoCoordinate::new(0.0, 1.0).unwrap(),
//! ];
//!
//! let ranked = ProximityRanker::new(driver).rank(candidates, 1).unwrap();
//! assert_eq!(ranked[0].distance_km, 111.2);
//! ```

pub mod error;
pub mod places;
pub mod ranker;

pub use error::{RankError, Result};
pub use places::{
    nearest_incidents, nearest_safe_stops, CommunityIncident, IncidentSeverity, NearbyPlace,
    NearbyResults, PlaceCategory, SafeStop, StopKind,
};
pub use ranker::{rank, LabeledPoint, Positioned, ProximityRanker, RankedPoint};
