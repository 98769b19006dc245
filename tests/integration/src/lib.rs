//! Integration tests across the Fogwatch crates
//!
//! This test suite validates the flows a dashboard host drives:
//! - Weather or vision input → conditions → risk assessment
//! - Advisory answers and their rule-based fallback
//! - Nearby incidents and safe stops ranked around the driver
//! - Route checkpoint sampling and route safety scoring

pub mod test_utils;

#[cfg(test)]
mod dashboard_flow_tests;

#[cfg(test)]
mod nearby_ranking_tests;
