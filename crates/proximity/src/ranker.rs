//! Great-circle proximity ranking
//!
//! Candidates are measured from a fixed observer with the Haversine
//! formula, rounded to 0.1 km, stably sorted ascending and truncated.
//! Coordinates are not validated here: callers drop candidates with
//! missing or out-of-range positions before ranking.

use crate::error::{RankError, Result};
use fogwatch_core::geo::GeoCoordinate;
use fogwatch_domain::route::RouteCheckpoint;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Anything with a position that can be ranked by distance
pub trait Positioned {
    fn position(&self) -> GeoCoordinate;
}

impl Positioned for GeoCoordinate {
    fn position(&self) -> GeoCoordinate {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> GeoCoordinate {
        (**self).position()
    }
}

impl Positioned for RouteCheckpoint {
    fn position(&self) -> GeoCoordinate {
        self.position
    }
}

/// A coordinate tagged with an optional label and an arbitrary payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint<T = ()> {
    pub label: Option<String>,
    #[serde(flatten)]
    pub position: GeoCoordinate,
    pub payload: T,
}

impl<T> LabeledPoint<T> {
    pub fn new(label: impl Into<String>, position: GeoCoordinate, payload: T) -> Self {
        Self {
            label: Some(label.into()),
            position,
            payload,
        }
    }
}

impl<T> Positioned for LabeledPoint<T> {
    fn position(&self) -> GeoCoordinate {
        self.position
    }
}

/// A candidate with its distance from the observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPoint<T> {
    #[serde(flatten)]
    pub item: T,
    /// Kilometers, rounded to 0.1
    pub distance_km: f64,
}

/// Ranks candidates by distance from one observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityRanker {
    observer: GeoCoordinate,
}

impl ProximityRanker {
    pub fn new(observer: GeoCoordinate) -> Self {
        Self { observer }
    }

    /// Nearest `limit` candidates, closest first
    ///
    /// Equal distances keep their input order.
    ///
    /// # Errors
    /// [`RankError::InvalidLimit`] when `limit` is zero.
    pub fn rank<T, I>(&self, candidates: I, limit: usize) -> Result<Vec<RankedPoint<T>>>
    where
        T: Positioned,
        I: IntoIterator<Item = T>,
    {
        if limit == 0 {
            return Err(RankError::InvalidLimit(limit));
        }

        let mut ranked: Vec<RankedPoint<T>> = candidates
            .into_iter()
            .map(|item| {
                let distance_km = self.observer.distance_km(&item.position());
                RankedPoint { item, distance_km }
            })
            .collect();

        let candidate_count = ranked.len();

        // sort_by is stable, coincident candidates keep input order
        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        ranked.truncate(limit);

        trace!(
            candidates = candidate_count,
            returned = ranked.len(),
            limit,
            "ranked candidates by distance"
        );

        Ok(ranked)
    }
}

/// Free-function form of [`ProximityRanker::rank`]
pub fn rank<T, I>(
    observer: GeoCoordinate,
    candidates: I,
    limit: usize,
) -> Result<Vec<RankedPoint<T>>>
where
    T: Positioned,
    I: IntoIterator<Item = T>,
{
    ProximityRanker::new(observer).rank(candidates, limit)
}
