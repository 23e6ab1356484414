//! Spatial predicate seam.
//!
//! All polygon-overlap questions are delegated to an external oracle
//! (typically a spatial database evaluating `ST_Intersects`). The engine
//! only needs a yes/no answer per boundary pair; query failures are
//! handled by the caller (degraded to "no intersection" during index
//! building, never fatal).

use std::collections::HashSet;

use crate::models::Boundary;

/// A failed spatial query.
#[derive(Debug, Clone, thiserror::Error)]
#[error("spatial query failed: {0}")]
pub struct SpatialError(pub String);

/// Polygon-overlap oracle.
///
/// Implementations wrap whatever actually evaluates geometry — a spatial
/// database, a geometry library, or precomputed results.
pub trait SpatialPredicate: Send + Sync {
    /// Whether two boundaries overlap.
    fn intersects(&self, a: &Boundary, b: &Boundary) -> Result<bool, SpatialError>;
}

/// In-memory predicate over a registry of known-intersecting pairs.
///
/// Useful when intersection results were precomputed upstream, and for
/// tests. Pairs are symmetric; unknown pairs do not intersect. A boundary
/// can be marked as failing to simulate oracle errors.
#[derive(Debug, Clone, Default)]
pub struct PairwisePredicate {
    pairs: HashSet<(String, String)>,
    failing: HashSet<String>,
}

impl PairwisePredicate {
    /// Creates an empty predicate (nothing intersects).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an intersecting pair (order-insensitive).
    pub fn with_pair(mut self, a: impl Into<Boundary>, b: impl Into<Boundary>) -> Self {
        self.pairs.insert(Self::key(&a.into(), &b.into()));
        self
    }

    /// Marks a boundary so that any query involving it returns an error.
    pub fn with_failure(mut self, boundary: impl Into<Boundary>) -> Self {
        self.failing.insert(boundary.into().wkt);
        self
    }

    fn key(a: &Boundary, b: &Boundary) -> (String, String) {
        if a.wkt <= b.wkt {
            (a.wkt.clone(), b.wkt.clone())
        } else {
            (b.wkt.clone(), a.wkt.clone())
        }
    }
}

impl SpatialPredicate for PairwisePredicate {
    fn intersects(&self, a: &Boundary, b: &Boundary) -> Result<bool, SpatialError> {
        if self.failing.contains(&a.wkt) || self.failing.contains(&b.wkt) {
            return Err(SpatialError(format!(
                "query unavailable for boundary pair ({}, {})",
                a.wkt, b.wkt
            )));
        }
        Ok(self.pairs.contains(&Self::key(a, b)))
    }
}
