//! Opaque geometry handle.
//!
//! The engine never parses or computes geometry — polygon text is carried
//! verbatim and handed to the external [`SpatialPredicate`] for every
//! overlap question.
//!
//! [`SpatialPredicate`]: crate::spatial::SpatialPredicate

use serde::{Deserialize, Serialize};

/// A polygon boundary in WKT form.
///
/// Treated as an opaque token by the engine; only the spatial oracle
/// interprets it. A blank boundary marks the owning record as unusable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boundary {
    /// Well-known-text representation, e.g. `POLYGON((...))`.
    pub wkt: String,
}

impl Boundary {
    /// Creates a boundary from WKT text.
    pub fn new(wkt: impl Into<String>) -> Self {
        Self { wkt: wkt.into() }
    }

    /// Whether the boundary carries any geometry text at all.
    ///
    /// Records with blank boundaries are filtered out before planning.
    pub fn is_blank(&self) -> bool {
        self.wkt.trim().is_empty()
    }

    /// The raw WKT text.
    pub fn as_str(&self) -> &str {
        &self.wkt
    }
}

impl From<&str> for Boundary {
    fn from(wkt: &str) -> Self {
        Self::new(wkt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(Boundary::new("").is_blank());
        assert!(Boundary::new("   ").is_blank());
        assert!(!Boundary::new("POLYGON((0 0,1 0,1 1,0 0))").is_blank());
    }

    #[test]
    fn test_from_str() {
        let b: Boundary = "POLYGON((0 0,1 0,1 1,0 0))".into();
        assert_eq!(b.as_str(), "POLYGON((0 0,1 0,1 1,0 0))");
    }
}
