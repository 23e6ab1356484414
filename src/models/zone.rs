//! Management zone model.

use serde::{Deserialize, Serialize};

use super::{Boundary, ZoneId};

/// An administrative management region.
///
/// A team operates within exactly one zone per day; requests are only
/// assignable inside zones their boundary intersects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Unique zone identifier.
    pub id: ZoneId,
    /// Human-readable zone name.
    pub name: String,
    /// Zone boundary polygon.
    pub boundary: Boundary,
}

impl Zone {
    /// Creates a new zone.
    pub fn new(id: ZoneId, name: impl Into<String>, boundary: impl Into<Boundary>) -> Self {
        Self {
            id,
            name: name.into(),
            boundary: boundary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_new() {
        let z = Zone::new(3, "Mae Rim", "POLYGON((0 0,2 0,2 2,0 0))");
        assert_eq!(z.id, 3);
        assert_eq!(z.name, "Mae Rim");
        assert!(!z.boundary.is_blank());
    }
}
