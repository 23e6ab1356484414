//! Daily burn limit model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Boundary, LimitId};

/// A capacity cap on total burned area within a polygon on one date.
///
/// Several limits may cover different sub-areas of the same date; a
/// request/date pair may intersect zero or more of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBurnLimit {
    /// Unique limit identifier.
    pub id: LimitId,
    /// Limit boundary polygon.
    pub boundary: Boundary,
    /// The date this cap applies to.
    pub limit_on_date: NaiveDate,
    /// Maximum total assignable area in rai.
    pub max_area_rai: f64,
}

impl DailyBurnLimit {
    /// Creates a new daily burn limit.
    pub fn new(
        id: LimitId,
        boundary: impl Into<Boundary>,
        limit_on_date: NaiveDate,
        max_area_rai: f64,
    ) -> Self {
        Self {
            id,
            boundary: boundary.into(),
            limit_on_date,
            max_area_rai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_new() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let l = DailyBurnLimit::new(5, "POLYGON((0 0,9 0,9 9,0 0))", d, 100.0);
        assert_eq!(l.id, 5);
        assert_eq!(l.limit_on_date, d);
        assert!((l.max_area_rai - 100.0).abs() < 1e-10);
    }
}
