//! Weather forecast cell model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Boundary, ForecastId};

/// A polygon/date forecast cell indicating whether burning is permitted.
///
/// A request can only be scheduled on a date if at least one burnable
/// cell intersects its boundary on that date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// Unique forecast cell identifier.
    pub id: ForecastId,
    /// Forecast cell boundary polygon.
    pub boundary: Boundary,
    /// The date this forecast applies to.
    pub forecast_date: NaiveDate,
    /// Whether burning is permitted inside this cell on that date.
    pub is_burnable: bool,
}

impl WeatherForecast {
    /// Creates a new forecast cell.
    pub fn new(
        id: ForecastId,
        boundary: impl Into<Boundary>,
        forecast_date: NaiveDate,
        is_burnable: bool,
    ) -> Self {
        Self {
            id,
            boundary: boundary.into(),
            forecast_date,
            is_burnable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_new() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let f = WeatherForecast::new(11, "POLYGON((0 0,5 0,5 5,0 0))", d, true);
        assert_eq!(f.id, 11);
        assert_eq!(f.forecast_date, d);
        assert!(f.is_burnable);
    }
}
