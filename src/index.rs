//! Spatial feasibility index.
//!
//! Precomputes, once per optimization run, which zones, daily limits, and
//! burnable weather cells each burn request's boundary intersects, per
//! date. Both planners consume these lookups; no spatial query runs after
//! the index is built.
//!
//! # Failure model
//!
//! Every oracle query is independent. A query that errors is logged and
//! treated as "no intersection" for that single pair — the affected
//! request/date simply becomes infeasible, the run continues.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{Boundary, ForecastId, LimitId, RequestId, ZoneId};
use crate::planner::PlanningInputs;
use crate::spatial::SpatialPredicate;

/// Per-request spatial feasibility lookups.
///
/// Zone intersections are date-independent; limit and weather
/// intersections are keyed by (request, date). Candidate id lists
/// preserve input record order.
#[derive(Debug, Clone, Default)]
pub struct FeasibilityIndex {
    request_zones: HashMap<RequestId, Vec<ZoneId>>,
    request_limits: HashMap<(RequestId, NaiveDate), Vec<LimitId>>,
    request_weather: HashMap<(RequestId, NaiveDate), Vec<ForecastId>>,
}

impl FeasibilityIndex {
    /// Builds the index for all usable requests over the planning dates.
    pub fn build(inputs: &PlanningInputs, predicate: &dyn SpatialPredicate) -> Self {
        let dates = inputs.dates();
        let mut index = Self::default();

        let mut zone_hits = 0usize;
        for request in inputs.usable_requests() {
            let mut zone_ids = Vec::new();
            for zone in &inputs.zones {
                if query(predicate, &request.boundary, &zone.boundary) {
                    zone_ids.push(zone.id);
                }
            }
            zone_hits += zone_ids.len();
            index.request_zones.insert(request.id, zone_ids);
        }
        tracing::debug!(zone_hits, "zone intersections indexed");

        let mut limit_hits = 0usize;
        for request in inputs.usable_requests() {
            for &date in &dates {
                let mut limit_ids = Vec::new();
                for limit in inputs.limits_on(date) {
                    if query(predicate, &request.boundary, &limit.boundary) {
                        limit_ids.push(limit.id);
                    }
                }
                limit_hits += limit_ids.len();
                index.request_limits.insert((request.id, date), limit_ids);
            }
        }
        tracing::debug!(limit_hits, "daily-limit intersections indexed");

        let mut weather_hits = 0usize;
        for request in inputs.usable_requests() {
            for &date in &dates {
                let mut forecast_ids = Vec::new();
                for forecast in inputs.burnable_forecasts_on(date) {
                    if query(predicate, &request.boundary, &forecast.boundary) {
                        forecast_ids.push(forecast.id);
                    }
                }
                weather_hits += forecast_ids.len();
                index.request_weather.insert((request.id, date), forecast_ids);
            }
        }
        tracing::debug!(weather_hits, "burnable-weather intersections indexed");

        index
    }

    /// Zones a request's boundary intersects (date-independent).
    pub fn zones_for(&self, request_id: RequestId) -> &[ZoneId] {
        self.request_zones
            .get(&request_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Daily limits on `date` intersecting the request.
    pub fn limits_for(&self, request_id: RequestId, date: NaiveDate) -> &[LimitId] {
        self.request_limits
            .get(&(request_id, date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Burnable forecast cells on `date` intersecting the request.
    pub fn weather_for(&self, request_id: RequestId, date: NaiveDate) -> &[ForecastId] {
        self.request_weather
            .get(&(request_id, date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether at least one indexed request intersects some zone.
    ///
    /// Used by the no-feasible-plan diagnostics.
    pub fn any_zone_match(&self) -> bool {
        self.request_zones.values().any(|zones| !zones.is_empty())
    }
}

/// Runs one oracle query, degrading an error to "no intersection".
fn query(predicate: &dyn SpatialPredicate, a: &Boundary, b: &Boundary) -> bool {
    match predicate.intersects(a, b) {
        Ok(hit) => hit,
        Err(err) => {
            tracing::warn!(%err, "spatial query failed; pair treated as non-intersecting");
            false
        }
    }
}
