//! Plan (solution) models.
//!
//! An [`Assignment`] is the core binding a planner produces: one request
//! scheduled on one date inside one zone, worked by one team, drawing
//! capacity from one daily limit under one burnable forecast cell.
//! [`BurnPlan`] is the assembled, display-ready output grouped by date
//! with per-day and grand totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ForecastId, LimitId, RequestId, TeamId, ZoneId};

/// A fully-resolved scheduling decision for one burn request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Scheduled burn request.
    pub request_id: RequestId,
    /// Date the burn is scheduled on.
    pub date: NaiveDate,
    /// Zone the burn falls in.
    pub zone_id: ZoneId,
    /// Team working the burn.
    pub team_id: TeamId,
    /// Daily limit the burn draws capacity from.
    pub limit_id: LimitId,
    /// Burnable forecast cell covering the burn.
    pub weather_forecast_id: ForecastId,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        request_id: RequestId,
        date: NaiveDate,
        zone_id: ZoneId,
        team_id: TeamId,
        limit_id: LimitId,
        weather_forecast_id: ForecastId,
    ) -> Self {
        Self {
            request_id,
            date,
            zone_id,
            team_id,
            limit_id,
            weather_forecast_id,
        }
    }
}

/// An assignment enriched with display fields for plan output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedBurn {
    /// Scheduled burn request.
    pub request_id: RequestId,
    /// Display name of the burn area.
    pub area_name: Option<String>,
    /// Landholder name.
    pub owner_name: Option<String>,
    /// Assigned burn area in rai.
    pub area_rai: f64,
    /// Zone the burn falls in.
    pub zone_id: ZoneId,
    /// Zone display name.
    pub zone_name: String,
    /// Team working the burn.
    pub team_id: TeamId,
    /// Team display name.
    pub team_name: String,
    /// Daily limit the burn draws capacity from.
    pub limit_id: LimitId,
    /// Burnable forecast cell covering the burn.
    pub weather_forecast_id: ForecastId,
}

/// All burns scheduled on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// The date.
    pub date: NaiveDate,
    /// Burns scheduled on this date.
    pub assignments: Vec<PlannedBurn>,
}

/// Per-day rollup statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummary {
    /// The date.
    pub date: NaiveDate,
    /// Total assigned area in rai.
    pub total_area: f64,
    /// Number of scheduled requests.
    pub request_count: usize,
    /// Number of distinct teams working.
    pub team_count: usize,
}

/// The assembled burn plan for a date range.
///
/// Dates with no assignments are omitted from `plan` and `summary`.
/// An empty plan is a successful result; `message` and `missing_data`
/// then explain which prerequisite data was absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BurnPlan {
    /// Per-date assignments, chronologically ordered.
    pub plan: Vec<DayPlan>,
    /// Total assigned area in rai across the horizon.
    pub total_area: f64,
    /// Total number of scheduled requests.
    pub total_requests: usize,
    /// Per-day rollups, parallel to `plan`.
    pub summary: Vec<DaySummary>,
    /// Explanation when no plan could be produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Individual missing-prerequisite descriptions behind `message`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_data: Vec<String>,
}

impl BurnPlan {
    /// Creates an empty plan with no diagnostics.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the plan schedules nothing.
    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Iterates all scheduled burns across all dates.
    pub fn burns(&self) -> impl Iterator<Item = &PlannedBurn> {
        self.plan.iter().flat_map(|day| day.assignments.iter())
    }

    /// The day plan for a date, if any burns were scheduled there.
    pub fn day(&self, date: NaiveDate) -> Option<&DayPlan> {
        self.plan.iter().find(|d| d.date == date)
    }

    /// IDs of all scheduled requests.
    pub fn request_ids(&self) -> Vec<RequestId> {
        self.burns().map(|b| b.request_id).collect()
    }
}

impl DayPlan {
    /// Total assigned area on this date.
    pub fn total_area(&self) -> f64 {
        self.assignments.iter().map(|a| a.area_rai).sum()
    }

    /// Number of distinct teams working this date.
    pub fn team_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|a| a.team_id)
            .collect::<HashSet<_>>()
            .len()
    }
}
