//! Per-solution resource bookkeeping.
//!
//! Tracks how much of each daily limit's capacity a candidate solution
//! has consumed and which zone each team is bound to per date. Every
//! candidate solution is built against its own fresh ledger; nothing is
//! shared between solutions or between runs.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::index::FeasibilityIndex;
use crate::models::{Assignment, BurnRequest, DailyBurnLimit, LimitId, TeamId, ZoneId};

/// Mutable state of one candidate solution under construction.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    area_used_by_limit: HashMap<LimitId, f64>,
    team_zone_by_date: HashMap<(NaiveDate, TeamId), ZoneId>,
}

impl ResourceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all state (new candidate solution).
    pub fn reset(&mut self) {
        self.area_used_by_limit.clear();
        self.team_zone_by_date.clear();
    }

    /// Clears only consumed capacity, keeping team-zone bindings.
    ///
    /// The greedy planner calls this at each date boundary: limits cap a
    /// single date, while the team-zone map lives for the whole run.
    pub fn reset_daily_capacity(&mut self) {
        self.area_used_by_limit.clear();
    }

    /// Capacity already consumed from a limit.
    pub fn used(&self, limit_id: LimitId) -> f64 {
        self.area_used_by_limit.get(&limit_id).copied().unwrap_or(0.0)
    }

    /// The zone a team is bound to on a date, if any.
    pub fn team_zone(&self, date: NaiveDate, team_id: TeamId) -> Option<ZoneId> {
        self.team_zone_by_date.get(&(date, team_id)).copied()
    }

    /// Whether a (request, date, zone, team, limit) tuple is admissible.
    ///
    /// Three gates, in order:
    /// 1. weather — at least one burnable cell intersects the request on
    ///    that date;
    /// 2. capacity — the limit has room for the request's area;
    /// 3. exclusivity — the team is unbound on that date, or already
    ///    bound to the candidate zone.
    ///
    /// Spatial zone/limit membership is NOT re-checked here; candidate
    /// sets are enumerated from the index before this gate runs.
    pub fn admits(
        &self,
        index: &FeasibilityIndex,
        request: &BurnRequest,
        date: NaiveDate,
        zone_id: ZoneId,
        team_id: TeamId,
        limit: &DailyBurnLimit,
    ) -> bool {
        if index.weather_for(request.id, date).is_empty() {
            return false;
        }

        if self.used(limit.id) + request.area_rai > limit.max_area_rai {
            return false;
        }

        match self.team_zone(date, team_id) {
            None => true,
            Some(bound) => bound == zone_id,
        }
    }

    /// Records a committed assignment.
    pub fn commit(&mut self, assignment: &Assignment, area_rai: f64) {
        *self
            .area_used_by_limit
            .entry(assignment.limit_id)
            .or_insert(0.0) += area_rai;
        self.team_zone_by_date
            .insert((assignment.date, assignment.team_id), assignment.zone_id);
    }
}
