//! Single-pass greedy planner.
//!
//! # Algorithm
//!
//! 1. Sort usable requests by area descending (stable, so ties keep
//!    input order).
//! 2. Walk the horizon chronologically; skip any date with no limits,
//!    no burnable forecast cells, or no rostered teams.
//! 3. Clear consumed limit capacity at each date boundary. Team-zone
//!    bindings live for the whole run; the binding key includes the
//!    date, so this never affects a later date's admissibility.
//! 4. For each still-unassigned request, walk candidate limits × zones
//!    × teams in index/roster order and commit the first admissible
//!    tuple, recording the first intersecting burnable cell.
//!
//! Requests that fit nowhere stay unassigned — excluded from the plan,
//! not an error. Historically exposed as the "MIP" endpoint, but it is a
//! constructive heuristic, not an exact solver, and downstream consumers
//! expect its output.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::index::FeasibilityIndex;
use crate::ledger::ResourceLedger;
use crate::models::{Assignment, BurnRequest, RequestId};
use crate::planner::PlanningInputs;

/// Deterministic single-pass constructor.
///
/// Identical inputs always produce identical assignments.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner;

#[derive(Debug, Default)]
struct SkipCounts {
    no_weather: usize,
    no_zone: usize,
    no_limit: usize,
    no_team_or_capacity: usize,
}

impl GreedyPlanner {
    /// Creates the planner.
    pub fn new() -> Self {
        Self
    }

    /// Runs the greedy pass and returns the committed assignments.
    pub fn plan(&self, inputs: &PlanningInputs, index: &FeasibilityIndex) -> Vec<Assignment> {
        let dates = inputs.dates();
        let roster = inputs.roster();

        // Largest areas first; stable sort keeps input order on ties.
        let mut sorted: Vec<&BurnRequest> = inputs.usable_requests();
        sorted.sort_by(|a, b| {
            b.area_rai
                .partial_cmp(&a.area_rai)
                .unwrap_or(Ordering::Equal)
        });

        let mut ledger = ResourceLedger::new();
        let mut assigned: HashSet<RequestId> = HashSet::new();
        let mut assignments = Vec::new();

        for &date in &dates {
            let date_limits = inputs.limits_on(date);
            let forecasts = inputs.burnable_forecasts_on(date);
            let teams = roster.teams_on(date);

            if date_limits.is_empty() || forecasts.is_empty() || teams.is_empty() {
                tracing::debug!(
                    %date,
                    limits = date_limits.len(),
                    forecasts = forecasts.len(),
                    teams = teams.len(),
                    "date skipped"
                );
                continue;
            }

            // Limit capacity caps one date only.
            ledger.reset_daily_capacity();

            let mut committed = 0usize;
            let mut skips = SkipCounts::default();

            for request in &sorted {
                if assigned.contains(&request.id) {
                    continue;
                }

                let forecast_ids = index.weather_for(request.id, date);
                if forecast_ids.is_empty() {
                    skips.no_weather += 1;
                    continue;
                }
                let zone_ids = index.zones_for(request.id);
                if zone_ids.is_empty() {
                    skips.no_zone += 1;
                    continue;
                }
                let limit_ids = index.limits_for(request.id, date);
                if limit_ids.is_empty() {
                    skips.no_limit += 1;
                    continue;
                }

                let mut chosen: Option<Assignment> = None;
                'search: for &limit_id in limit_ids {
                    let Some(limit) = date_limits.iter().find(|l| l.id == limit_id) else {
                        continue;
                    };
                    for &zone_id in zone_ids {
                        for &team_id in teams {
                            if ledger.admits(index, request, date, zone_id, team_id, limit) {
                                chosen = Some(Assignment::new(
                                    request.id,
                                    date,
                                    zone_id,
                                    team_id,
                                    limit_id,
                                    forecast_ids[0],
                                ));
                                break 'search;
                            }
                        }
                    }
                }

                match chosen {
                    Some(assignment) => {
                        ledger.commit(&assignment, request.area_rai);
                        assigned.insert(request.id);
                        assignments.push(assignment);
                        committed += 1;
                    }
                    None => skips.no_team_or_capacity += 1,
                }
            }

            tracing::debug!(
                %date,
                committed,
                no_weather = skips.no_weather,
                no_zone = skips.no_zone,
                no_limit = skips.no_limit,
                no_team_or_capacity = skips.no_team_or_capacity,
                "date planned"
            );
        }

        assignments
    }
}
