//! Plan assembly and no-feasible-plan diagnostics.
//!
//! Both planners end here: a flat assignment list is grouped by date
//! (chronological, empty dates omitted), display names are attached, and
//! per-day plus grand totals are computed. When nothing was assigned the
//! assembler explains which prerequisite data was missing — an empty
//! plan is a successful result, never an error.

use std::collections::HashMap;
use std::fmt;

use crate::index::FeasibilityIndex;
use crate::models::{
    Assignment, BurnPlan, BurnRequest, DayPlan, DaySummary, PlannedBurn, RequestId,
};
use crate::planner::PlanningInputs;

/// A prerequisite the inputs were missing when the plan came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingData {
    /// No burn requests carrying usable geometry.
    NoUsableRequests,
    /// No management zones defined.
    NoZones,
    /// No daily burn limits inside the date range.
    NoLimitsInRange,
    /// No weather forecasts inside the date range.
    NoForecastsInRange,
    /// Forecasts exist but none are burnable.
    NoBurnableForecastsInRange,
    /// No schedulable team on any date in the range.
    NoAvailabilityInRange,
    /// No request boundary intersects any zone.
    NoZoneIntersections,
}

impl fmt::Display for MissingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoUsableRequests => "no burn requests with a usable boundary",
            Self::NoZones => "no management zones defined",
            Self::NoLimitsInRange => "no daily burn limits in the selected date range",
            Self::NoForecastsInRange => "no weather forecasts in the selected date range",
            Self::NoBurnableForecastsInRange => {
                "no burnable weather forecasts in the selected date range"
            }
            Self::NoAvailabilityInRange => {
                "no available active teams on any date in the selected range"
            }
            Self::NoZoneIntersections => "no burn request intersects any management zone",
        };
        f.write_str(text)
    }
}

/// Groups assignments into the final plan shape.
pub(crate) fn assemble(
    assignments: &[Assignment],
    inputs: &PlanningInputs,
    index: &FeasibilityIndex,
) -> BurnPlan {
    if assignments.is_empty() {
        return empty_plan_with_diagnostics(inputs, index);
    }

    let requests: HashMap<RequestId, &BurnRequest> =
        inputs.requests.iter().map(|r| (r.id, r)).collect();
    let zone_names: HashMap<_, _> = inputs
        .zones
        .iter()
        .map(|z| (z.id, z.name.as_str()))
        .collect();
    let team_names: HashMap<_, _> = inputs
        .teams
        .iter()
        .map(|t| (t.id, t.name.as_str()))
        .collect();

    let mut plan = Vec::new();
    for date in inputs.dates() {
        let day: Vec<PlannedBurn> = assignments
            .iter()
            .filter(|a| a.date == date)
            .map(|a| resolve(a, &requests, &zone_names, &team_names))
            .collect();
        if !day.is_empty() {
            plan.push(DayPlan {
                date,
                assignments: day,
            });
        }
    }

    let summary: Vec<DaySummary> = plan
        .iter()
        .map(|day| DaySummary {
            date: day.date,
            total_area: day.total_area(),
            request_count: day.assignments.len(),
            team_count: day.team_count(),
        })
        .collect();

    let total_area = summary.iter().map(|s| s.total_area).sum();
    let total_requests = summary.iter().map(|s| s.request_count).sum();

    BurnPlan {
        plan,
        total_area,
        total_requests,
        summary,
        message: None,
        missing_data: Vec::new(),
    }
}

fn resolve(
    assignment: &Assignment,
    requests: &HashMap<RequestId, &BurnRequest>,
    zone_names: &HashMap<u32, &str>,
    team_names: &HashMap<u32, &str>,
) -> PlannedBurn {
    let request = requests.get(&assignment.request_id);
    PlannedBurn {
        request_id: assignment.request_id,
        area_name: request.and_then(|r| r.area_name.clone()),
        owner_name: request.and_then(|r| r.owner_name.clone()),
        area_rai: request.map(|r| r.area_rai).unwrap_or(0.0),
        zone_id: assignment.zone_id,
        zone_name: zone_names
            .get(&assignment.zone_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("Zone {}", assignment.zone_id)),
        team_id: assignment.team_id,
        team_name: team_names
            .get(&assignment.team_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("Team {}", assignment.team_id)),
        limit_id: assignment.limit_id,
        weather_forecast_id: assignment.weather_forecast_id,
    }
}

/// Builds the empty plan, enumerating the prerequisites that were absent.
fn empty_plan_with_diagnostics(inputs: &PlanningInputs, index: &FeasibilityIndex) -> BurnPlan {
    let missing = diagnose(inputs, index);
    let message = if missing.is_empty() {
        "Unable to produce a plan: no feasible assignment exists for the selected date range."
            .to_string()
    } else {
        let items: Vec<String> = missing
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {m}", i + 1))
            .collect();
        format!("Unable to produce a plan because:\n{}", items.join("\n"))
    };

    BurnPlan {
        message: Some(message),
        missing_data: missing.iter().map(|m| m.to_string()).collect(),
        ..BurnPlan::empty()
    }
}

/// Checks each prerequisite in turn.
pub(crate) fn diagnose(inputs: &PlanningInputs, index: &FeasibilityIndex) -> Vec<MissingData> {
    let mut missing = Vec::new();

    let usable = inputs.usable_requests();
    if usable.is_empty() {
        missing.push(MissingData::NoUsableRequests);
    }
    if inputs.zones.is_empty() {
        missing.push(MissingData::NoZones);
    }
    if inputs.limits.is_empty() {
        missing.push(MissingData::NoLimitsInRange);
    }
    if inputs.forecasts.is_empty() {
        missing.push(MissingData::NoForecastsInRange);
    } else if !inputs.forecasts.iter().any(|f| f.is_burnable) {
        missing.push(MissingData::NoBurnableForecastsInRange);
    }

    let roster = inputs.roster();
    if roster.is_empty() || !inputs.dates().iter().any(|&d| roster.has_teams_on(d)) {
        missing.push(MissingData::NoAvailabilityInRange);
    }

    if !usable.is_empty() && !inputs.zones.is_empty() && !index.any_zone_match() {
        missing.push(MissingData::NoZoneIntersections);
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyBurnLimit, Team, TeamAvailability, WeatherForecast, Zone};
    use crate::spatial::PairwisePredicate;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn build_index(inputs: &PlanningInputs, predicate: &PairwisePredicate) -> FeasibilityIndex {
        FeasibilityIndex::build(inputs, predicate)
    }

    #[test]
    fn test_no_limits_diagnostic_names_limits() {
        let inputs = PlanningInputs::new(date(1), date(1))
            .with_requests(vec![BurnRequest::new(1, "R1", 10.0)])
            .with_zones(vec![Zone::new(1, "North", "Z1")])
            .with_forecasts(vec![WeatherForecast::new(1, "W1", date(1), true)])
            .with_teams(vec![Team::new(1, "Alpha")])
            .with_availability(vec![TeamAvailability::new(1, date(1), true)]);
        let predicate = PairwisePredicate::new().with_pair("R1", "Z1");
        let index = build_index(&inputs, &predicate);

        let plan = assemble(&[], &inputs, &index);
        assert!(plan.is_empty());
        let message = plan.message.unwrap();
        assert!(message.contains("no daily burn limits"));
        assert!(plan
            .missing_data
            .iter()
            .any(|m| m.contains("daily burn limits")));
    }

    #[test]
    fn test_diagnose_accumulates_everything_absent() {
        let inputs = PlanningInputs::new(date(1), date(1));
        let index = build_index(&inputs, &PairwisePredicate::new());
        let missing = diagnose(&inputs, &index);

        assert!(missing.contains(&MissingData::NoUsableRequests));
        assert!(missing.contains(&MissingData::NoZones));
        assert!(missing.contains(&MissingData::NoLimitsInRange));
        assert!(missing.contains(&MissingData::NoForecastsInRange));
        assert!(missing.contains(&MissingData::NoAvailabilityInRange));
        // Zone-intersection check only fires when requests and zones exist.
        assert!(!missing.contains(&MissingData::NoZoneIntersections));
    }

    #[test]
    fn test_diagnose_unburnable_weather() {
        let inputs = PlanningInputs::new(date(1), date(1))
            .with_forecasts(vec![WeatherForecast::new(1, "W1", date(1), false)]);
        let index = build_index(&inputs, &PairwisePredicate::new());
        let missing = diagnose(&inputs, &index);

        assert!(missing.contains(&MissingData::NoBurnableForecastsInRange));
        assert!(!missing.contains(&MissingData::NoForecastsInRange));
    }

    #[test]
    fn test_diagnose_zone_mismatch() {
        // Requests and zones exist but never touch.
        let inputs = PlanningInputs::new(date(1), date(1))
            .with_requests(vec![BurnRequest::new(1, "R1", 10.0)])
            .with_zones(vec![Zone::new(1, "North", "Z1")])
            .with_limits(vec![DailyBurnLimit::new(1, "L1", date(1), 50.0)])
            .with_forecasts(vec![WeatherForecast::new(1, "W1", date(1), true)])
            .with_teams(vec![Team::new(1, "Alpha")])
            .with_availability(vec![TeamAvailability::new(1, date(1), true)]);
        let index = build_index(&inputs, &PairwisePredicate::new());

        let missing = diagnose(&inputs, &index);
        assert_eq!(missing, vec![MissingData::NoZoneIntersections]);
    }

    #[test]
    fn test_all_prerequisites_present_gives_generic_message() {
        // Everything exists, the request just exceeds capacity.
        let inputs = PlanningInputs::new(date(1), date(1))
            .with_requests(vec![BurnRequest::new(1, "R1", 10.0)])
            .with_zones(vec![Zone::new(1, "North", "Z1")])
            .with_limits(vec![DailyBurnLimit::new(1, "L1", date(1), 5.0)])
            .with_forecasts(vec![WeatherForecast::new(1, "W1", date(1), true)])
            .with_teams(vec![Team::new(1, "Alpha")])
            .with_availability(vec![TeamAvailability::new(1, date(1), true)]);
        let predicate = PairwisePredicate::new()
            .with_pair("R1", "Z1")
            .with_pair("R1", "L1")
            .with_pair("R1", "W1");
        let index = build_index(&inputs, &predicate);

        let plan = assemble(&[], &inputs, &index);
        assert!(plan.missing_data.is_empty());
        assert!(plan.message.unwrap().contains("no feasible assignment"));
    }

    #[test]
    fn test_assembled_names_and_totals() {
        let inputs = PlanningInputs::new(date(1), date(2))
            .with_requests(vec![
                BurnRequest::new(1, "R1", 10.0).with_area_name("North field"),
                BurnRequest::new(2, "R2", 5.0),
            ])
            .with_zones(vec![Zone::new(1, "North", "Z1")])
            .with_teams(vec![Team::new(1, "Alpha"), Team::new(2, "Bravo")]);
        let index = FeasibilityIndex::default();

        let assignments = vec![
            Assignment::new(1, date(1), 1, 1, 1, 1),
            Assignment::new(2, date(2), 9, 2, 1, 1), // unknown zone id
        ];
        let plan = assemble(&assignments, &inputs, &index);

        assert_eq!(plan.plan.len(), 2);
        assert_eq!(plan.total_requests, 2);
        assert!((plan.total_area - 15.0).abs() < 1e-10);

        let first = &plan.plan[0].assignments[0];
        assert_eq!(first.zone_name, "North");
        assert_eq!(first.team_name, "Alpha");
        assert_eq!(first.area_name.as_deref(), Some("North field"));

        // Unknown zone falls back to a synthesized name.
        let second = &plan.plan[1].assignments[0];
        assert_eq!(second.zone_name, "Zone 9");

        assert_eq!(plan.summary.len(), 2);
        assert_eq!(plan.summary[0].request_count, 1);
        assert_eq!(plan.summary[0].team_count, 1);
    }
}
