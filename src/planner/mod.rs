//! Planning inputs and plan entry points.
//!
//! [`PlanningInputs`] bundles everything one optimization run consumes:
//! the entity records and the inclusive date range. [`plan_greedy`] and
//! [`plan_genetic`] are the two front doors — both validate the range,
//! build the feasibility index once, run their planner, and assemble the
//! result through the same code path.

mod assemble;
mod greedy;

pub use assemble::MissingData;
pub use greedy::GreedyPlanner;

use chrono::NaiveDate;

use crate::ga::{GaConfig, GeneticPlanner};
use crate::index::FeasibilityIndex;
use crate::models::{
    BurnPlan, BurnRequest, DailyBurnLimit, LimitId, Team, TeamAvailability, TeamRoster,
    WeatherForecast, Zone,
};
use crate::spatial::SpatialPredicate;
use crate::{PlanError, Result};

/// Everything one optimization run consumes.
///
/// Entity records are loaded read-only; the date range is inclusive on
/// both ends.
#[derive(Debug, Clone)]
pub struct PlanningInputs {
    /// Pending burn requests.
    pub requests: Vec<BurnRequest>,
    /// Management zones.
    pub zones: Vec<Zone>,
    /// Daily burn limits within the range.
    pub limits: Vec<DailyBurnLimit>,
    /// Weather forecast cells within the range.
    pub forecasts: Vec<WeatherForecast>,
    /// Crew teams.
    pub teams: Vec<Team>,
    /// Per-date team availability records within the range.
    pub availability: Vec<TeamAvailability>,
    /// First planning date (inclusive).
    pub start_date: NaiveDate,
    /// Last planning date (inclusive).
    pub end_date: NaiveDate,
}

impl PlanningInputs {
    /// Creates an empty input set over a date range.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            requests: Vec::new(),
            zones: Vec::new(),
            limits: Vec::new(),
            forecasts: Vec::new(),
            teams: Vec::new(),
            availability: Vec::new(),
            start_date,
            end_date,
        }
    }

    /// Sets the burn requests.
    pub fn with_requests(mut self, requests: Vec<BurnRequest>) -> Self {
        self.requests = requests;
        self
    }

    /// Sets the zones.
    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    /// Sets the daily burn limits.
    pub fn with_limits(mut self, limits: Vec<DailyBurnLimit>) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the weather forecasts.
    pub fn with_forecasts(mut self, forecasts: Vec<WeatherForecast>) -> Self {
        self.forecasts = forecasts;
        self
    }

    /// Sets the teams.
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    /// Sets the availability records.
    pub fn with_availability(mut self, availability: Vec<TeamAvailability>) -> Self {
        self.availability = availability;
        self
    }

    /// Rejects an inverted date range.
    pub fn validate_range(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(PlanError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// All dates in the range, inclusive, in chronological order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .collect()
    }

    /// Requests carrying usable geometry, in input order.
    pub fn usable_requests(&self) -> Vec<&BurnRequest> {
        self.requests.iter().filter(|r| r.is_usable()).collect()
    }

    /// Limits applying to a date, in input order.
    pub fn limits_on(&self, date: NaiveDate) -> Vec<&DailyBurnLimit> {
        self.limits
            .iter()
            .filter(|l| l.limit_on_date == date)
            .collect()
    }

    /// A limit record by id.
    pub fn limit_by_id(&self, id: LimitId) -> Option<&DailyBurnLimit> {
        self.limits.iter().find(|l| l.id == id)
    }

    /// Burnable forecast cells on a date, in input order.
    pub fn burnable_forecasts_on(&self, date: NaiveDate) -> Vec<&WeatherForecast> {
        self.forecasts
            .iter()
            .filter(|f| f.forecast_date == date && f.is_burnable)
            .collect()
    }

    /// Roster of schedulable teams per date.
    pub fn roster(&self) -> TeamRoster {
        TeamRoster::build(&self.teams, &self.availability)
    }
}

/// Produces a burn plan with the deterministic greedy planner.
///
/// Validates the date range, builds the feasibility index, runs the
/// single-pass constructor, and assembles the grouped plan. Identical
/// inputs always yield an identical plan.
pub fn plan_greedy(
    inputs: &PlanningInputs,
    predicate: &dyn SpatialPredicate,
) -> Result<BurnPlan> {
    inputs.validate_range()?;
    tracing::info!(
        requests = inputs.requests.len(),
        zones = inputs.zones.len(),
        limits = inputs.limits.len(),
        forecasts = inputs.forecasts.len(),
        "greedy planning started"
    );

    let index = FeasibilityIndex::build(inputs, predicate);
    let assignments = GreedyPlanner::new().plan(inputs, &index);
    let plan = assemble::assemble(&assignments, inputs, &index);

    tracing::info!(
        days = plan.plan.len(),
        total_requests = plan.total_requests,
        total_area = plan.total_area,
        "greedy planning finished"
    );
    Ok(plan)
}

/// Produces a burn plan with the genetic-algorithm planner.
///
/// Same pipeline as [`plan_greedy`] with the population search in the
/// middle. Stochastic unless `config.seed` is pinned.
pub fn plan_genetic(
    inputs: &PlanningInputs,
    predicate: &dyn SpatialPredicate,
    config: &GaConfig,
) -> Result<BurnPlan> {
    inputs.validate_range()?;
    tracing::info!(
        requests = inputs.requests.len(),
        population = config.population_size,
        generations = config.max_generations,
        "genetic planning started"
    );

    let index = FeasibilityIndex::build(inputs, predicate);
    let best = GeneticPlanner::new(config.clone()).plan(inputs, &index);
    let plan = assemble::assemble(&best.assignments, inputs, &index);

    tracing::info!(
        days = plan.plan.len(),
        total_requests = plan.total_requests,
        total_area = plan.total_area,
        "genetic planning finished"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::PairwisePredicate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_dates_inclusive() {
        let inputs = PlanningInputs::new(date(1), date(3));
        assert_eq!(inputs.dates(), vec![date(1), date(2), date(3)]);

        let single = PlanningInputs::new(date(5), date(5));
        assert_eq!(single.dates(), vec![date(5)]);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let inputs = PlanningInputs::new(date(3), date(1));
        assert!(inputs.validate_range().is_err());

        let err = plan_greedy(&inputs, &PairwisePredicate::new()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_usable_requests_filter() {
        let inputs = PlanningInputs::new(date(1), date(1)).with_requests(vec![
            BurnRequest::new(1, "R1", 10.0),
            BurnRequest::new(2, " ", 5.0),
        ]);
        let usable = inputs.usable_requests();
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].id, 1);
    }

    #[test]
    fn test_plan_genetic_end_to_end() {
        let inputs = PlanningInputs::new(date(1), date(1))
            .with_requests(vec![BurnRequest::new(1, "R1", 10.0)])
            .with_zones(vec![Zone::new(1, "North", "Z1")])
            .with_limits(vec![DailyBurnLimit::new(1, "L1", date(1), 10.0)])
            .with_forecasts(vec![WeatherForecast::new(1, "W1", date(1), true)])
            .with_teams(vec![Team::new(1, "Alpha")])
            .with_availability(vec![TeamAvailability::new(1, date(1), true)]);
        let predicate = PairwisePredicate::new()
            .with_pair("R1", "Z1")
            .with_pair("R1", "L1")
            .with_pair("R1", "W1");
        let config = GaConfig::default()
            .with_population_size(5)
            .with_max_generations(3)
            .with_seed(42);

        let plan = plan_genetic(&inputs, &predicate, &config).unwrap();
        assert_eq!(plan.total_requests, 1);
        assert!((plan.total_area - 10.0).abs() < 1e-10);
        assert_eq!(plan.day(date(1)).unwrap().assignments[0].team_name, "Alpha");
    }

    #[test]
    fn test_limits_and_forecasts_by_date() {
        let inputs = PlanningInputs::new(date(1), date(2))
            .with_limits(vec![
                DailyBurnLimit::new(1, "L1", date(1), 50.0),
                DailyBurnLimit::new(2, "L2", date(2), 50.0),
            ])
            .with_forecasts(vec![
                WeatherForecast::new(1, "W1", date(1), true),
                WeatherForecast::new(2, "W2", date(1), false),
            ]);

        assert_eq!(inputs.limits_on(date(1)).len(), 1);
        assert_eq!(inputs.limit_by_id(2).unwrap().id, 2);
        assert_eq!(inputs.burnable_forecasts_on(date(1)).len(), 1);
        assert!(inputs.burnable_forecasts_on(date(2)).is_empty());
    }
}
