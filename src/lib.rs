//! Open-burn scheduling engine.
//!
//! Assigns pending burn requests (polygonal land areas awaiting permission
//! to burn) to calendar dates, crew teams, and management zones over a
//! planning horizon, maximizing total assigned area under spatial,
//! capacity, weather, and crew-exclusivity constraints.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `BurnRequest`, `Zone`, `DailyBurnLimit`,
//!   `WeatherForecast`, `Team`, `TeamRoster`, `Assignment`, `BurnPlan`
//! - **`spatial`**: The [`SpatialPredicate`] seam to an external
//!   polygon-intersection oracle
//! - **`index`**: Per-request/per-date feasibility lookups built from
//!   spatial queries
//! - **`ledger`**: Per-solution resource bookkeeping (limit capacity,
//!   team-zone exclusivity) and the admissibility check
//! - **`planner`**: Input container, the greedy planner, and plan assembly
//! - **`ga`**: Genetic-algorithm planner (population search over
//!   assignment plans)
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   team references)
//!
//! # Architecture
//!
//! Geometry is never computed here: every polygon-overlap question is
//! delegated through [`SpatialPredicate`], and a failed query degrades to
//! "no intersection" for that pair alone. Both planners consume the same
//! [`FeasibilityIndex`] and the same [`ResourceLedger`] admissibility
//! contract; they differ only in search strategy. Planning is synchronous
//! and single-threaded per run, with no shared mutable state between runs.

pub mod ga;
pub mod index;
pub mod ledger;
pub mod models;
pub mod planner;
pub mod spatial;
pub mod validation;

pub use ga::{GaConfig, GeneticPlanner};
pub use index::FeasibilityIndex;
pub use ledger::ResourceLedger;
pub use planner::{plan_genetic, plan_greedy, GreedyPlanner, PlanningInputs};
pub use spatial::{PairwisePredicate, SpatialPredicate};

use chrono::NaiveDate;

/// Planning errors.
///
/// Only structurally invalid input is a hard failure; missing or
/// infeasible data degrades to an empty plan with diagnostics instead.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, PlanError>;
