//! Genetic-algorithm planner.
//!
//! Population-based stochastic search over whole assignment plans. Each
//! individual is a feasible [`PlanSolution`]; infeasible tuples are
//! filtered at construction time, so fitness is simply the total
//! assigned area and no repair or penalty term is needed.
//!
//! # Submodules
//!
//! - [`solution`]: solution type, problem view, and the genetic
//!   operators (random construction, crossover, mutation, tournament
//!   selection)
//! - engine: [`GaConfig`] and the generational loop
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

mod engine;
pub mod solution;

pub use engine::{GaConfig, GeneticPlanner};
pub use solution::{PlanProblem, PlanSolution};
