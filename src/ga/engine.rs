//! GA configuration and generational loop.
//!
//! Fixed-length evolution: initialize a random population, then for each
//! generation carry the single best individual over unchanged and fill
//! the rest with tournament-selected, recombined, mutated children.
//! There is no convergence-based early exit; runtime is governed by the
//! generation count alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

use super::solution::{
    crossover, mutate, random_solution, tournament_select, PlanProblem, PlanSolution,
};
use crate::index::FeasibilityIndex;
use crate::planner::PlanningInputs;

/// Genetic-algorithm parameters.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub max_generations: usize,
    /// Probability a child is mutated.
    pub mutation_rate: f64,
    /// Probability two parents are recombined (vs. cloned through).
    pub crossover_rate: f64,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size.max(1);
        self
    }

    /// Pins the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Population-based stochastic planner.
#[derive(Debug, Clone, Default)]
pub struct GeneticPlanner {
    config: GaConfig,
}

impl GeneticPlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    /// Evolves a plan and returns the best individual found.
    pub fn plan(&self, inputs: &PlanningInputs, index: &FeasibilityIndex) -> PlanSolution {
        let problem = PlanProblem::new(inputs, index);
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.evolve(&problem, &mut rng)
    }

    fn evolve<R: Rng>(&self, problem: &PlanProblem, rng: &mut R) -> PlanSolution {
        let size = self.config.population_size.max(1);

        let mut population: Vec<PlanSolution> =
            (0..size).map(|_| random_solution(problem, rng)).collect();
        sort_by_fitness(&mut population);

        for generation in 0..self.config.max_generations {
            population = next_generation(problem, &population, &self.config, rng);

            if generation % 10 == 0 {
                tracing::debug!(
                    generation,
                    best_fitness = population[0].fitness,
                    "generation evolved"
                );
            }
        }

        population.swap_remove(0)
    }
}

/// Produces one new generation: elite carry-over plus bred children.
fn next_generation<R: Rng>(
    problem: &PlanProblem,
    population: &[PlanSolution],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<PlanSolution> {
    let size = config.population_size.max(1);
    let mut next = Vec::with_capacity(size);

    // Elitism: the best individual survives untouched.
    next.push(population[0].clone());

    while next.len() < size {
        let parent1 = tournament_select(population, config.tournament_size, rng);
        let parent2 = tournament_select(population, config.tournament_size, rng);
        let child = crossover(parent1, parent2, problem, config.crossover_rate, rng);
        let child = mutate(&child, problem, config.mutation_rate, rng);
        next.push(child);
    }

    sort_by_fitness(&mut next);
    next
}

fn sort_by_fitness(population: &mut [PlanSolution]) {
    population.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BurnRequest, DailyBurnLimit, Team, TeamAvailability, WeatherForecast, Zone,
    };
    use crate::spatial::PairwisePredicate;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn fixture() -> (PlanningInputs, PairwisePredicate) {
        let inputs = PlanningInputs::new(date(1), date(2))
            .with_requests(vec![
                BurnRequest::new(1, "R1", 10.0),
                BurnRequest::new(2, "R2", 8.0),
                BurnRequest::new(3, "R3", 6.0),
                BurnRequest::new(4, "R4", 4.0),
            ])
            .with_zones(vec![Zone::new(1, "North", "Z1")])
            .with_limits(vec![
                DailyBurnLimit::new(1, "L1", date(1), 14.0),
                DailyBurnLimit::new(2, "L2", date(2), 14.0),
            ])
            .with_forecasts(vec![
                WeatherForecast::new(1, "W1", date(1), true),
                WeatherForecast::new(2, "W2", date(2), true),
            ])
            .with_teams(vec![Team::new(1, "Alpha"), Team::new(2, "Bravo")])
            .with_availability(vec![
                TeamAvailability::new(1, date(1), true),
                TeamAvailability::new(2, date(1), true),
                TeamAvailability::new(1, date(2), true),
                TeamAvailability::new(2, date(2), true),
            ]);

        let mut predicate = PairwisePredicate::new();
        for r in ["R1", "R2", "R3", "R4"] {
            predicate = predicate
                .with_pair(r, "Z1")
                .with_pair(r, "L1")
                .with_pair(r, "L2")
                .with_pair(r, "W1")
                .with_pair(r, "W2");
        }
        (inputs, predicate)
    }

    #[test]
    fn test_config_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_mutation_rate(0.3)
            .with_crossover_rate(0.9)
            .with_tournament_size(5)
            .with_seed(42);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_elitism_never_regresses() {
        let (inputs, predicate) = fixture();
        let index = FeasibilityIndex::build(&inputs, &predicate);
        let problem = PlanProblem::new(&inputs, &index);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_tournament_size(3);
        let mut rng = SmallRng::seed_from_u64(42);

        let mut population: Vec<PlanSolution> =
            (0..10).map(|_| random_solution(&problem, &mut rng)).collect();
        sort_by_fitness(&mut population);

        let mut best = population[0].fitness;
        for _ in 0..30 {
            population = next_generation(&problem, &population, &config, &mut rng);
            assert!(population[0].fitness >= best - 1e-9);
            best = population[0].fitness;
        }
    }

    #[test]
    fn test_seeded_run_reproducible() {
        let (inputs, predicate) = fixture();
        let index = FeasibilityIndex::build(&inputs, &predicate);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(15)
            .with_seed(42);
        let planner = GeneticPlanner::new(config);

        let a = planner.plan(&inputs, &index);
        let b = planner.plan(&inputs, &index);
        assert_eq!(a.assignments, b.assignments);
        assert!((a.fitness - b.fitness).abs() < 1e-10);
    }

    #[test]
    fn test_plan_respects_solution_invariants() {
        let (inputs, predicate) = fixture();
        let index = FeasibilityIndex::build(&inputs, &predicate);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(20)
            .with_seed(7);
        let best = GeneticPlanner::new(config).plan(&inputs, &index);

        // One assignment per request.
        let mut ids: Vec<_> = best.assignments.iter().map(|a| a.request_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), best.assignments.len());

        // Capacity per limit.
        for limit_id in [1u32, 2] {
            let used: f64 = best
                .assignments
                .iter()
                .filter(|a| a.limit_id == limit_id)
                .map(|a| {
                    inputs
                        .requests
                        .iter()
                        .find(|r| r.id == a.request_id)
                        .unwrap()
                        .area_rai
                })
                .sum();
            assert!(used <= 14.0 + 1e-9);
        }
    }

    #[test]
    fn test_search_finds_a_good_plan() {
        // Best packing: day1 10+4, day2 8+6 → 28 rai total. The search
        // should get close to it with a modest budget.
        let (inputs, predicate) = fixture();
        let index = FeasibilityIndex::build(&inputs, &predicate);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(40)
            .with_seed(3);
        let best = GeneticPlanner::new(config).plan(&inputs, &index);

        assert!(best.fitness >= 24.0, "fitness was {}", best.fitness);
    }

    #[test]
    fn test_empty_inputs_yield_empty_solution() {
        let inputs = PlanningInputs::new(date(1), date(1));
        let index = FeasibilityIndex::build(&inputs, &PairwisePredicate::new());
        let config = GaConfig::default()
            .with_population_size(5)
            .with_max_generations(3)
            .with_seed(1);
        let best = GeneticPlanner::new(config).plan(&inputs, &index);

        assert!(best.assignments.is_empty());
        assert!((best.fitness - 0.0).abs() < 1e-10);
    }
}
