//! Plan solutions and genetic operators.
//!
//! A solution is a list of feasible assignments plus its fitness (total
//! assigned rai — higher is better). Every operator threads an explicit
//! `Rng` so runs are reproducible under a pinned seed, and every shuffle
//! is a uniform Fisher–Yates permutation.
//!
//! Operators never emit an infeasible assignment: candidates pass the
//! same ledger admissibility gate the greedy planner uses, and a request
//! appears at most once per solution.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

use crate::index::FeasibilityIndex;
use crate::ledger::ResourceLedger;
use crate::models::{
    Assignment, BurnRequest, DailyBurnLimit, LimitId, RequestId, TeamId,
};
use crate::planner::PlanningInputs;

/// One individual: an assignment plan and its fitness.
#[derive(Debug, Clone)]
pub struct PlanSolution {
    /// Committed assignments (at most one per request).
    pub assignments: Vec<Assignment>,
    /// Total assigned area in rai (higher is better).
    pub fitness: f64,
}

impl PlanSolution {
    /// An empty solution with zero fitness.
    pub fn empty() -> Self {
        Self {
            assignments: Vec::new(),
            fitness: 0.0,
        }
    }
}

/// Read-only problem view shared by all genetic operators.
///
/// Flattens the planning inputs into the lookups the operators need, so
/// no operator touches the raw input records directly.
pub struct PlanProblem<'a> {
    index: &'a FeasibilityIndex,
    requests: Vec<&'a BurnRequest>,
    dates: Vec<NaiveDate>,
    limits_by_id: HashMap<LimitId, &'a DailyBurnLimit>,
    teams_by_date: HashMap<NaiveDate, Vec<TeamId>>,
    areas: HashMap<RequestId, f64>,
}

impl<'a> PlanProblem<'a> {
    /// Builds the problem view from inputs and a prebuilt index.
    pub fn new(inputs: &'a PlanningInputs, index: &'a FeasibilityIndex) -> Self {
        let requests = inputs.usable_requests();
        let dates = inputs.dates();
        let limits_by_id = inputs.limits.iter().map(|l| (l.id, l)).collect();
        let roster = inputs.roster();
        let teams_by_date = dates
            .iter()
            .map(|&d| (d, roster.teams_on(d).to_vec()))
            .collect();
        let areas = requests.iter().map(|r| (r.id, r.area_rai)).collect();

        Self {
            index,
            requests,
            dates,
            limits_by_id,
            teams_by_date,
            areas,
        }
    }

    /// Total area of an assignment list.
    pub fn fitness(&self, assignments: &[Assignment]) -> f64 {
        assignments
            .iter()
            .map(|a| self.areas.get(&a.request_id).copied().unwrap_or(0.0))
            .sum()
    }

    /// Wraps assignments into a scored solution.
    pub fn solution(&self, assignments: Vec<Assignment>) -> PlanSolution {
        let fitness = self.fitness(&assignments);
        PlanSolution {
            assignments,
            fitness,
        }
    }

    fn request(&self, id: RequestId) -> Option<&BurnRequest> {
        self.requests.iter().find(|r| r.id == id).copied()
    }

    fn teams_on(&self, date: NaiveDate) -> &[TeamId] {
        self.teams_by_date
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether an existing assignment passes the ledger gate as-is.
    fn readmits(&self, assignment: &Assignment, ledger: &ResourceLedger) -> bool {
        let Some(request) = self.request(assignment.request_id) else {
            return false;
        };
        let Some(limit) = self.limits_by_id.get(&assignment.limit_id) else {
            return false;
        };
        ledger.admits(
            self.index,
            request,
            assignment.date,
            assignment.zone_id,
            assignment.team_id,
            limit,
        )
    }

    /// Shuffle-and-try insertion: random dates, then random limit ×
    /// zone × team candidates, committing the first admissible tuple.
    fn try_assign<R: Rng>(
        &self,
        request: &BurnRequest,
        ledger: &mut ResourceLedger,
        rng: &mut R,
    ) -> Option<Assignment> {
        let mut dates = self.dates.clone();
        dates.shuffle(rng);

        for date in dates {
            let forecast_ids = self.index.weather_for(request.id, date);
            if forecast_ids.is_empty() {
                continue;
            }
            let zone_ids = self.index.zones_for(request.id);
            if zone_ids.is_empty() {
                continue;
            }
            let limit_ids = self.index.limits_for(request.id, date);
            if limit_ids.is_empty() {
                continue;
            }
            let teams = self.teams_on(date);
            if teams.is_empty() {
                continue;
            }

            let mut limit_ids = limit_ids.to_vec();
            limit_ids.shuffle(rng);
            let mut zone_ids = zone_ids.to_vec();
            zone_ids.shuffle(rng);
            let mut teams = teams.to_vec();
            teams.shuffle(rng);

            for limit_id in limit_ids {
                let Some(limit) = self.limits_by_id.get(&limit_id) else {
                    continue;
                };
                for &zone_id in &zone_ids {
                    for &team_id in &teams {
                        if ledger.admits(self.index, request, date, zone_id, team_id, limit) {
                            let assignment = Assignment::new(
                                request.id,
                                date,
                                zone_id,
                                team_id,
                                limit_id,
                                forecast_ids[0],
                            );
                            ledger.commit(&assignment, request.area_rai);
                            return Some(assignment);
                        }
                    }
                }
            }
        }

        None
    }
}

/// Builds a random feasible solution.
///
/// Requests are visited in random order; each is placed by
/// shuffle-and-try insertion. Unplaceable requests are skipped.
pub fn random_solution<R: Rng>(problem: &PlanProblem, rng: &mut R) -> PlanSolution {
    let mut order: Vec<&BurnRequest> = problem.requests.clone();
    order.shuffle(rng);

    let mut ledger = ResourceLedger::new();
    let mut assignments = Vec::new();
    for request in order {
        if let Some(assignment) = problem.try_assign(request, &mut ledger, rng) {
            assignments.push(assignment);
        }
    }

    problem.solution(assignments)
}

/// Recombines two parents.
///
/// With probability `crossover_rate`: merge both parents' assignments,
/// shuffle, and greedily re-admit each through a fresh ledger; a request
/// already re-admitted (or any inadmissible entry) is dropped.
/// Otherwise one parent is returned unchanged, chosen uniformly.
pub fn crossover<R: Rng>(
    parent1: &PlanSolution,
    parent2: &PlanSolution,
    problem: &PlanProblem,
    crossover_rate: f64,
    rng: &mut R,
) -> PlanSolution {
    if !rng.random_bool(crossover_rate) {
        return if rng.random_bool(0.5) {
            parent1.clone()
        } else {
            parent2.clone()
        };
    }

    let mut merged: Vec<Assignment> = parent1
        .assignments
        .iter()
        .chain(parent2.assignments.iter())
        .cloned()
        .collect();
    merged.shuffle(rng);

    let mut ledger = ResourceLedger::new();
    let mut seen: HashSet<RequestId> = HashSet::new();
    let mut child = Vec::new();

    for assignment in merged {
        if seen.contains(&assignment.request_id) {
            continue;
        }
        if problem.readmits(&assignment, &ledger) {
            let area = problem
                .areas
                .get(&assignment.request_id)
                .copied()
                .unwrap_or(0.0);
            ledger.commit(&assignment, area);
            seen.insert(assignment.request_id);
            child.push(assignment);
        }
    }

    problem.solution(child)
}

/// Mutates a solution.
///
/// With probability `mutation_rate`: keep each assignment independently
/// with probability 0.5 (rebuilding the ledger from the kept subset),
/// then attempt shuffle-and-try insertion for every request left
/// unassigned. Otherwise the solution is returned unchanged.
pub fn mutate<R: Rng>(
    solution: &PlanSolution,
    problem: &PlanProblem,
    mutation_rate: f64,
    rng: &mut R,
) -> PlanSolution {
    if !rng.random_bool(mutation_rate) {
        return solution.clone();
    }

    let mut ledger = ResourceLedger::new();
    let mut kept = Vec::new();
    for assignment in &solution.assignments {
        if rng.random_bool(0.5) {
            let area = problem
                .areas
                .get(&assignment.request_id)
                .copied()
                .unwrap_or(0.0);
            ledger.commit(assignment, area);
            kept.push(assignment.clone());
        }
    }

    let assigned: HashSet<RequestId> = kept.iter().map(|a| a.request_id).collect();
    let mut candidates: Vec<&BurnRequest> = problem
        .requests
        .iter()
        .filter(|r| !assigned.contains(&r.id))
        .copied()
        .collect();
    candidates.shuffle(rng);

    for request in candidates {
        if let Some(assignment) = problem.try_assign(request, &mut ledger, rng) {
            kept.push(assignment);
        }
    }

    problem.solution(kept)
}

/// Tournament selection: sample `size` individuals uniformly (with
/// replacement) and return the fittest.
pub fn tournament_select<'p, R: Rng>(
    population: &'p [PlanSolution],
    size: usize,
    rng: &mut R,
) -> &'p PlanSolution {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..size {
        let contender = &population[rng.random_range(0..population.len())];
        if contender.fitness > best.fitness {
            best = contender;
        }
    }
    best
}
