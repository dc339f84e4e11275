use crate::models::Problem;
use crate::models::solution::Solution;
use crate::solver::{SolveResult, SolverConfig};
use ils_common::prelude::*;

/// Creates a configuration bounded by iterations only.
pub fn create_config(max_iterations: usize, seed: u64) -> SolverConfig {
    SolverConfig { max_iterations: Some(max_iterations), random_seed: seed, ..SolverConfig::default() }
}

/// Creates a silent environment with seeded random generator and no quota.
pub fn create_environment(seed: u64) -> Environment {
    Environment::new_with_seed(seed).silent()
}

/// Checks that the result covers every location exactly once within capacity.
pub fn assert_feasible_result(problem: &Problem, result: &SolveResult) {
    let solution = Solution::new(problem, result.routes.clone());

    solution.validate(problem).unwrap_or_else(|err| panic!("result is not feasible: {err}: {:?}", result.routes));
    assert_close!(solution.total_distance(), result.total_distance);
}
