#[cfg(test)]
#[path = "../../tests/unit/termination/max_iterations_test.rs"]
mod max_iterations_test;

use super::*;

/// A termination criteria which is in terminated state when maximum amount of iterations is reached.
pub struct MaxIterations {
    limit: usize,
}

impl MaxIterations {
    /// Creates a new instance of `MaxIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIterations {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        statistics.iteration >= self.limit
    }

    fn estimate(&self, statistics: &HeuristicStatistics) -> f64 {
        if self.limit == 0 { 1. } else { (statistics.iteration as f64 / self.limit as f64).min(1.) }
    }
}
