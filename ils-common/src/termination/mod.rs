//! The termination module contains logic which defines termination criteria for metaheuristic,
//! e.g. when to stop iterating in an iterated local search.

use crate::utils::{Timer, compare_floats};

mod max_iterations;
pub use self::max_iterations::MaxIterations;

mod max_time;
pub use self::max_time::MaxTime;

/// Keeps track of search progress used by termination criteria.
#[derive(Clone, Debug)]
pub struct HeuristicStatistics {
    /// Amount of completed perturbation cycles.
    pub iteration: usize,
    /// An iteration when the best known solution was improved last time.
    pub last_improvement: usize,
    /// A timer started together with the search.
    pub time: Timer,
}

impl HeuristicStatistics {
    /// Returns amount of iterations done since the last improvement.
    pub fn stagnation(&self) -> usize {
        self.iteration.saturating_sub(self.last_improvement)
    }
}

impl Default for HeuristicStatistics {
    fn default() -> Self {
        Self { iteration: 0, last_improvement: 0, time: Timer::start() }
    }
}

/// A trait which specifies criteria when metaheuristic should stop searching for improved solution.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, statistics: &HeuristicStatistics) -> f64;
}

/// A termination which encapsulates multiple termination criteria: the first one met wins.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        self.terminations.iter().any(|t| t.is_termination(statistics))
    }

    fn estimate(&self, statistics: &HeuristicStatistics) -> f64 {
        self.terminations.iter().map(|t| t.estimate(statistics)).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.)
    }
}
