#[cfg(test)]
#[path = "../../tests/unit/termination/max_time_test.rs"]
mod max_time_test;

use super::*;

/// A termination criteria which is in terminated state when max time elapsed.
/// Time is measured by the statistics timer, so the limit counts from the search start.
pub struct MaxTime {
    limit_in_secs: f64,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        statistics.time.elapsed_secs_as_f64() >= self.limit_in_secs
    }

    fn estimate(&self, statistics: &HeuristicStatistics) -> f64 {
        (statistics.time.elapsed_secs_as_f64() / self.limit_in_secs).min(1.)
    }
}
