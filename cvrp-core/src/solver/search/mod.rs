//! This module contains the local search engine and its neighborhoods.
//!
//! Each neighborhood is a pure function which scans the solution in a fixed order and returns
//! the first move improving total distance by more than epsilon. The engine applies that move
//! and restarts the scan from the first neighborhood until no neighborhood finds anything.

#[cfg(test)]
#[path = "../../../tests/unit/solver/search/local_search_test.rs"]
mod local_search_test;

use crate::models::solution::{Segment, Solution};
use crate::models::{Distance, Problem};
use ils_common::utils::Environment;

mod or_opt;
pub use self::or_opt::find_or_opt_move;

mod swap;
pub use self::swap::find_swap_move;

mod two_opt;
pub use self::two_opt::find_two_opt_move;

/// A maximum length of a segment moved by or-opt.
pub const MAX_OR_OPT_SEGMENT: usize = 3;

/// A neighborhood function: returns the first improving move or none.
pub type Neighborhood = fn(&Problem, &Solution, f64) -> Option<Move>;

/// Neighborhoods in priority order.
pub const NEIGHBORHOODS: [(&str, Neighborhood); 3] =
    [("2-opt", find_two_opt_move), ("or-opt", find_or_opt_move), ("swap", find_swap_move)];

/// A candidate mutation of the solution together with its total distance delta.
#[derive(Clone, Debug, PartialEq)]
pub enum Move {
    /// Reverses locations between `start` and `end` positions (inclusive) of one route.
    TwoOpt {
        /// A route index.
        route: usize,
        /// A first reversed position.
        start: usize,
        /// A last reversed position.
        end: usize,
        /// A distance delta.
        delta: Distance,
    },
    /// Moves a segment to another position of the same or a different route.
    Relocate {
        /// A moved segment.
        segment: Segment,
        /// A target route index.
        to_route: usize,
        /// A target position, for the same route it is relative to the route without the segment.
        position: usize,
        /// A distance delta.
        delta: Distance,
    },
    /// Exchanges two locations of different routes.
    Swap {
        /// A route and a position of the first location.
        first: (usize, usize),
        /// A route and a position of the second location.
        second: (usize, usize),
        /// A distance delta.
        delta: Distance,
    },
}

impl Move {
    /// Returns total distance delta produced by the move.
    pub fn delta(&self) -> Distance {
        match self {
            Self::TwoOpt { delta, .. } | Self::Relocate { delta, .. } | Self::Swap { delta, .. } => *delta,
        }
    }

    /// Applies the move to the solution. Returns false if the solution rejected it.
    pub fn apply(&self, problem: &Problem, solution: &mut Solution) -> bool {
        let is_applied = match *self {
            Self::TwoOpt { route, start, end, .. } => {
                solution.reverse_segment(problem, route, start, end);
                true
            }
            Self::Relocate { segment, to_route, position, .. } => {
                solution.relocate_segment(problem, segment, to_route, position)
            }
            Self::Swap { first, second, .. } => solution.swap_locations(problem, first, second),
        };

        solution.remove_empty_routes();

        is_applied
    }
}

/// Keeps information about a single local search descent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalSearchStatistics {
    /// Amount of applied moves per neighborhood, in the neighborhood order.
    pub moves: [usize; NEIGHBORHOODS.len()],
    /// True if the descent stopped in a local optimum.
    pub is_local_optimum: bool,
    /// True if the descent stopped because of the quota.
    pub is_interrupted: bool,
}

impl LocalSearchStatistics {
    /// Returns total amount of applied moves.
    pub fn total_moves(&self) -> usize {
        self.moves.iter().sum()
    }
}

/// A first improvement local search over fixed ordered neighborhoods.
pub struct LocalSearch {
    epsilon: f64,
    max_moves: Option<usize>,
}

impl LocalSearch {
    /// Creates a new instance of `LocalSearch`.
    pub fn new(epsilon: f64, max_moves: Option<usize>) -> Self {
        Self { epsilon, max_moves }
    }

    /// Improves the solution in place until a local optimum is reached, move budget is
    /// exhausted or environment quota is reached. The quota is checked before each new scan.
    pub fn improve(&self, problem: &Problem, solution: &mut Solution, environment: &Environment) -> LocalSearchStatistics {
        let mut statistics = LocalSearchStatistics::default();

        loop {
            if environment.is_quota_reached() {
                statistics.is_interrupted = true;
                break;
            }

            if self.max_moves.is_some_and(|max_moves| statistics.total_moves() >= max_moves) {
                break;
            }

            let improvement = NEIGHBORHOODS
                .iter()
                .enumerate()
                .find_map(|(idx, (_, neighborhood))| neighborhood(problem, solution, self.epsilon).map(|mv| (idx, mv)));

            match improvement {
                Some((idx, mv)) if mv.apply(problem, solution) => statistics.moves[idx] += 1,
                Some(_) => break,
                None => {
                    statistics.is_local_optimum = true;
                    break;
                }
            }
        }

        statistics
    }
}

/// Returns true if delta is an improvement beyond epsilon.
#[inline]
fn is_improvement(delta: Distance, epsilon: f64) -> bool {
    delta < -epsilon
}
