#[cfg(test)]
#[path = "../../tests/unit/solver/perturbation_test.rs"]
mod perturbation_test;

use crate::models::Problem;
use crate::models::solution::{Segment, Solution};
use ils_common::utils::Random;

/// A minimum route size for intra route double-bridge.
const MIN_INTRA_ROUTE_SIZE: usize = 4;

/// Specifies which kind of kick was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kick {
    /// Segments of two different routes were exchanged.
    InterRoute,
    /// Two adjacent segments of one route were exchanged.
    IntraRoute,
    /// No route is large enough to be kicked.
    Unchanged,
}

/// A double-bridge perturbation: four cut points split routes into segments which are
/// reconnected in a different order. It cannot be undone by a single 2-opt move.
pub struct DoubleBridge {
    kicks: usize,
}

impl DoubleBridge {
    /// Creates a new instance of `DoubleBridge` which applies given amount of kicks.
    pub fn new(kicks: usize) -> Self {
        Self { kicks }
    }

    /// Perturbs the solution in place and returns the applied kicks.
    pub fn perturb(&self, problem: &Problem, solution: &mut Solution, random: &dyn Random) -> Vec<Kick> {
        (0..self.kicks).map(|_| kick(problem, solution, random)).collect()
    }
}

fn kick(problem: &Problem, solution: &mut Solution, random: &dyn Random) -> Kick {
    if solution.routes().len() > 1 {
        let (first, second) = select_route_pair(solution, random);
        let first = select_segment(solution, first, random);
        let second = select_segment(solution, second, random);

        if solution.swap_segments(problem, first, second) {
            return Kick::InterRoute;
        }
    }

    intra_route_kick(problem, solution, random)
}

/// Exchanges segments B and C of a route `A B C D`, the prefix A is never empty.
fn intra_route_kick(problem: &Problem, solution: &mut Solution, random: &dyn Random) -> Kick {
    let candidates = solution
        .routes()
        .iter()
        .enumerate()
        .filter(|(_, route)| route.len() >= MIN_INTRA_ROUTE_SIZE)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    if candidates.is_empty() {
        return Kick::Unchanged;
    }

    let route_idx = candidates[uniform_index(random, candidates.len())];
    let size = solution.routes()[route_idx].len() as i32;

    // B and C together hold at least three locations, otherwise A C B D is a single reversal
    let first_cut = random.uniform_int(1, size - 3);
    let second_cut = random.uniform_int(first_cut + 1, size - 1);
    let min_third_cut = if second_cut - first_cut == 1 { second_cut + 2 } else { second_cut + 1 };
    let third_cut = random.uniform_int(min_third_cut, size);

    let first = Segment { route: route_idx, start: first_cut as usize, len: (second_cut - first_cut) as usize };
    let second = Segment { route: route_idx, start: second_cut as usize, len: (third_cut - second_cut) as usize };

    let is_swapped = solution.swap_segments(problem, first, second);
    debug_assert!(is_swapped);

    Kick::IntraRoute
}

fn select_route_pair(solution: &Solution, random: &dyn Random) -> (usize, usize) {
    let total = solution.routes().len();
    let first = uniform_index(random, total);
    let second = (first + 1 + uniform_index(random, total - 1)) % total;

    (first, second)
}

fn select_segment(solution: &Solution, route_idx: usize, random: &dyn Random) -> Segment {
    let size = solution.routes()[route_idx].len();
    let start = uniform_index(random, size);
    let len = 1 + uniform_index(random, size - start);

    Segment { route: route_idx, start, len }
}

fn uniform_index(random: &dyn Random, size: usize) -> usize {
    random.uniform_int(0, size as i32 - 1) as usize
}
