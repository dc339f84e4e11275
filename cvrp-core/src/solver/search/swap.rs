#[cfg(test)]
#[path = "../../../tests/unit/solver/search/swap_test.rs"]
mod swap_test;

use super::*;
use crate::models::Location;
use crate::models::solution::Route;

/// Exchanges single locations between two routes if both stay within capacity and total
/// distance decreases.
pub fn find_swap_move(problem: &Problem, solution: &Solution, epsilon: f64) -> Option<Move> {
    let routes = solution.routes();
    let capacity = problem.capacity();

    (0..routes.len()).find_map(|first_idx| {
        let first_route = &routes[first_idx];

        (first_idx + 1..routes.len()).find_map(|second_idx| {
            let second_route = &routes[second_idx];

            (0..first_route.len()).find_map(|i| {
                let first_demand = problem.demand(first_route.locations()[i]);

                (0..second_route.len()).find_map(|j| {
                    let second_demand = problem.demand(second_route.locations()[j]);

                    let is_feasible = first_route.load() + (second_demand - first_demand) <= capacity
                        && second_route.load() + (first_demand - second_demand) <= capacity;
                    if !is_feasible {
                        return None;
                    }

                    let delta = replacement_delta(problem, first_route, i, second_route.locations()[j])
                        + replacement_delta(problem, second_route, j, first_route.locations()[i]);

                    is_improvement(delta, epsilon).then_some(Move::Swap {
                        first: (first_idx, i),
                        second: (second_idx, j),
                        delta,
                    })
                })
            })
        })
    })
}

/// Returns route length change when a location at given position is replaced by another one.
fn replacement_delta(problem: &Problem, route: &Route, position: usize, location: Location) -> Distance {
    let depot = problem.depot();
    let prev = route.before(position, depot);
    let next = route.after(position, depot);
    let current = route.locations()[position];

    problem.distance(prev, location) + problem.distance(location, next)
        - problem.distance(prev, current)
        - problem.distance(current, next)
}
