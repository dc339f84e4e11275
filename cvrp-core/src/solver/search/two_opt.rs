#[cfg(test)]
#[path = "../../../tests/unit/solver/search/two_opt_test.rs"]
mod two_opt_test;

use super::*;

/// Implements a classical intra route 2-opt: reverses a route segment if it shortens the route.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
pub fn find_two_opt_move(problem: &Problem, solution: &Solution, epsilon: f64) -> Option<Move> {
    let depot = problem.depot();

    solution.routes().iter().enumerate().find_map(|(route_idx, route)| {
        let locations = route.locations();

        (0..locations.len()).find_map(|start| {
            let prev = route.before(start, depot);
            let first = locations[start];

            (start + 1..locations.len()).find_map(|end| {
                let last = locations[end];
                let next = route.after(end, depot);

                let delta = problem.distance(prev, last) + problem.distance(first, next)
                    - problem.distance(prev, first)
                    - problem.distance(last, next);

                is_improvement(delta, epsilon).then_some(Move::TwoOpt { route: route_idx, start, end, delta })
            })
        })
    })
}
