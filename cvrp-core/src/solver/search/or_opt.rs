#[cfg(test)]
#[path = "../../../tests/unit/solver/search/or_opt_test.rs"]
mod or_opt_test;

use super::*;
use crate::models::solution::Route;

/// Moves a segment of one to [`MAX_OR_OPT_SEGMENT`] consecutive locations to another position of
/// the same or a different route if total distance decreases and target route capacity holds.
/// The segment keeps its orientation.
pub fn find_or_opt_move(problem: &Problem, solution: &Solution, epsilon: f64) -> Option<Move> {
    let depot = problem.depot();
    let routes = solution.routes();

    routes.iter().enumerate().find_map(|(from_idx, from_route)| {
        let locations = from_route.locations();

        (1..=MAX_OR_OPT_SEGMENT.min(locations.len())).find_map(|len| {
            (0..=locations.len() - len).find_map(|start| {
                let segment = Segment { route: from_idx, start, len };
                let (first, last) = (locations[start], locations[start + len - 1]);
                let (prev, next) = (from_route.before(start, depot), from_route.after(start + len - 1, depot));

                let removal = problem.distance(prev, next) - problem.distance(prev, first) - problem.distance(last, next);
                let segment_load = from_route.segment_load(problem, start, len);

                routes.iter().enumerate().find_map(|(to_idx, to_route)| {
                    if to_idx != from_idx && to_route.load() + segment_load > problem.capacity() {
                        return None;
                    }

                    let positions = if to_idx == from_idx { to_route.len() - len } else { to_route.len() };

                    (0..=positions).filter(|&position| to_idx != from_idx || position != start).find_map(|position| {
                        let (prev, next) = if to_idx == from_idx {
                            insertion_neighbours(to_route, segment, position, depot)
                        } else {
                            (to_route.before(position, depot), to_route.at_or_depot(position, depot))
                        };

                        let insertion =
                            problem.distance(prev, first) + problem.distance(last, next) - problem.distance(prev, next);
                        let delta = removal + insertion;

                        is_improvement(delta, epsilon).then_some(Move::Relocate {
                            segment,
                            to_route: to_idx,
                            position,
                            delta,
                        })
                    })
                })
            })
        })
    })
}

/// Returns neighbours of an insertion position in the route with the segment removed.
fn insertion_neighbours(route: &Route, segment: Segment, position: usize, depot: usize) -> (usize, usize) {
    let reduced_len = route.len() - segment.len;
    let reduced = |idx: usize| {
        if idx < segment.start { route.locations()[idx] } else { route.locations()[idx + segment.len] }
    };

    let prev = if position == 0 { depot } else { reduced(position - 1) };
    let next = if position == reduced_len { depot } else { reduced(position) };

    (prev, next)
}
