#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_insertion_test.rs"]
mod nearest_insertion_test;

use super::check_feasibility;
use crate::models::solution::{Route, Solution};
use crate::models::{Distance, Location, Problem, SolverError};
use ils_common::utils::compare_floats;
use std::cmp::Ordering;

/// Builds an initial feasible solution with greedy nearest insertion.
///
/// The nearest location is the one with the smallest distance to any node of the route being
/// built, the depot included. Ties are broken by the lowest location index. The location is
/// inserted at the position with the minimal route length increase, ties favor the position
/// closer to the route end.
#[derive(Default)]
pub struct NearestInsertion {}

impl NearestInsertion {
    /// Constructs a solution which covers all locations of the problem.
    pub fn construct(&self, problem: &Problem) -> Result<Solution, SolverError> {
        check_feasibility(problem)?;

        let depot = problem.depot();
        let mut unassigned = problem.customers().collect::<Vec<_>>();
        let mut solution = Solution::default();

        while !unassigned.is_empty() {
            let route_idx = solution.open_route();
            let mut proximity =
                unassigned.iter().map(|&location| problem.distance(depot, location)).collect::<Vec<_>>();

            while let Some(idx) = select_nearest(problem, &solution, route_idx, unassigned.as_slice(), &proximity) {
                let location = unassigned.remove(idx);
                proximity.remove(idx);

                let position = find_cheapest_position(problem, &solution.routes()[route_idx], location);
                let is_inserted = solution.insert_location(problem, route_idx, position, location);
                debug_assert!(is_inserted);

                unassigned.iter().zip(proximity.iter_mut()).for_each(|(&other, distance)| {
                    *distance = distance.min(problem.distance(location, other));
                });
            }
        }

        solution.remove_empty_routes();

        Ok(solution)
    }
}

/// Returns an index of the nearest unassigned location which fits the route.
fn select_nearest(
    problem: &Problem,
    solution: &Solution,
    route_idx: usize,
    unassigned: &[Location],
    proximity: &[Distance],
) -> Option<usize> {
    unassigned
        .iter()
        .zip(proximity.iter())
        .enumerate()
        .filter(|(_, (location, _))| solution.can_load(problem, route_idx, problem.demand(**location)))
        .min_by(|(_, (a_location, a_distance)), (_, (b_location, b_distance))| {
            match compare_floats(**a_distance, **b_distance) {
                Ordering::Equal => a_location.cmp(b_location),
                order => order,
            }
        })
        .map(|(idx, _)| idx)
}

/// Returns a position with the minimal increase of route length.
fn find_cheapest_position(problem: &Problem, route: &Route, location: Location) -> usize {
    let depot = problem.depot();

    (0..=route.len())
        .map(|position| {
            let prev = route.before(position, depot);
            let next = route.at_or_depot(position, depot);
            let cost = problem.distance(prev, location) + problem.distance(location, next) - problem.distance(prev, next);

            (position, cost)
        })
        .fold((0, Distance::MAX), |best, (position, cost)| if cost <= best.1 { (position, cost) } else { best })
        .0
}
