//! Solution representation and its mutation primitives.

#[cfg(test)]
#[path = "../../../tests/unit/models/solution/solution_test.rs"]
mod solution_test;

use crate::models::{Demand, Distance, Location, Problem};
use ils_common::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;

mod route;
pub use self::route::Route;
pub(crate) use self::route::calculate_length;

const VALIDATION_TOLERANCE: f64 = 1E-6;
const LOAD_TOLERANCE: f64 = 1E-9;

/// A consecutive part of a route: `len` locations starting at position `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// A route index.
    pub route: usize,
    /// A first position.
    pub start: usize,
    /// Amount of locations.
    pub len: usize,
}

/// A set of routes with total distance. It is the only mutable aggregate the solver works on:
/// mutation primitives keep route aggregates and total distance up to date incrementally and
/// reject a mutation before applying it when capacity would be violated.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    routes: Vec<Route>,
    total_distance: Distance,
}

impl Solution {
    /// Creates a new solution from given location sequences.
    pub fn new(problem: &Problem, routes: Vec<Vec<Location>>) -> Self {
        let routes = routes.into_iter().map(|locations| Route::new(problem, locations)).collect::<Vec<_>>();
        let total_distance = routes.iter().map(|route| route.length).sum();

        Self { routes, total_distance }
    }

    /// Returns routes.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Returns a route by its index.
    pub fn route(&self, route_idx: usize) -> Option<&Route> {
        self.routes.get(route_idx)
    }

    /// Returns total distance of all routes.
    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Returns amount of non-empty routes.
    pub fn route_count(&self) -> usize {
        self.routes.iter().filter(|route| !route.is_empty()).count()
    }

    /// Returns routes as location sequences.
    pub fn to_routes(&self) -> Vec<Vec<Location>> {
        self.routes.iter().filter(|route| !route.is_empty()).map(|route| route.locations.clone()).collect()
    }

    /// Returns true if given demand can be added to the route without capacity violation.
    pub fn can_load(&self, problem: &Problem, route_idx: usize, demand: Demand) -> bool {
        self.routes[route_idx].load + demand <= problem.capacity()
    }

    /// Adds an empty route and returns its index.
    pub fn open_route(&mut self) -> usize {
        self.routes.push(Route::default());
        self.routes.len() - 1
    }

    /// Removes routes without locations.
    pub fn remove_empty_routes(&mut self) {
        self.routes.retain(|route| !route.is_empty());
    }

    /// Removes location at given position and returns it.
    pub fn remove_location(&mut self, problem: &Problem, route_idx: usize, position: usize) -> Location {
        let segment = Segment { route: route_idx, start: position, len: 1 };
        let removed = self.take_segment(problem, segment);

        removed[0]
    }

    /// Inserts location at given position. Returns false and leaves solution untouched if
    /// the route capacity would be exceeded.
    pub fn insert_location(&mut self, problem: &Problem, route_idx: usize, position: usize, location: Location) -> bool {
        if !self.can_load(problem, route_idx, problem.demand(location)) {
            return false;
        }

        self.put_segment(problem, route_idx, position, vec![location]);

        true
    }

    /// Reverses locations between `start` and `end` positions (both inclusive).
    pub fn reverse_segment(&mut self, problem: &Problem, route_idx: usize, start: usize, end: usize) {
        debug_assert!(start <= end);

        let route = &mut self.routes[route_idx];
        let old = route.edges(problem, &[start, end + 1]);
        route.locations[start..=end].reverse();
        let delta = route.edges(problem, &[start, end + 1]) - old;

        route.length += delta;
        self.total_distance += delta;
    }

    /// Moves a segment to another position. When the target route is the source route,
    /// `position` refers to the route with the segment already removed. Segment orientation
    /// is preserved. Returns false and leaves solution untouched on capacity violation.
    pub fn relocate_segment(&mut self, problem: &Problem, segment: Segment, to_route: usize, position: usize) -> bool {
        if segment.route != to_route {
            let load = self.routes[segment.route].segment_load(problem, segment.start, segment.len);
            if !self.can_load(problem, to_route, load) {
                return false;
            }
        }

        let locations = self.take_segment(problem, segment);
        self.put_segment(problem, to_route, position, locations);

        true
    }

    /// Exchanges two locations, see [`Solution::swap_segments`].
    pub fn swap_locations(&mut self, problem: &Problem, first: (usize, usize), second: (usize, usize)) -> bool {
        self.swap_segments(
            problem,
            Segment { route: first.0, start: first.1, len: 1 },
            Segment { route: second.0, start: second.1, len: 1 },
        )
    }

    /// Exchanges two non-overlapping non-empty segments keeping their orientation. Segments can
    /// belong to the same route or to different ones. Returns false and leaves solution untouched
    /// if any of routes would exceed capacity or segments overlap.
    pub fn swap_segments(&mut self, problem: &Problem, first: Segment, second: Segment) -> bool {
        if first.len == 0 || second.len == 0 {
            return false;
        }

        if first.route == second.route {
            let (first, second) = if first.start <= second.start { (first, second) } else { (second, first) };
            if first.start + first.len > second.start {
                return false;
            }

            self.swap_intra_route(problem, first, second);
            return true;
        }

        let first_load = self.routes[first.route].segment_load(problem, first.start, first.len);
        let second_load = self.routes[second.route].segment_load(problem, second.start, second.len);

        if !self.can_load(problem, first.route, second_load - first_load)
            || !self.can_load(problem, second.route, first_load - second_load)
        {
            return false;
        }

        let first_locations = self.routes[first.route].locations[first.start..first.start + first.len].to_vec();
        let second_locations = self.routes[second.route].locations[second.start..second.start + second.len].to_vec();

        self.replace_segment(problem, first, second_locations, second_load - first_load);
        self.replace_segment(problem, second, first_locations, first_load - second_load);

        true
    }

    /// Recalculates all aggregates from scratch, eliminating accumulated floating point drift.
    pub fn recalculate(&mut self, problem: &Problem) {
        self.routes.iter_mut().for_each(|route| *route = Route::new(problem, std::mem::take(&mut route.locations)));
        self.total_distance = self.routes.iter().map(|route| route.length).sum();
    }

    /// Checks feasibility: every location is visited exactly once, capacity is respected and
    /// aggregates are consistent with route content.
    pub fn validate(&self, problem: &Problem) -> GenericResult<()> {
        let mut visits = FxHashMap::<Location, usize>::default();

        for (route_idx, route) in self.routes.iter().enumerate() {
            if let Some(&location) = route.locations.iter().find(|&&location| location >= problem.size()) {
                return Err(format!("route {route_idx} has unknown location {location}").into());
            }

            if route.locations.contains(&problem.depot()) {
                return Err(format!("route {route_idx} visits the depot in the middle").into());
            }

            let expected = Route::new(problem, route.locations.clone());
            if expected.load - problem.capacity() > LOAD_TOLERANCE {
                return Err(format!(
                    "route {route_idx} has load {} which exceeds capacity {}",
                    expected.load,
                    problem.capacity()
                )
                .into());
            }

            if !is_close(expected.load, route.load) || !is_close(expected.length, route.length) {
                return Err(format!("route {route_idx} has inconsistent aggregates").into());
            }

            route.locations.iter().for_each(|&location| *visits.entry(location).or_insert(0) += 1);
        }

        let errors = problem
            .customers()
            .filter_map(|location| match visits.get(&location).copied().unwrap_or(0) {
                1 => None,
                count => Some(GenericError::from(format!("location {location} is visited {count} times"))),
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(GenericError::join_many(errors.as_slice(), ", "));
        }

        let expected_total = self.routes.iter().map(|route| route.length).sum::<Distance>();
        if !is_close(expected_total, self.total_distance) {
            return Err(format!("total distance {} differs from sum of routes {expected_total}", self.total_distance).into());
        }

        Ok(())
    }

    fn take_segment(&mut self, problem: &Problem, segment: Segment) -> Vec<Location> {
        let Segment { route: route_idx, start, len } = segment;
        let route = &mut self.routes[route_idx];

        let old = route.edge_range(problem, start, start + len);
        let locations = route.locations.drain(start..start + len).collect::<Vec<_>>();
        let delta = route.edge(problem, start) - old;

        route.load -= locations.iter().map(|&location| problem.demand(location)).sum::<Demand>();
        route.length += delta;
        self.total_distance += delta;

        locations
    }

    fn put_segment(&mut self, problem: &Problem, route_idx: usize, position: usize, locations: Vec<Location>) {
        let route = &mut self.routes[route_idx];
        let len = locations.len();

        let old = route.edge(problem, position);
        route.load += locations.iter().map(|&location| problem.demand(location)).sum::<Demand>();
        route.locations.splice(position..position, locations);
        let delta = route.edge_range(problem, position, position + len) - old;

        route.length += delta;
        self.total_distance += delta;
    }

    fn replace_segment(&mut self, problem: &Problem, segment: Segment, locations: Vec<Location>, load_delta: Demand) {
        let Segment { route: route_idx, start, len } = segment;
        let route = &mut self.routes[route_idx];
        let new_len = locations.len();

        let old = route.edge_range(problem, start, start + len);
        route.locations.splice(start..start + len, locations);
        let delta = route.edge_range(problem, start, start + new_len) - old;

        route.load += load_delta;
        route.length += delta;
        self.total_distance += delta;
    }

    fn swap_intra_route(&mut self, problem: &Problem, first: Segment, second: Segment) {
        let route = &mut self.routes[first.route];
        let (a, la) = (first.start, first.len);
        let (b, lb) = (second.start, second.len);
        let middle = b - (a + la);

        let old = route.edges(problem, &[a, a + la, b, b + lb]);

        let mut reordered = Vec::with_capacity(la + middle + lb);
        reordered.extend_from_slice(&route.locations[b..b + lb]);
        reordered.extend_from_slice(&route.locations[a + la..b]);
        reordered.extend_from_slice(&route.locations[a..a + la]);
        route.locations.splice(a..b + lb, reordered);

        let delta = route.edges(problem, &[a, a + lb, a + lb + middle, b + lb]) - old;

        route.length += delta;
        self.total_distance += delta;
    }
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= VALIDATION_TOLERANCE * a.abs().max(b.abs()).max(1.)
}
