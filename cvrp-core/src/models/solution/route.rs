#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::{Demand, Distance, Location, Problem};

/// An ordered sequence of locations visited by one vehicle. The depot is implicit at both ends.
/// Load and length are kept up to date by solution mutation primitives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    pub(super) locations: Vec<Location>,
    pub(super) load: Demand,
    pub(super) length: Distance,
}

impl Route {
    /// Creates a new route from given locations calculating its aggregates.
    pub fn new(problem: &Problem, locations: Vec<Location>) -> Self {
        let load = locations.iter().map(|&location| problem.demand(location)).sum();
        let length = calculate_length(problem, locations.as_slice());

        Self { locations, load, length }
    }

    /// Returns visited locations in order.
    pub fn locations(&self) -> &[Location] {
        self.locations.as_slice()
    }

    /// Returns a location at given position.
    pub fn get(&self, position: usize) -> Option<Location> {
        self.locations.get(position).copied()
    }

    /// Returns total demand of visited locations.
    pub fn load(&self) -> Demand {
        self.load
    }

    /// Returns total traveled distance, the depot legs included.
    pub fn length(&self) -> Distance {
        self.length
    }

    /// Returns amount of visited locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if route has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns a node visited right before given position, the depot for the first one.
    #[inline]
    pub fn before(&self, position: usize, depot: Location) -> Location {
        if position == 0 { depot } else { self.locations[position - 1] }
    }

    /// Returns a node visited right after given position, the depot for the last one.
    #[inline]
    pub fn after(&self, position: usize, depot: Location) -> Location {
        self.locations.get(position + 1).copied().unwrap_or(depot)
    }

    /// Returns a node at given position or the depot if position is past the last location.
    #[inline]
    pub fn at_or_depot(&self, position: usize, depot: Location) -> Location {
        self.locations.get(position).copied().unwrap_or(depot)
    }

    /// Returns total demand of a segment.
    pub fn segment_load(&self, problem: &Problem, start: usize, len: usize) -> Demand {
        self.locations[start..start + len].iter().map(|&location| problem.demand(location)).sum()
    }

    /// Returns distance of an edge which enters position `edge`: edge `0` leaves the depot,
    /// edge `len()` returns to the depot.
    #[inline]
    pub(super) fn edge(&self, problem: &Problem, edge: usize) -> Distance {
        let depot = problem.depot();
        problem.distance(self.before(edge, depot), self.at_or_depot(edge, depot))
    }

    /// Sums consecutive edges from `first` to `last` (both inclusive).
    pub(super) fn edge_range(&self, problem: &Problem, first: usize, last: usize) -> Distance {
        (first..=last).map(|edge| self.edge(problem, edge)).sum()
    }

    /// Sums given edges, counting each edge once.
    pub(super) fn edges(&self, problem: &Problem, edges: &[usize]) -> Distance {
        let mut edges = edges.to_vec();
        edges.sort_unstable();
        edges.dedup();

        edges.into_iter().map(|edge| self.edge(problem, edge)).sum()
    }
}

/// Calculates length of the route visiting given locations from scratch.
pub(crate) fn calculate_length(problem: &Problem, locations: &[Location]) -> Distance {
    let depot = problem.depot();

    match (locations.first(), locations.last()) {
        (Some(&first), Some(&last)) => {
            problem.distance(depot, first)
                + locations.windows(2).map(|pair| problem.distance(pair[0], pair[1])).sum::<Distance>()
                + problem.distance(last, depot)
        }
        _ => 0.,
    }
}
