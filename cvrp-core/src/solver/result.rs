#[cfg(test)]
#[path = "../../tests/unit/solver/result_test.rs"]
mod result_test;

use crate::models::solution::calculate_length;
use crate::models::{Demand, Distance, Location, Problem};
use serde::Serialize;
use std::sync::Arc;

/// Specifies how the solve has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SolveStatus {
    /// A time or iteration bound has been reached.
    Completed,
    /// Cooperative cancellation has been observed: the best known solution is returned.
    Cancelled,
}

/// A final result of the solve.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Routes as ordered location sequences without the depot.
    pub routes: Vec<Vec<Location>>,
    /// Total traveled distance.
    pub total_distance: Distance,
    /// Amount of completed perturbation cycles.
    pub iterations: usize,
    /// Solve duration in seconds.
    pub elapsed_seconds: f64,
    /// Finish status.
    pub status: SolveStatus,
}

/// Keeps details of a single route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Visited locations with the depot at both ends.
    pub sequence: Vec<Location>,
    /// Route distance.
    pub distance: Distance,
    /// Total demand collected by the route.
    pub load: Demand,
}

impl SolveResult {
    /// Returns amount of used vehicles.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns traversed arcs, the depot legs included.
    pub fn arcs(&self, depot: Location) -> Vec<(Location, Location)> {
        self.routes
            .iter()
            .flat_map(|route| {
                let sequence = std::iter::once(depot).chain(route.iter().copied()).chain(std::iter::once(depot));
                sequence.clone().zip(sequence.skip(1))
            })
            .collect()
    }

    /// Returns per route details.
    pub fn summaries(&self, problem: &Problem) -> Vec<RouteSummary> {
        let depot = problem.depot();

        self.routes
            .iter()
            .map(|route| RouteSummary {
                sequence: std::iter::once(depot).chain(route.iter().copied()).chain(std::iter::once(depot)).collect(),
                distance: calculate_length(problem, route.as_slice()),
                load: route.iter().map(|&location| problem.demand(location)).sum(),
            })
            .collect()
    }
}

/// A progress notification sent when a new best solution is found.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    /// An iteration when the solution has been found, zero for the initial one.
    pub iteration: usize,
    /// Total distance of the best known solution.
    pub best_distance: Distance,
    /// Amount of routes of the best known solution.
    pub routes: usize,
    /// Elapsed time in seconds.
    pub elapsed_seconds: f64,
}

/// A progress callback type.
pub type ProgressFn = Arc<dyn Fn(&Progress) + Send + Sync>;
