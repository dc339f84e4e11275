//! This module contains building blocks for constructive heuristics.
//!
//! # Insertion heuristic
//!
//! Insertion heuristic is a popular method to find quickly a **feasible** solution, but without a
//! guarantee of good quality. Here, it constructs the solution route by route: a new route is
//! opened at the depot and the nearest unassigned location which fits the remaining capacity is
//! inserted at its cheapest position until nothing fits anymore.
//!

use crate::models::{Problem, SolverError};

mod nearest_insertion;
pub use self::nearest_insertion::NearestInsertion;

/// Checks that every location can be served by a vehicle on its own.
pub fn check_feasibility(problem: &Problem) -> Result<(), SolverError> {
    problem.customers().find(|&location| problem.demand(location) > problem.capacity()).map_or(Ok(()), |location| {
        Err(SolverError::Infeasible { location, demand: problem.demand(location), capacity: problem.capacity() })
    })
}
