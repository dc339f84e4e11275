//! Core crate contains the building blocks of an iterated local search metaheuristic for the
//! ***Capacitated Vehicle Routing Problem*** (CVRP).
//!
//! # Overview
//!
//! A problem consists of one depot, a set of locations with demands and a fleet of identical
//! vehicles with fixed capacity. The solver builds an initial feasible solution with nearest
//! insertion heuristic, improves it with a first improvement local search (2-opt, or-opt and
//! inter route swap) and escapes local optimums with double-bridge perturbation.
//!
//! # Example
//!
//! ```
//! use cvrp_core::prelude::*;
//!
//! let problem = ProblemBuilder::default()
//!     .with_coordinates(vec![(0., 0.), (1., 0.), (2., 0.), (3., 0.)])
//!     .with_demands(vec![0., 1., 1., 1.])
//!     .with_capacity(3.)
//!     .build()
//!     .expect("cannot build problem");
//!
//! let config = SolverConfig { max_iterations: Some(10), ..SolverConfig::default() };
//! let result = solve(&problem, &config).expect("cannot solve problem");
//!
//! assert_eq!(result.routes, vec![vec![1, 2, 3]]);
//! assert_eq!(result.total_distance, 6.);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/property_test.rs"]
mod property_test;

pub use ils_common;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
