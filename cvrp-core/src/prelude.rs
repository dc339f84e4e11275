//! This module reimports a common used types.

pub use crate::models::{Demand, Distance, Location};
pub use crate::models::{DistanceMatrix, Problem, ProblemBuilder, SolverError};
pub use crate::models::solution::{Route, Solution};

pub use crate::solver::{AcceptancePolicy, SolverConfig};
pub use crate::solver::{Progress, ProgressFn, RouteSummary, SolveResult, SolveStatus};
pub use crate::solver::{Solver, solve, solve_ensemble};

pub use ils_common::prelude::{Environment, GenericError, GenericResult, InfoLogger, Random};
