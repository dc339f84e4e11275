//! A collection of models to represent problem and solution in the Capacitated Vehicle Routing Problem domain.

/// Specifies location type: an index in the distance matrix, the depot included.
pub type Location = usize;

/// Specifies distance type.
pub type Distance = f64;

/// Specifies demand (and capacity) type.
pub type Demand = f64;

mod error;
pub use self::error::SolverError;

mod matrix;
pub use self::matrix::DistanceMatrix;

mod problem;
pub use self::problem::{Problem, ProblemBuilder};

pub mod solution;
