use crate::models::{Demand, Location};
use ils_common::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies reasons why solving cannot be started.
/// All of them are detected before any search work is done.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// Problem definition is malformed.
    InvalidInstance(String),

    /// A single location cannot be served by any vehicle.
    Infeasible {
        /// A location which demand exceeds the capacity.
        location: Location,
        /// A demand of the location.
        demand: Demand,
        /// A vehicle capacity.
        capacity: Demand,
    },

    /// Solver configuration is malformed.
    InvalidConfig(String),

    /// A location index is outside of the distance matrix.
    IndexOutOfRange {
        /// A requested index.
        index: usize,
        /// A matrix size.
        size: usize,
    },
}

impl Display for SolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInstance(reason) => write!(f, "invalid instance: {reason}"),
            Self::Infeasible { location, demand, capacity } => {
                write!(f, "infeasible: location {location} has demand {demand} which exceeds vehicle capacity {capacity}")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::IndexOutOfRange { index, size } => write!(f, "index {index} is out of range [0, {size})"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<SolverError> for GenericError {
    fn from(value: SolverError) -> Self {
        GenericError::from(value.to_string())
    }
}
