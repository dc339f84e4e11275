#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::{Demand, Distance, DistanceMatrix, Location, SolverError};

/// Defines a Capacitated Vehicle Routing Problem instance. It is immutable once built.
#[derive(Clone, Debug)]
pub struct Problem {
    depot: Location,
    demands: Vec<Demand>,
    capacity: Demand,
    transport: DistanceMatrix,
}

impl Problem {
    /// Returns the depot location.
    pub fn depot(&self) -> Location {
        self.depot
    }

    /// Returns vehicle capacity.
    pub fn capacity(&self) -> Demand {
        self.capacity
    }

    /// Returns demand of given location, the depot has zero demand.
    pub fn demand(&self, location: Location) -> Demand {
        self.demands[location]
    }

    /// Returns total amount of locations, the depot included.
    pub fn size(&self) -> usize {
        self.demands.len()
    }

    /// Returns an iterator over all locations which have to be visited, in ascending order.
    pub fn customers(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.size()).filter(move |&location| location != self.depot)
    }

    /// Returns distance between two locations.
    #[inline]
    pub fn distance(&self, from: Location, to: Location) -> Distance {
        self.transport.distance(from, to)
    }

    /// Returns the distance model used by the problem.
    pub fn transport(&self) -> &DistanceMatrix {
        &self.transport
    }
}

/// Provides the way to build a [`Problem`] with validation of its definition.
#[derive(Default)]
pub struct ProblemBuilder {
    depot: Location,
    coordinates: Option<Vec<(f64, f64)>>,
    matrix: Option<Vec<Vec<Distance>>>,
    demands: Option<Vec<Demand>>,
    capacity: Option<Demand>,
    allow_zero_demand: bool,
}

impl ProblemBuilder {
    /// Sets depot location index, default is zero.
    pub fn with_depot(mut self, depot: Location) -> Self {
        self.depot = depot;
        self
    }

    /// Sets coordinates of all locations, the depot included. Euclidean distance is used.
    pub fn with_coordinates(mut self, coordinates: Vec<(f64, f64)>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Sets precomputed distance rows of all locations, the depot included.
    pub fn with_matrix(mut self, matrix: Vec<Vec<Distance>>) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Sets demands of all locations, the depot included.
    pub fn with_demands(mut self, demands: Vec<Demand>) -> Self {
        self.demands = Some(demands);
        self
    }

    /// Sets vehicle capacity.
    pub fn with_capacity(mut self, capacity: Demand) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Permits locations with zero demand.
    pub fn allow_zero_demand(mut self) -> Self {
        self.allow_zero_demand = true;
        self
    }

    /// Builds and validates the problem.
    pub fn build(self) -> Result<Problem, SolverError> {
        let transport = match (self.coordinates, self.matrix) {
            (Some(coordinates), None) => DistanceMatrix::from_coordinates(coordinates.as_slice())?,
            (None, Some(matrix)) => DistanceMatrix::from_rows(matrix)?,
            (Some(_), Some(_)) => return Err(invalid("both coordinates and distance matrix are specified")),
            (None, None) => return Err(invalid("neither coordinates nor distance matrix are specified")),
        };

        let size = transport.size();
        if size < 2 {
            return Err(invalid("no locations to visit"));
        }

        let depot = self.depot;
        if depot >= size {
            return Err(invalid(format!("depot {depot} is missing: there are only {size} locations").as_str()));
        }

        let demands = self.demands.ok_or_else(|| invalid("demands are not specified"))?;
        if demands.len() != size {
            return Err(invalid(format!("expected {size} demands, got {}", demands.len()).as_str()));
        }

        if demands[depot] != 0. {
            return Err(invalid("depot demand must be zero"));
        }

        if let Some((location, demand)) = demands
            .iter()
            .enumerate()
            .filter(|&(location, _)| location != depot)
            .find(|&(_, &demand)| !demand.is_finite() || demand < 0. || (demand == 0. && !self.allow_zero_demand))
        {
            return Err(invalid(format!("location {location} has invalid demand {demand}").as_str()));
        }

        let capacity = self.capacity.ok_or_else(|| invalid("vehicle capacity is not specified"))?;
        if !capacity.is_finite() || capacity <= 0. {
            return Err(invalid(format!("vehicle capacity must be positive, got {capacity}").as_str()));
        }

        Ok(Problem { depot, demands, capacity, transport })
    }
}

fn invalid(reason: &str) -> SolverError {
    SolverError::InvalidInstance(reason.to_string())
}
