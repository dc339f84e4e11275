#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::{Distance, Location, SolverError};

const SYMMETRY_TOLERANCE: f64 = 1E-9;

/// A precomputed square matrix of pairwise distances, the depot included.
/// It is built once per problem and used as a pure lookup service during the whole solve.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Distance>,
}

impl DistanceMatrix {
    /// Creates a matrix of euclidean distances between given coordinates.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Self, SolverError> {
        if let Some(idx) = coordinates.iter().position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(SolverError::InvalidInstance(format!("coordinate of location {idx} is not finite")));
        }

        let size = coordinates.len();
        let values = coordinates
            .iter()
            .flat_map(|&(x1, y1)| coordinates.iter().map(move |&(x2, y2)| (x1 - x2).hypot(y1 - y2)))
            .collect();

        Ok(Self { size, values })
    }

    /// Creates a matrix from precomputed distance rows.
    /// The matrix has to be square, symmetric, with non-negative finite values and zero diagonal.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self, SolverError> {
        let size = rows.len();

        if let Some(idx) = rows.iter().position(|row| row.len() != size) {
            return Err(SolverError::InvalidInstance(format!("distance row {idx} has size different from {size}")));
        }

        let values = rows.into_iter().flatten().collect::<Vec<_>>();
        let matrix = Self { size, values };

        for from in 0..size {
            for to in 0..size {
                let distance = matrix.distance(from, to);

                if !distance.is_finite() || distance < 0. {
                    return Err(SolverError::InvalidInstance(format!(
                        "distance from {from} to {to} must be finite and non-negative, got {distance}"
                    )));
                }

                if from == to && distance != 0. {
                    return Err(SolverError::InvalidInstance(format!("distance from {from} to itself is not zero")));
                }

                let reverse = matrix.distance(to, from);
                if (distance - reverse).abs() > SYMMETRY_TOLERANCE * distance.max(1.) {
                    return Err(SolverError::InvalidInstance(format!(
                        "distance matrix is not symmetric: {from}->{to} is {distance}, {to}->{from} is {reverse}"
                    )));
                }
            }
        }

        Ok(matrix)
    }

    /// Returns amount of locations covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two locations. Both indices are expected to be valid,
    /// use [`DistanceMatrix::try_distance`] for untrusted input.
    #[inline]
    pub fn distance(&self, from: Location, to: Location) -> Distance {
        debug_assert!(from < self.size && to < self.size);
        self.values[from * self.size + to]
    }

    /// Returns distance between two locations or an error if any of indices is out of range.
    pub fn try_distance(&self, from: Location, to: Location) -> Result<Distance, SolverError> {
        match [from, to].into_iter().find(|&index| index >= self.size) {
            Some(index) => Err(SolverError::IndexOutOfRange { index, size: self.size }),
            None => Ok(self.distance(from, to)),
        }
    }
}
