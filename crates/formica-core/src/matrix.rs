//! Pheromone matrix — the shared, symmetric edge-weight store.
//!
//! The matrix is owned by the host. Update rules only read and write
//! individual cells; they never resize it or walk all of it.

use crate::error::MatrixError;
use crate::types::{EdgeKey, NodeId};

/// Cell-level access to a symmetric pheromone matrix.
///
/// This is a trait rather than a concrete type so that hosts can keep
/// pheromone in whatever storage their path-construction step reads from.
/// Implementations must honor `get(a, b) == get(b, a)`.
pub trait PheromoneMatrix {
    /// Read the pheromone on the edge between `a` and `b`.
    fn get(&self, a: NodeId, b: NodeId) -> Result<f64, MatrixError>;

    /// Overwrite the pheromone on the edge between `a` and `b`.
    fn set(&mut self, a: NodeId, b: NodeId, value: f64) -> Result<(), MatrixError>;

    /// Read the cell addressed by a canonical edge key.
    fn get_edge(&self, edge: EdgeKey) -> Result<f64, MatrixError> {
        self.get(edge.low(), edge.high())
    }

    /// Write the cell addressed by a canonical edge key.
    fn set_edge(&mut self, edge: EdgeKey, value: f64) -> Result<(), MatrixError> {
        self.set(edge.low(), edge.high(), value)
    }
}

impl<M: PheromoneMatrix + ?Sized> PheromoneMatrix for Box<M> {
    fn get(&self, a: NodeId, b: NodeId) -> Result<f64, MatrixError> {
        (**self).get(a, b)
    }

    fn set(&mut self, a: NodeId, b: NodeId, value: f64) -> Result<(), MatrixError> {
        (**self).set(a, b, value)
    }
}
