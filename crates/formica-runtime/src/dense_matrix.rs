//! Dense pheromone matrix over a fixed node count.
//!
//! Only the upper triangle is stored, so `(a, b)` and `(b, a)` are the
//! same cell by construction.

use formica_core::error::MatrixError;
use formica_core::matrix::PheromoneMatrix;
use formica_core::types::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct DensePheromoneMatrix {
    nodes: usize,
    /// Packed row-major upper triangle, diagonal excluded.
    cells: Vec<f64>,
}

impl DensePheromoneMatrix {
    /// A matrix over nodes `0..nodes` with every edge set to `initial`.
    pub fn new(nodes: usize, initial: f64) -> Self {
        let len = nodes * nodes.saturating_sub(1) / 2;
        Self {
            nodes,
            cells: vec![initial; len],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.cells.len()
    }

    fn offset(&self, a: NodeId, b: NodeId) -> Result<usize, MatrixError> {
        for node in [a, b] {
            if node.index() >= self.nodes {
                return Err(MatrixError::NodeOutOfRange {
                    node,
                    nodes: self.nodes,
                });
            }
        }
        let (i, j) = match a.cmp(&b) {
            std::cmp::Ordering::Less => (a.index(), b.index()),
            std::cmp::Ordering::Greater => (b.index(), a.index()),
            std::cmp::Ordering::Equal => return Err(MatrixError::SelfLoop(a)),
        };
        // Rows 0..i hold (n-1) + (n-2) + ... + (n-i) cells.
        Ok(i * (2 * self.nodes - i - 1) / 2 + (j - i - 1))
    }
}

impl PheromoneMatrix for DensePheromoneMatrix {
    fn get(&self, a: NodeId, b: NodeId) -> Result<f64, MatrixError> {
        let offset = self.offset(a, b)?;
        Ok(self.cells[offset])
    }

    fn set(&mut self, a: NodeId, b: NodeId, value: f64) -> Result<(), MatrixError> {
        let offset = self.offset(a, b)?;
        self.cells[offset] = value;
        Ok(())
    }
}
