//! Matrix backend configuration and factory.
//!
//! Hosts that don't bring their own pheromone storage can pick one of the
//! bundled matrices from configuration.

use crate::dense_matrix::DensePheromoneMatrix;
use crate::graph_matrix::GraphPheromoneMatrix;
use formica_core::error::ConfigError;
use formica_core::matrix::PheromoneMatrix;
use serde::{Deserialize, Serialize};

/// Configuration for pheromone matrix selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatrixBackend {
    /// Packed triangle over nodes `0..nodes`.
    Dense { nodes: usize, initial: f64 },

    /// Petgraph-backed, only written edges are stored.
    Sparse {
        initial: f64,
        /// Reject node ids at or above this bound.
        #[serde(default)]
        node_limit: Option<usize>,
    },
}

impl Default for MatrixBackend {
    fn default() -> Self {
        MatrixBackend::Sparse {
            initial: 0.0,
            node_limit: None,
        }
    }
}

impl MatrixBackend {
    pub fn dense(nodes: usize, initial: f64) -> Self {
        MatrixBackend::Dense { nodes, initial }
    }

    pub fn sparse(initial: f64) -> Self {
        MatrixBackend::Sparse {
            initial,
            node_limit: None,
        }
    }

    pub fn initial(&self) -> f64 {
        match self {
            MatrixBackend::Dense { initial, .. } | MatrixBackend::Sparse { initial, .. } => {
                *initial
            }
        }
    }
}

/// Trait object for matrix backends.
pub type DynPheromoneMatrix = Box<dyn PheromoneMatrix + Send + Sync>;

/// Create a pheromone matrix from configuration.
///
/// # Errors
/// Returns an error if the initial pheromone level is negative or not finite.
pub fn create_matrix(config: &MatrixBackend) -> Result<DynPheromoneMatrix, ConfigError> {
    let initial = config.initial();
    if !initial.is_finite() || initial < 0.0 {
        return Err(ConfigError::InvalidInitialPheromone { value: initial });
    }

    let matrix: DynPheromoneMatrix = match config {
        MatrixBackend::Dense { nodes, initial } => {
            Box::new(DensePheromoneMatrix::new(*nodes, *initial))
        }
        MatrixBackend::Sparse {
            initial,
            node_limit,
        } => {
            let graph = GraphPheromoneMatrix::new(*initial);
            match node_limit {
                Some(limit) => Box::new(graph.with_node_limit(*limit)),
                None => Box::new(graph),
            }
        }
    };
    Ok(matrix)
}
