//! Formica Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export the update rule
pub use crate::ant_system::AntSystemUpdateRule;

// Re-export configuration
pub use crate::config::{AntSystemConfig, UpdateRuleParams, DEFAULT_Q};

// Re-export aggregation and deposit policy
pub use crate::aggregate::{aggregate_contributions, ContributionMap};
pub use crate::deposit::DepositPolicy;

// Re-export matrices and backend selection
pub use crate::backend::{create_matrix, DynPheromoneMatrix, MatrixBackend};
pub use crate::dense_matrix::DensePheromoneMatrix;
pub use crate::graph_matrix::GraphPheromoneMatrix;

// Re-export cost tables
pub use crate::distance::DistanceTable;

// Re-export from core
pub use formica_core::prelude::*;
