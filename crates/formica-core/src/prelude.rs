//! Formica Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

pub use crate::types::{AntPath, DepositRule, EdgeKey, NodeId};

pub use crate::matrix::PheromoneMatrix;
pub use crate::population::Solution;
pub use crate::problem::{NoCost, ProblemCost};
pub use crate::rule::{UpdateRule, UpdateStats};

pub use crate::error::{ConfigError, CostError, MatrixError, Result, UpdateError};
