//! # Formica Core
//!
//! Core traits and types for Ant System pheromone learning.
//!
//! The crate defines the collaborators an update rule talks to, and
//! nothing that owns state:
//!
//! - [`Solution`](population::Solution) — an ant's path and fitness
//! - [`PheromoneMatrix`](matrix::PheromoneMatrix) — symmetric cell store
//! - [`ProblemCost`](problem::ProblemCost) — per-edge cost of the problem
//! - [`UpdateRule`](rule::UpdateRule) — one round of evaporation and deposit
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let ant = AntPath::new([3, 1, 2], 4.0);
//! assert_eq!(ant.path_len(), 3);
//!
//! // Walking 3 -> 1 and 1 -> 3 lands on the same edge
//! let key = EdgeKey::canonical(NodeId(3), NodeId(1)).unwrap();
//! assert_eq!(key.endpoints(), (NodeId(1), NodeId(3)));
//! ```

pub mod error;
pub mod matrix;
pub mod population;
pub mod prelude;
pub mod problem;
pub mod rule;
pub mod types;
