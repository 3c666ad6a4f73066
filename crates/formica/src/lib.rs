//! # Formica
//!
//! Ant System pheromone learning: one round of evaporation and deposit
//! over a shared, symmetric pheromone matrix.
//!
//! A colony's path-construction step reads the pheromone matrix to bias
//! ants toward edges that paid off before. After the ants are evaluated,
//! the update rule closes the loop: every edge the population walked is
//! evaporated by the decay rate and receives the sum of the ants' deposits.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! // Validate the configuration once, at setup
//! let config = AntSystemConfig::new(0.5, DepositRule::AntCycle, Some(1.0)).unwrap();
//! let rule = AntSystemUpdateRule::new(config);
//!
//! // Two ants walking the same edges in opposite directions
//! let ants = vec![AntPath::new([1, 2, 3], 2.0), AntPath::new([3, 2, 1], 4.0)];
//!
//! let mut matrix = DensePheromoneMatrix::new(4, 0.0);
//! let stats = rule.update_pheromones(&mut matrix, &ants, &NoCost).unwrap();
//!
//! assert_eq!(stats.edges_updated, 2);
//! assert!((matrix.get(NodeId(1), NodeId(2)).unwrap() - 0.75).abs() < 1e-12);
//! assert!((matrix.get(NodeId(3), NodeId(2)).unwrap() - 0.75).abs() < 1e-12);
//! ```
//!
//! ## Architecture
//!
//! - [`formica_core`] - Collaborator traits (solution, matrix, cost, update rule) and errors
//! - [`formica_runtime`] - The Ant System rule, configuration, and bundled matrices
//!
//! ### Deposit Rules
//!
//! | Rule | Deposit per traversed edge | Needs |
//! |------|----------------------------|-------|
//! | `AntCycle` | `Q / fitness` | positive fitness; `Q` defaults to 1.0 |
//! | `AntDensity` | `Q` | `Q` |
//! | `AntQuantity` | `Q / cost(from, to)` | `Q` and a [`ProblemCost`](formica_core::problem::ProblemCost) |
//!
//! Only walked edges change. An edge no ant traversed this round keeps its
//! pheromone untouched; there is no global evaporation pass.

pub use formica_core;
pub use formica_runtime;

pub mod prelude;
