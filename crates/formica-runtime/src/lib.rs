//! # Formica Runtime
//!
//! The Ant System update rule and everything it needs at run time.
//!
//! Configuration is validated once at setup ([`config`]). Each generation,
//! the rule ([`ant_system`]) sums the population's deposits per undirected
//! edge ([`aggregate`], [`deposit`]) and applies evaporation plus deposit to
//! exactly those edges of the host's pheromone matrix.

pub mod aggregate;
pub mod ant_system;
pub mod backend;
pub mod config;
pub mod dense_matrix;
pub mod deposit;
pub mod distance;
pub mod graph_matrix;
pub mod prelude;
