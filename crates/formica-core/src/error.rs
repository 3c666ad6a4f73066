//! Error types for pheromone learning.
//!
//! Configuration errors are fatal at setup. Update errors abort a single
//! round; the host decides whether the run survives.

use crate::types::{DepositRule, NodeId};
use thiserror::Error;

/// Result type for update operations.
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Returned when a string names no deposit rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown deposit rule '{0}'; allowed values are {}", DepositRule::allowed())]
pub struct ParseDepositRuleError(pub String);

/// Invalid update-rule configuration, detected once at setup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("parameter '{parameter}' is required but was not set")]
    MissingParameter { parameter: String },

    #[error("parameter '{parameter}' is set to '{value}', but must be on the interval [0,1)")]
    InvalidDecayRate { parameter: String, value: f64 },

    #[error(
        "invalid value '{}' found for parameter '{parameter}'. Allowed values are {}",
        .value.as_deref().unwrap_or("<unset>"),
        DepositRule::allowed()
    )]
    UnknownDepositRule {
        parameter: String,
        value: Option<String>,
    },

    #[error("parameter '{parameter}' has a value of {value}, but must be positive")]
    InvalidQ { parameter: String, value: f64 },

    #[error("initial pheromone {value} must be finite and non-negative")]
    InvalidInitialPheromone { value: f64 },

    #[error("failed to read configuration: {0}")]
    Io(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Failure reading or writing a pheromone cell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("node {node} is out of range for a matrix over {nodes} nodes")]
    NodeOutOfRange { node: NodeId, nodes: usize },

    #[error("node {0} has no pheromone cell with itself")]
    SelfLoop(NodeId),
}

/// Failure of the problem's edge-cost function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    #[error("node {node} is out of range for a cost table over {nodes} nodes")]
    NodeOutOfRange { node: NodeId, nodes: usize },

    #[error("no cost is defined for edge {from} -> {to}")]
    Undefined { from: NodeId, to: NodeId },

    #[error("no problem cost function is available")]
    Unavailable,

    #[error("cost evaluation failed: {0}")]
    Other(String),
}

/// Errors that abort one round of pheromone learning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpdateError {
    /// A solution with fewer than two nodes walked no edge.
    #[error("solution {solution} has a path of length {length}; at least two nodes are required")]
    MalformedPath { solution: usize, length: usize },

    #[error("solution {solution} steps from node {node} to itself at position {position}")]
    SelfLoop {
        solution: usize,
        position: usize,
        node: NodeId,
    },

    #[error("solution {solution} has fitness {fitness}, but AntCycle deposits require positive fitness")]
    NonPositiveFitness { solution: usize, fitness: f64 },

    #[error("deposit rule {rule} needs Q, but none was configured")]
    MissingQ { rule: DepositRule },

    /// A deposit was asked for a path position that names no edge.
    #[error("solution {solution} has no edge ending at position {position} of a path of length {length}")]
    PositionOutOfRange {
        solution: usize,
        position: usize,
        length: usize,
    },

    #[error("edge {from} -> {to} has cost {cost}, but AntQuantity deposits require a positive cost")]
    InvalidCost { from: NodeId, to: NodeId, cost: f64 },

    #[error("cost function failed: {0}")]
    Cost(#[from] CostError),

    #[error("pheromone matrix access failed: {0}")]
    Matrix(#[from] MatrixError),
}
