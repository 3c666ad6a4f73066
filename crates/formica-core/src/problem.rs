//! Problem cost — the edge cost consulted by `AntQuantity` deposits.

use crate::error::CostError;
use crate::types::NodeId;

/// Cost of stepping from one node to another, owned by the problem.
pub trait ProblemCost {
    fn cost(&self, from: NodeId, to: NodeId) -> Result<f64, CostError>;
}

impl<F> ProblemCost for F
where
    F: Fn(NodeId, NodeId) -> Result<f64, CostError>,
{
    fn cost(&self, from: NodeId, to: NodeId) -> Result<f64, CostError> {
        self(from, to)
    }
}

/// Stand-in for problems without an edge cost.
///
/// Fine for `AntCycle` and `AntDensity`, which never ask for a cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCost;

impl ProblemCost for NoCost {
    fn cost(&self, _from: NodeId, _to: NodeId) -> Result<f64, CostError> {
        Err(CostError::Unavailable)
    }
}
