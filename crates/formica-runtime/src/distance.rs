//! Symmetric edge-cost table for problems that price each step.

use formica_core::error::CostError;
use formica_core::problem::ProblemCost;
use formica_core::types::NodeId;

/// Flattened `n x n` cost table. Unset pairs have no cost.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    nodes: usize,
    costs: Vec<Option<f64>>,
}

impl DistanceTable {
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            costs: vec![None; nodes * nodes],
        }
    }

    /// Build from `(a, b, cost)` triples; each is stored in both directions.
    pub fn from_edges(nodes: usize, edges: &[(u32, u32, f64)]) -> Result<Self, CostError> {
        let mut table = Self::new(nodes);
        for &(a, b, cost) in edges {
            table.set_symmetric(NodeId(a), NodeId(b), cost)?;
        }
        Ok(table)
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn set(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<(), CostError> {
        let offset = self.offset(from, to)?;
        self.costs[offset] = Some(cost);
        Ok(())
    }

    pub fn set_symmetric(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<(), CostError> {
        self.set(a, b, cost)?;
        self.set(b, a, cost)
    }

    fn offset(&self, from: NodeId, to: NodeId) -> Result<usize, CostError> {
        for node in [from, to] {
            if node.index() >= self.nodes {
                return Err(CostError::NodeOutOfRange {
                    node,
                    nodes: self.nodes,
                });
            }
        }
        Ok(from.index() * self.nodes + to.index())
    }
}

impl ProblemCost for DistanceTable {
    fn cost(&self, from: NodeId, to: NodeId) -> Result<f64, CostError> {
        let offset = self.offset(from, to)?;
        self.costs[offset].ok_or(CostError::Undefined { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_lookup() {
        let table = DistanceTable::from_edges(3, &[(0, 1, 2.0), (1, 2, 4.0)]).unwrap();
        assert_eq!(table.cost(NodeId(0), NodeId(1)), Ok(2.0));
        assert_eq!(table.cost(NodeId(2), NodeId(1)), Ok(4.0));
    }

    #[test]
    fn missing_and_out_of_range_costs_fail() {
        let table = DistanceTable::from_edges(3, &[(0, 1, 2.0)]).unwrap();
        assert_eq!(
            table.cost(NodeId(0), NodeId(2)),
            Err(CostError::Undefined {
                from: NodeId(0),
                to: NodeId(2)
            })
        );
        assert!(matches!(
            table.cost(NodeId(0), NodeId(9)),
            Err(CostError::NodeOutOfRange { .. })
        ));
        assert!(DistanceTable::from_edges(2, &[(0, 2, 1.0)]).is_err());
    }
}
