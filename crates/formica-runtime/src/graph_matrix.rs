//! Sparse pheromone matrix backed by petgraph.
//!
//! Large node sets where ants only ever walk a small share of the edges
//! don't need a dense triangle. This implementation keeps an undirected
//! petgraph `Graph` with a HashMap index for O(1) node lookup by id; edges
//! that were never written read as the default pheromone level.

use formica_core::error::MatrixError;
use formica_core::matrix::PheromoneMatrix;
use formica_core::types::{EdgeKey, NodeId};
use petgraph::graph::{Graph, NodeIndex};
use std::collections::HashMap;

/// Petgraph-backed sparse pheromone matrix.
pub struct GraphPheromoneMatrix {
    graph: Graph<NodeId, f64, petgraph::Undirected>,
    /// Map from our NodeId to petgraph's internal index.
    node_index: HashMap<NodeId, NodeIndex>,
    /// Level reported for edges that have never been written.
    default_level: f64,
    /// Node ids at or above this bound are rejected.
    node_limit: Option<usize>,
}

impl GraphPheromoneMatrix {
    pub fn new(default_level: f64) -> Self {
        Self {
            graph: Graph::new_undirected(),
            node_index: HashMap::new(),
            default_level,
            node_limit: None,
        }
    }

    /// Reject node ids `>= limit`, as a dense matrix over `limit` nodes would.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn default_level(&self) -> f64 {
        self.default_level
    }

    /// Number of nodes seen so far.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges that have been written at least once.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every written edge and its level, in edge-key order.
    pub fn edges(&self) -> Vec<(EdgeKey, f64)> {
        let mut edges: Vec<(EdgeKey, f64)> = self
            .graph
            .edge_indices()
            .filter_map(|idx| {
                let (a, b) = self.graph.edge_endpoints(idx)?;
                let edge = EdgeKey::canonical(self.graph[a], self.graph[b])?;
                Some((edge, self.graph[idx]))
            })
            .collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0));
        edges
    }

    fn check(&self, a: NodeId, b: NodeId) -> Result<(), MatrixError> {
        if let Some(limit) = self.node_limit {
            for node in [a, b] {
                if node.index() >= limit {
                    return Err(MatrixError::NodeOutOfRange { node, nodes: limit });
                }
            }
        }
        if a == b {
            return Err(MatrixError::SelfLoop(a));
        }
        Ok(())
    }

    /// Ensure a node exists in the graph.
    fn ensure_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            idx
        } else {
            let idx = self.graph.add_node(id);
            self.node_index.insert(id, idx);
            idx
        }
    }
}

impl Default for GraphPheromoneMatrix {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PheromoneMatrix for GraphPheromoneMatrix {
    fn get(&self, a: NodeId, b: NodeId) -> Result<f64, MatrixError> {
        self.check(a, b)?;
        let level = self
            .node_index
            .get(&a)
            .zip(self.node_index.get(&b))
            .and_then(|(&a_idx, &b_idx)| self.graph.find_edge(a_idx, b_idx))
            .map(|edge_idx| self.graph[edge_idx])
            .unwrap_or(self.default_level);
        Ok(level)
    }

    fn set(&mut self, a: NodeId, b: NodeId, value: f64) -> Result<(), MatrixError> {
        self.check(a, b)?;
        let a_idx = self.ensure_node(a);
        let b_idx = self.ensure_node(b);

        // Check if edge already exists
        if let Some(edge_idx) = self.graph.find_edge(a_idx, b_idx) {
            self.graph[edge_idx] = value;
        } else {
            self.graph.add_edge(a_idx, b_idx, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_edges_read_as_default() {
        let matrix = GraphPheromoneMatrix::new(0.3);
        assert_eq!(matrix.get(NodeId(10), NodeId(20)).unwrap(), 0.3);
        assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn set_creates_then_overwrites_one_edge() {
        let mut matrix = GraphPheromoneMatrix::default();
        matrix.set(NodeId(1), NodeId(2), 0.5).unwrap();
        matrix.set(NodeId(2), NodeId(1), 0.8).unwrap();

        assert_eq!(matrix.edge_count(), 1);
        assert_eq!(matrix.node_count(), 2);
        assert_eq!(matrix.get(NodeId(1), NodeId(2)).unwrap(), 0.8);
        assert_eq!(matrix.get(NodeId(2), NodeId(1)).unwrap(), 0.8);
    }

    #[test]
    fn edges_are_listed_canonically() {
        let mut matrix = GraphPheromoneMatrix::default();
        matrix.set(NodeId(9), NodeId(4), 1.0).unwrap();
        matrix.set(NodeId(2), NodeId(3), 2.0).unwrap();

        let edges = matrix.edges();
        assert_eq!(
            edges,
            vec![
                (EdgeKey::canonical(NodeId(2), NodeId(3)).unwrap(), 2.0),
                (EdgeKey::canonical(NodeId(4), NodeId(9)).unwrap(), 1.0),
            ]
        );
    }

    #[test]
    fn node_limit_and_self_loops_are_enforced() {
        let mut matrix = GraphPheromoneMatrix::new(0.0).with_node_limit(5);
        assert_eq!(
            matrix.set(NodeId(1), NodeId(5), 1.0),
            Err(MatrixError::NodeOutOfRange {
                node: NodeId(5),
                nodes: 5
            })
        );
        assert_eq!(
            matrix.get(NodeId(3), NodeId(3)),
            Err(MatrixError::SelfLoop(NodeId(3)))
        );
        assert_eq!(matrix.node_count(), 0);
    }
}
