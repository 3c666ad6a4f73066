//! Shared types used across the formica crates.

use crate::error::ParseDepositRuleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a node (city, component, location) an ant can visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// The node id as a storage offset.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical key of an undirected edge: the smaller node id always comes first.
///
/// Traversals `a -> b` and `b -> a` map to the same key, so both land in the
/// same pheromone cell. Only [`EdgeKey::canonical`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    low: NodeId,
    high: NodeId,
}

impl EdgeKey {
    /// Canonicalize the edge between `u` and `v`.
    ///
    /// Returns `None` for a self-loop (`u == v`), which has no edge key.
    pub fn canonical(u: NodeId, v: NodeId) -> Option<Self> {
        match u.cmp(&v) {
            std::cmp::Ordering::Less => Some(Self { low: u, high: v }),
            std::cmp::Ordering::Greater => Some(Self { low: v, high: u }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> NodeId {
        self.low
    }

    pub fn high(&self) -> NodeId {
        self.high
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// How a solution turns its quality into pheromone on the edges it walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositRule {
    /// `Q / fitness` on every traversed edge.
    AntCycle,
    /// A constant `Q` on every traversed edge.
    AntDensity,
    /// `Q / cost(from, to)` on every traversed edge.
    AntQuantity,
}

impl DepositRule {
    /// Every deposit rule, in declaration order.
    pub const ALL: [DepositRule; 3] = [
        DepositRule::AntCycle,
        DepositRule::AntDensity,
        DepositRule::AntQuantity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DepositRule::AntCycle => "AntCycle",
            DepositRule::AntDensity => "AntDensity",
            DepositRule::AntQuantity => "AntQuantity",
        }
    }

    /// Allowed names formatted for error messages: `[AntCycle, AntDensity, AntQuantity]`.
    pub fn allowed() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|rule| rule.name()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for DepositRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DepositRule {
    type Err = ParseDepositRuleError;

    /// Case-sensitive, exact match on the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| ParseDepositRuleError(s.to_string()))
    }
}

/// A plain ant: the path it walked and the fitness its evaluator assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntPath {
    pub path: Vec<NodeId>,
    pub fitness: f64,
}

impl AntPath {
    pub fn new(path: impl IntoIterator<Item = u32>, fitness: f64) -> Self {
        Self {
            path: path.into_iter().map(NodeId).collect(),
            fitness,
        }
    }

    pub fn from_nodes(path: Vec<NodeId>, fitness: f64) -> Self {
        Self { path, fitness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_is_commutative() {
        let a = NodeId(7);
        let b = NodeId(3);
        assert_eq!(EdgeKey::canonical(a, b), EdgeKey::canonical(b, a));

        let key = EdgeKey::canonical(a, b).unwrap();
        assert_eq!(key.low(), NodeId(3));
        assert_eq!(key.high(), NodeId(7));
    }

    #[test]
    fn self_loop_has_no_key() {
        assert!(EdgeKey::canonical(NodeId(4), NodeId(4)).is_none());
    }

    #[test]
    fn edge_key_serializes_in_canonical_order() {
        let key = EdgeKey::canonical(NodeId(9), NodeId(2)).unwrap();
        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            r#"{"low":2,"high":9}"#
        );
    }

    #[test]
    fn deposit_rule_parses_exact_names_only() {
        assert_eq!("AntCycle".parse::<DepositRule>(), Ok(DepositRule::AntCycle));
        assert_eq!("AntDensity".parse::<DepositRule>(), Ok(DepositRule::AntDensity));
        assert_eq!("AntQuantity".parse::<DepositRule>(), Ok(DepositRule::AntQuantity));

        assert!("antcycle".parse::<DepositRule>().is_err());
        assert!("ANT_CYCLE".parse::<DepositRule>().is_err());
        assert!(" AntCycle".parse::<DepositRule>().is_err());
    }

    #[test]
    fn unknown_rule_lists_allowed_values() {
        let err = "bogus".parse::<DepositRule>().unwrap_err();
        assert_eq!(err, ParseDepositRuleError("bogus".into()));
        assert_eq!(
            err.to_string(),
            "unknown deposit rule 'bogus'; allowed values are [AntCycle, AntDensity, AntQuantity]"
        );
    }

    #[test]
    fn ant_path_deserializes_from_plain_numbers() {
        let ant: AntPath = serde_json::from_str(r#"{"path":[1,2,3],"fitness":2.5}"#).unwrap();
        assert_eq!(ant, AntPath::new([1, 2, 3], 2.5));
    }
}
