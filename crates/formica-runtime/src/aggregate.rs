//! Contribution aggregation — sum every ant's deposits per undirected edge.

use crate::deposit::DepositPolicy;
use formica_core::error::{Result, UpdateError};
use formica_core::population::Solution;
use formica_core::types::EdgeKey;
use std::collections::BTreeMap;

/// Pheromone owed to each edge this round, keyed by canonical edge.
///
/// Rebuilt from scratch on every update. Iteration is in edge-key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionMap {
    entries: BTreeMap<EdgeKey, f64>,
}

impl ContributionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running total for `edge`.
    pub fn add(&mut self, edge: EdgeKey, amount: f64) {
        *self.entries.entry(edge).or_insert(0.0) += amount;
    }

    pub fn get(&self, edge: &EdgeKey) -> Option<f64> {
        self.entries.get(edge).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all contributions.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, f64)> + '_ {
        self.entries.iter().map(|(edge, amount)| (*edge, *amount))
    }
}

/// Walk every solution (in population order) and every step of its path
/// (in path order), summing deposits per canonical edge.
///
/// Fails before returning anything if a path has fewer than two nodes, steps
/// from a node to itself, or the deposit policy rejects a traversal.
pub fn aggregate_contributions<S: Solution>(
    population: &[S],
    policy: &DepositPolicy<'_>,
) -> Result<ContributionMap> {
    let mut contributions = ContributionMap::new();

    for (ordinal, solution) in population.iter().enumerate() {
        let path = solution.path();
        if path.len() < 2 {
            return Err(UpdateError::MalformedPath {
                solution: ordinal,
                length: path.len(),
            });
        }

        for position in 1..path.len() {
            let edge = EdgeKey::canonical(path[position - 1], path[position]).ok_or(
                UpdateError::SelfLoop {
                    solution: ordinal,
                    position,
                    node: path[position],
                },
            )?;
            let amount = policy.contribution(ordinal, solution, position)?;
            contributions.add(edge, amount);
        }
    }

    Ok(contributions)
}
