//! The Ant System update rule.
//!
//! Each round the population's deposits are summed per edge first, then
//! every edge that received pheromone is written exactly once:
//!
//! ```text
//! new = (1 - decay_rate) * old + contribution
//! ```
//!
//! Edges nobody walked are not read or written, so they do not evaporate.

use crate::aggregate::{aggregate_contributions, ContributionMap};
use crate::config::{AntSystemConfig, UpdateRuleParams};
use crate::deposit::DepositPolicy;
use formica_core::error::{ConfigError, Result};
use formica_core::matrix::PheromoneMatrix;
use formica_core::population::Solution;
use formica_core::problem::ProblemCost;
use formica_core::rule::{UpdateRule, UpdateStats};
use tracing::{debug, trace, warn};

/// Evaporation plus deposit, restricted to the edges the population walked.
#[derive(Debug, Clone)]
pub struct AntSystemUpdateRule {
    config: AntSystemConfig,
}

impl AntSystemUpdateRule {
    pub fn new(config: AntSystemConfig) -> Self {
        Self { config }
    }

    /// Validate raw parameters and build the rule.
    pub fn from_params(params: &UpdateRuleParams) -> std::result::Result<Self, ConfigError> {
        AntSystemConfig::from_params(params).map(Self::new)
    }

    pub fn config(&self) -> &AntSystemConfig {
        &self.config
    }

    /// Per-edge deposits this rule would make for `population`, without
    /// touching any matrix.
    pub fn contributions<S: Solution>(
        &self,
        population: &[S],
        problem: &dyn ProblemCost,
    ) -> Result<ContributionMap> {
        let policy = DepositPolicy::new(&self.config, problem);
        aggregate_contributions(population, &policy)
    }
}

impl UpdateRule for AntSystemUpdateRule {
    fn update_pheromones<S, M>(
        &self,
        matrix: &mut M,
        population: &[S],
        problem: &dyn ProblemCost,
    ) -> Result<UpdateStats>
    where
        S: Solution,
        M: PheromoneMatrix + ?Sized,
    {
        let contributions = self.contributions(population, problem)?;
        let retention = self.config.retention();

        let mut stats = UpdateStats::default();
        for (edge, contribution) in contributions.iter() {
            let written = matrix
                .get_edge(edge)
                .and_then(|old| {
                    let new = retention * old + contribution;
                    trace!(%edge, old, new, "pheromone updated");
                    matrix.set_edge(edge, new)
                });
            if let Err(err) = written {
                warn!(
                    %edge,
                    %err,
                    edges_written = stats.edges_updated,
                    edges_pending = contributions.len() - stats.edges_updated,
                    "matrix access failed; pheromone update left partially applied"
                );
                return Err(err.into());
            }
            stats.edges_updated += 1;
            stats.total_deposit += contribution;
        }

        debug!(
            ants = population.len(),
            edges = stats.edges_updated,
            total_deposit = stats.total_deposit,
            rule = %self.config.deposit_rule(),
            "pheromone update applied"
        );
        debug_assert!(self.config.is_consistent());
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense_matrix::DensePheromoneMatrix;
    use formica_core::problem::NoCost;
    use formica_core::types::{AntPath, DepositRule, NodeId};

    #[test]
    fn worked_example_from_two_ants() {
        let config = AntSystemConfig::new(0.5, DepositRule::AntCycle, Some(1.0)).unwrap();
        let rule = AntSystemUpdateRule::new(config);
        let mut matrix = DensePheromoneMatrix::new(4, 0.0);
        let population = vec![AntPath::new([1, 2, 3], 2.0), AntPath::new([3, 2, 1], 4.0)];

        let stats = rule
            .update_pheromones(&mut matrix, &population, &NoCost)
            .unwrap();

        assert_eq!(stats.edges_updated, 2);
        assert!((stats.total_deposit - 1.5).abs() < 1e-12);
        assert!((matrix.get(NodeId(1), NodeId(2)).unwrap() - 0.75).abs() < 1e-12);
        assert!((matrix.get(NodeId(2), NodeId(3)).unwrap() - 0.75).abs() < 1e-12);
        assert_eq!(matrix.get(NodeId(1), NodeId(3)).unwrap(), 0.0);
    }

    #[test]
    fn evaporation_applies_before_deposit() {
        let config = AntSystemConfig::new(0.25, DepositRule::AntDensity, Some(0.5)).unwrap();
        let rule = AntSystemUpdateRule::new(config);
        let mut matrix = DensePheromoneMatrix::new(3, 2.0);

        rule.update_pheromones(&mut matrix, &[AntPath::new([0, 1], 1.0)], &NoCost)
            .unwrap();

        // 0.75 * 2.0 + 0.5
        assert!((matrix.get(NodeId(0), NodeId(1)).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(matrix.get(NodeId(1), NodeId(2)).unwrap(), 2.0);
    }

    #[test]
    fn precondition_failures_leave_matrix_untouched() {
        let config = AntSystemConfig::new(0.5, DepositRule::AntCycle, None).unwrap();
        let rule = AntSystemUpdateRule::new(config);
        let mut matrix = DensePheromoneMatrix::new(4, 1.0);
        let population = vec![AntPath::new([0, 1, 2], 1.0), AntPath::new([3], 1.0)];

        assert!(rule
            .update_pheromones(&mut matrix, &population, &NoCost)
            .is_err());
        assert_eq!(matrix.get(NodeId(0), NodeId(1)).unwrap(), 1.0);
        assert_eq!(matrix.get(NodeId(1), NodeId(2)).unwrap(), 1.0);
    }
}
