//! UPDATE — one round of pheromone learning.
//!
//! Ants that walked good paths leave pheromone behind; old pheromone
//! evaporates. The matrix the colony reads next generation is the
//! accumulated memory of which edges paid off.

use crate::error::Result;
use crate::matrix::PheromoneMatrix;
use crate::population::Solution;
use crate::problem::ProblemCost;
use serde::Serialize;

/// Apply one generation's worth of pheromone learning to a matrix.
pub trait UpdateRule {
    /// Evaporate and deposit pheromone for every edge the population walked.
    ///
    /// The matrix is the only thing modified. `problem` is consulted for
    /// edge costs by rules that need them.
    fn update_pheromones<S, M>(
        &self,
        matrix: &mut M,
        population: &[S],
        problem: &dyn ProblemCost,
    ) -> Result<UpdateStats>
    where
        S: Solution,
        M: PheromoneMatrix + ?Sized;
}

/// What one update round touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UpdateStats {
    /// Distinct edges that were evaporated and deposited on.
    pub edges_updated: usize,
    /// Sum of all deposits made this round.
    pub total_deposit: f64,
}
