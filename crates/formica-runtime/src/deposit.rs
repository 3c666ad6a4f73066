//! Deposit policy — how much pheromone one traversal of one edge leaves.

use crate::config::AntSystemConfig;
use formica_core::error::{Result, UpdateError};
use formica_core::population::Solution;
use formica_core::problem::ProblemCost;
use formica_core::types::DepositRule;

/// Reward shaping for a single edge traversal.
///
/// Borrows the validated configuration and the problem's cost function
/// for the duration of one update round.
pub struct DepositPolicy<'a> {
    config: &'a AntSystemConfig,
    problem: &'a dyn ProblemCost,
}

impl<'a> DepositPolicy<'a> {
    pub fn new(config: &'a AntSystemConfig, problem: &'a dyn ProblemCost) -> Self {
        Self { config, problem }
    }

    pub fn deposit_rule(&self) -> DepositRule {
        self.config.deposit_rule()
    }

    /// Pheromone that `solution` deposits on the edge between path positions
    /// `position - 1` and `position`.
    ///
    /// `ordinal` is the solution's index in the population, used only to
    /// name it in errors.
    ///
    /// # Errors
    /// - `PositionOutOfRange` when `position` is 0 or past the end of the path
    /// - `NonPositiveFitness` under `AntCycle` when fitness is not > 0
    /// - `MissingQ` under `AntDensity`/`AntQuantity` when no `Q` was configured
    /// - `Cost`/`InvalidCost` under `AntQuantity` when the cost lookup fails
    ///   or the cost is not positive
    pub fn contribution<S: Solution + ?Sized>(
        &self,
        ordinal: usize,
        solution: &S,
        position: usize,
    ) -> Result<f64> {
        let length = solution.path_len();
        if position == 0 || position >= length {
            return Err(UpdateError::PositionOutOfRange {
                solution: ordinal,
                position,
                length,
            });
        }

        let rule = self.config.deposit_rule();
        match rule {
            DepositRule::AntCycle => {
                let fitness = solution.fitness();
                if fitness <= 0.0 || fitness.is_nan() {
                    return Err(UpdateError::NonPositiveFitness {
                        solution: ordinal,
                        fitness,
                    });
                }
                Ok(self.q(rule)? / fitness)
            }
            DepositRule::AntDensity => self.q(rule),
            DepositRule::AntQuantity => {
                let q = self.q(rule)?;
                let path = solution.path();
                let from = path[position - 1];
                let to = path[position];
                let cost = self.problem.cost(from, to)?;
                if cost <= 0.0 || cost.is_nan() {
                    return Err(UpdateError::InvalidCost { from, to, cost });
                }
                Ok(q / cost)
            }
        }
    }

    fn q(&self, rule: DepositRule) -> Result<f64> {
        self.config.q().ok_or(UpdateError::MissingQ { rule })
    }
}
