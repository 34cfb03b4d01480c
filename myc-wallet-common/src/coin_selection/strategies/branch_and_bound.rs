//! Branch-and-bound selection strategy
//!
//! Bounded search over input subsets that minimizes the change amount,
//! subject to the change being either zero or above the dust threshold. Runs
//! under a hard step budget so it stays responsive when invoked from an
//! interactive preview; when the budget runs out, or no qualifying subset
//! exists, it falls back to the greedy baseline.

use crate::coin_selection::policy;
use crate::coin_selection::strategies::{base, LargestFirstStrategy, SelectionStrategy};
use crate::coin_selection::types::{SelectionConfig, SelectionResult, Utxo, UtxoPool};
use crate::types::Amount;
use log::debug;

/// Default number of search nodes visited before giving up.
pub const DEFAULT_STEP_BUDGET: u64 = 100_000;

/// Strategy that searches for the subset with the smallest workable change.
#[derive(Clone)]
pub struct BranchAndBoundStrategy {
    /// Maximum number of search nodes to visit.
    step_budget: u64,
}

impl BranchAndBoundStrategy {
    /// Create a new BranchAndBoundStrategy with the default step budget.
    pub fn new() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
        }
    }

    /// Create a new BranchAndBoundStrategy with a custom step budget.
    pub fn with_step_budget(step_budget: u64) -> Self {
        Self { step_budget }
    }
}

impl Default for BranchAndBoundStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first include/exclude search over the deterministically ordered
/// pool. Exploration order is fixed, so results are reproducible for a given
/// pool and budget.
struct Search<'a> {
    ordered: &'a [Utxo],
    required_total: Amount,
    dust_threshold: Amount,
    steps_left: u64,
    exhausted: bool,
    best: Option<(Vec<usize>, Amount)>,
}

impl Search<'_> {
    fn done(&self) -> bool {
        // A zero-change subset cannot be improved on.
        self.exhausted || matches!(&self.best, Some((_, change)) if change.is_zero())
    }

    fn explore(&mut self, depth: usize, current: &mut Vec<usize>, sum: Amount, remaining: Amount) {
        if self.done() {
            return;
        }
        if self.steps_left == 0 {
            self.exhausted = true;
            return;
        }
        self.steps_left -= 1;

        if sum >= self.required_total {
            // Adding further inputs can only grow the change.
            let change = sum - self.required_total;
            if policy::is_acceptable_change(change, self.dust_threshold) {
                let better = match &self.best {
                    None => true,
                    Some((_, best_change)) => change < *best_change,
                };
                if better {
                    self.best = Some((current.clone(), change));
                }
            }
            return;
        }

        if depth == self.ordered.len() || sum + remaining < self.required_total {
            return;
        }

        let value = self.ordered[depth].value;

        current.push(depth);
        self.explore(depth + 1, current, sum + value, remaining - value);
        current.pop();

        self.explore(depth + 1, current, sum, remaining - value);
    }
}

impl SelectionStrategy for BranchAndBoundStrategy {
    fn name(&self) -> &'static str {
        "BranchAndBound"
    }

    fn select(
        &self,
        pool: &UtxoPool,
        target_amount: Amount,
        config: &SelectionConfig,
    ) -> SelectionResult {
        let required_total = target_amount + config.fee_amount;

        if pool.total_value() < required_total {
            return base::create_insufficient_funds_result(pool, required_total);
        }

        let ordered = base::order_by_value_desc(pool);

        let mut search = Search {
            ordered: &ordered,
            required_total,
            dust_threshold: config.dust_threshold,
            steps_left: self.step_budget,
            exhausted: false,
            best: None,
        };
        let mut current = Vec::new();
        search.explore(0, &mut current, Amount::ZERO, pool.total_value());

        match search.best {
            Some((indices, change_amount)) => {
                let selected_inputs: Vec<Utxo> =
                    indices.into_iter().map(|i| ordered[i].clone()).collect();
                let selected_sum = required_total + change_amount;
                base::create_success_result(selected_inputs, selected_sum, change_amount)
            }
            None => {
                debug!(
                    "branch-and-bound found no qualifying subset (budget exhausted: {}), \
                     falling back to greedy",
                    search.exhausted
                );
                LargestFirstStrategy::new().select(pool, target_amount, config)
            }
        }
    }
}
