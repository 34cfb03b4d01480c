//! Largest-first greedy selection strategy
//!
//! The baseline algorithm: walk the pool in deterministic value-descending
//! order, accumulating inputs until the running sum covers target plus fee,
//! then consult the change policy to decide whether the combination is an
//! exact match, inside the acceptable-change window, or merely the first one
//! that covers the total.

use crate::coin_selection::policy;
use crate::coin_selection::strategies::{base, SelectionStrategy};
use crate::coin_selection::types::{SelectionConfig, SelectionResult, UtxoPool};
use crate::types::Amount;

/// Strategy that spends the largest outputs first and accepts the first
/// covering combination.
pub struct LargestFirstStrategy;

impl LargestFirstStrategy {
    /// Create a new LargestFirstStrategy.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LargestFirstStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for LargestFirstStrategy {
    fn name(&self) -> &'static str {
        "LargestFirst"
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

        let mut selected_inputs = Vec::new();
        let mut running_sum = Amount::ZERO;

        for utxo in ordered {
            running_sum += utxo.value;
            selected_inputs.push(utxo);

            if running_sum >= required_total {
                let change = running_sum - required_total;

                if policy::is_exact_match(running_sum, required_total) {
                    break;
                } else if policy::is_optimized_change(
                    change,
                    config.dust_threshold,
                    config.optimized_threshold,
                ) {
                    break;
                } else {
                    // Change at or below dust, or at or beyond the optimized
                    // window. The first covering combination is still
                    // accepted as-is; callers that need tighter change swap
                    // in BranchAndBoundStrategy.
                    break;
                }
            }
        }

        let change_amount = running_sum - required_total;
        base::create_success_result(selected_inputs, running_sum, change_amount)
    }
}
