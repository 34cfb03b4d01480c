//! Base utilities for coin-selection strategies
//!
//! Common helpers shared by the strategy implementations.

use crate::coin_selection::types::{SelectionResult, Utxo, UtxoPool};
use crate::types::Amount;

/// Produce the deterministic spending order of a pool: value descending,
/// ties broken by `(prev_tx_id, prev_out_index)` ascending.
///
/// Two calls over the same pool as a *set* yield the same sequence no matter
/// how the pool was originally enumerated. Strategies rely on this for
/// reproducible results and stable UI previews.
pub fn order_by_value_desc(pool: &UtxoPool) -> Vec<Utxo> {
    let mut ordered = pool.as_slice().to_vec();
    ordered.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.key().cmp(&b.key())));
    ordered
}

/// Create a success result with the given parameters.
pub fn create_success_result(
    selected_inputs: Vec<Utxo>,
    selected_sum: Amount,
    change_amount: Amount,
) -> SelectionResult {
    SelectionResult::Success {
        selected_inputs,
        selected_sum,
        change_amount,
    }
}

/// Create an insufficient-funds result carrying the searched pool.
pub fn create_insufficient_funds_result(
    pool: &UtxoPool,
    required_total: Amount,
) -> SelectionResult {
    SelectionResult::InsufficientFunds {
        pool: pool.clone(),
        required_total,
    }
}
