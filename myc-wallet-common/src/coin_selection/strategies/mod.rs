//! Coin-selection strategies
//!
//! Each strategy implements the [`SelectionStrategy`] trait. The largest-first
//! greedy walk is the default; the branch-and-bound search can be swapped in
//! by callers that want tighter change without altering the selector's public
//! contract.

use crate::coin_selection::types::{SelectionConfig, SelectionResult, UtxoPool};
use crate::types::Amount;

pub mod base;
pub mod branch_and_bound;
pub mod largest_first;

// Re-export implementations
pub use branch_and_bound::BranchAndBoundStrategy;
pub use largest_first::LargestFirstStrategy;

/// Capability implemented by every coin-selection algorithm
///
/// Strategies receive a validated pool and a validated config: entries are
/// unique with positive values, the pool total fits in a `u64`, and
/// `target_amount + fee_amount` does not overflow. The
/// [`CoinSelector`](crate::coin_selection::selector::CoinSelector) enforces
/// all of this before delegating, so strategy code may use plain `Amount`
/// arithmetic on partial sums.
pub trait SelectionStrategy {
    /// Name of this strategy, for logs and event payloads.
    fn name(&self) -> &'static str;

    /// Select inputs from `pool` covering `target_amount` plus the fee.
    ///
    /// # Arguments
    /// * `pool` - Validated snapshot of spendable outputs
    /// * `target_amount` - Amount the recipient should receive
    /// * `config` - Fee and change-window parameters
    ///
    /// # Returns
    /// * Selection result; insufficiency is a value, not an error
    fn select(
        &self,
        pool: &UtxoPool,
        target_amount: Amount,
        config: &SelectionConfig,
    ) -> SelectionResult;
}
