//! Main coin selector implementation
//!
//! The [`CoinSelector`] is the entry point for coin selection. It validates
//! the request up front, then delegates the actual search to a pluggable
//! [`SelectionStrategy`] (Strategy pattern: the selector is the context, the
//! strategies are the algorithms).
//!
//! # Purity
//!
//! Selection performs no I/O, blocks on nothing, and touches no shared state.
//! An identical [`SelectionRequest`] always produces an identical
//! [`SelectionResult`], which makes it safe to invoke on every keystroke of
//! an amount input for a live fee/change preview.
//!
//! # Usage
//!
//! ```
//! use myc_wallet_common::coin_selection::selector::CoinSelector;
//! use myc_wallet_common::coin_selection::types::{
//!     SelectionConfig, SelectionRequest, SelectionResult, Utxo, UtxoPool,
//! };
//! use myc_wallet_common::types::{Amount, TxId};
//!
//! let pool = UtxoPool::from_utxos(vec![Utxo::new(
//!     TxId::from_bytes([7u8; 32]),
//!     0,
//!     Amount::from_units(110),
//! )])
//! .unwrap();
//!
//! let request = SelectionRequest::new(pool, Amount::from_units(100), SelectionConfig::default());
//! let result = CoinSelector::new().select(&request).unwrap();
//!
//! match result {
//!     SelectionResult::Success { change_amount, .. } => {
//!         assert_eq!(change_amount, Amount::ZERO);
//!     }
//!     SelectionResult::InsufficientFunds { .. } => unreachable!(),
//! }
//! ```

use crate::coin_selection::strategies::{LargestFirstStrategy, SelectionStrategy};
use crate::coin_selection::types::{
    SelectionConfig, SelectionRequest, SelectionResult, Utxo, UtxoPool,
};
use crate::types::{Amount, WalletError};

/// Coin selector that delegates to a pluggable strategy
///
/// The largest-first greedy strategy is the default. Substituting another
/// strategy changes which combination is chosen, never the shape of the
/// contract.
pub struct CoinSelector {
    strategy: Box<dyn SelectionStrategy>,
}

impl CoinSelector {
    /// Create a selector using the default largest-first strategy.
    pub fn new() -> Self {
        Self {
            strategy: Box::new(LargestFirstStrategy::new()),
        }
    }

    /// Create a selector using the given strategy.
    pub fn with_strategy(strategy: Box<dyn SelectionStrategy>) -> Self {
        Self { strategy }
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Select UTXOs for the given request.
    ///
    /// # Errors
    ///
    /// Precondition violations surface as errors before any selection work
    /// runs: a zero target amount ([`WalletError::InvalidAmount`]), a
    /// malformed config ([`WalletError::InvalidConfig`]), or a target plus
    /// fee that overflows ([`WalletError::AmountMath`]). Insufficient funds
    /// is NOT an error; it is returned as
    /// [`SelectionResult::InsufficientFunds`].
    pub fn select(&self, request: &SelectionRequest) -> Result<SelectionResult, WalletError> {
        request.validate()?;
        let required_total = request.required_total()?;

        let result = self
            .strategy
            .select(&request.pool, request.target_amount, &request.config);

        debug_assert!(result_upholds_invariants(&result, request, required_total));

        Ok(result)
    }
}

impl Default for CoinSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point: build a pool snapshot from a slice and run the
/// default selector over it.
pub fn select_utxos(
    utxos: &[Utxo],
    target_amount: Amount,
    config: &SelectionConfig,
) -> Result<SelectionResult, WalletError> {
    let pool = UtxoPool::from_utxos(utxos.to_vec())?;
    let request = SelectionRequest::new(pool, target_amount, *config);
    CoinSelector::new().select(&request)
}

/// Debug-build check of the result invariants every strategy must uphold.
fn result_upholds_invariants(
    result: &SelectionResult,
    request: &SelectionRequest,
    required_total: Amount,
) -> bool {
    match result {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            let sum: Amount = selected_inputs.iter().map(|u| u.value).sum();
            sum == *selected_sum
                && *selected_sum == required_total + *change_amount
                && selected_inputs.iter().all(|u| request.pool.contains(u))
        }
        SelectionResult::InsufficientFunds {
            pool,
            required_total: reported,
        } => pool.total_value() < *reported && *reported == required_total,
    }
}
