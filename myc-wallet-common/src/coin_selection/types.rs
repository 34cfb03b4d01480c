//! Core types for coin selection
//!
//! This module defines the fundamental types used for coin selection: the
//! [`Utxo`] and [`UtxoPool`] structures, the [`SelectionConfig`] numeric
//! policy, and the selection request/result types.
//!
//! # Key Types
//!
//! - [`Utxo`]: a single unspent transaction output
//! - [`UtxoPool`]: an immutable, validated snapshot of spendable outputs
//! - [`SelectionConfig`]: fee and change-window parameters
//! - [`SelectionRequest`]: one selection call, built fresh per send intent
//! - [`SelectionResult`]: outcome consumed by the transaction assembler
//!
//! # Example
//!
//! ```
//! use myc_wallet_common::coin_selection::types::{SelectionConfig, Utxo, UtxoPool};
//! use myc_wallet_common::types::{Amount, TxId};
//!
//! let utxo = Utxo::new(TxId::from_bytes([1u8; 32]), 0, Amount::from_units(110));
//! let pool = UtxoPool::from_utxos(vec![utxo]).unwrap();
//! assert_eq!(pool.total_value(), Amount::from_units(110));
//!
//! let config = SelectionConfig::default();
//! assert_eq!(config.fee_amount, Amount::from_units(10));
//! ```

use crate::types::{Amount, TxId, WalletError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default fee charged per transaction, in smallest units.
///
/// A static placeholder until fees are derived from transaction size.
pub const DEFAULT_FEE_AMOUNT: u64 = 10;

/// Default dust threshold: change at or below this is not worth creating.
pub const DEFAULT_DUST_THRESHOLD: u64 = 2;

/// Default upper bound of the acceptable-change window.
pub const DEFAULT_OPTIMIZED_THRESHOLD: u64 = 5;

/// Unspent transaction output (UTXO) representation
///
/// A UTXO is an unspent output from a previous transaction that can be used
/// as an input in a new transaction.
///
/// # Fields
///
/// * `prev_tx_id` - Hash of the transaction that created this output
/// * `prev_out_index` - Index of the output within that transaction
/// * `value` - Amount carried by this output; always positive inside a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Hash of the transaction that created this output
    pub prev_tx_id: TxId,

    /// Index of the output within that transaction
    pub prev_out_index: u32,

    /// Amount carried by this output
    pub value: Amount,
}

impl Utxo {
    /// Create a new UTXO.
    pub fn new(prev_tx_id: TxId, prev_out_index: u32, value: Amount) -> Self {
        Self {
            prev_tx_id,
            prev_out_index,
            value,
        }
    }

    /// Uniqueness key of this UTXO within a pool.
    pub fn key(&self) -> (TxId, u32) {
        (self.prev_tx_id, self.prev_out_index)
    }

    /// Identifier for display and event payloads.
    pub fn id(&self) -> String {
        format!("{}:{}", self.prev_tx_id, self.prev_out_index)
    }
}

/// Immutable snapshot of candidate spendable outputs
///
/// A pool is captured once from the balance provider and never mutated.
/// Construction validates the snapshot so that selection strategies can rely
/// on three invariants without re-checking them:
///
/// - every entry has a positive value
/// - entries are unique by `(prev_tx_id, prev_out_index)`
/// - the total value fits in a `u64`, so partial sums cannot overflow
///
/// Concurrent balance refreshes cannot corrupt an in-progress selection: the
/// caller re-snapshots and re-invokes after a refresh, and the engine only
/// ever observes the snapshot it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtxoPool {
    utxos: Vec<Utxo>,
    total_value: Amount,
}

impl UtxoPool {
    /// Create an empty pool.
    pub fn empty() -> Self {
        Self {
            utxos: Vec::new(),
            total_value: Amount::ZERO,
        }
    }

    /// Create a pool from a list of UTXOs, validating the snapshot.
    ///
    /// # Errors
    ///
    /// * [`WalletError::InvalidAmount`] if any entry has a zero value
    /// * [`WalletError::DuplicateInput`] if two entries share a key
    /// * [`WalletError::AmountMath`] if the total value overflows a `u64`
    pub fn from_utxos(utxos: Vec<Utxo>) -> Result<Self, WalletError> {
        let mut seen = HashSet::with_capacity(utxos.len());
        let mut total_value = Amount::ZERO;

        for utxo in &utxos {
            if utxo.value.is_zero() {
                return Err(WalletError::InvalidAmount(format!(
                    "zero-value output {}",
                    utxo.id()
                )));
            }
            if !seen.insert(utxo.key()) {
                return Err(WalletError::DuplicateInput(utxo.id()));
            }
            total_value = total_value
                .checked_add(utxo.value)
                .ok_or_else(|| WalletError::AmountMath("pool total overflows u64".to_string()))?;
        }

        Ok(Self { utxos, total_value })
    }

    /// All UTXOs in this pool, in snapshot order.
    pub fn as_slice(&self) -> &[Utxo] {
        &self.utxos
    }

    /// Look up a UTXO by key.
    pub fn get(&self, prev_tx_id: &TxId, prev_out_index: u32) -> Option<&Utxo> {
        self.utxos
            .iter()
            .find(|u| u.prev_tx_id == *prev_tx_id && u.prev_out_index == prev_out_index)
    }

    /// Check whether the pool contains the given UTXO.
    pub fn contains(&self, utxo: &Utxo) -> bool {
        self.get(&utxo.prev_tx_id, utxo.prev_out_index).is_some()
    }

    /// Total value of all UTXOs in this pool.
    ///
    /// Computed once at construction; calling this is free.
    pub fn total_value(&self) -> Amount {
        self.total_value
    }

    /// Number of UTXOs in this pool.
    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    /// Check whether this pool is empty.
    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }
}

/// Numeric policy consulted when deciding whether a candidate combination of
/// inputs is good enough.
///
/// Invariant: `dust_threshold <= optimized_threshold`, checked by
/// [`SelectionConfig::validate`] before any selection work runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Fee charged for the transaction. Caller-supplied and static for now;
    /// a size-based fee model replaces this later.
    pub fee_amount: Amount,

    /// Change at or below this threshold is not economically meaningful.
    pub dust_threshold: Amount,

    /// Change at or above this threshold is considered excessive.
    pub optimized_threshold: Amount,
}

impl SelectionConfig {
    /// Check the config invariants.
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.dust_threshold > self.optimized_threshold {
            return Err(WalletError::InvalidConfig(format!(
                "dust threshold {} exceeds optimized threshold {}",
                self.dust_threshold, self.optimized_threshold
            )));
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            fee_amount: Amount::from_units(DEFAULT_FEE_AMOUNT),
            dust_threshold: Amount::from_units(DEFAULT_DUST_THRESHOLD),
            optimized_threshold: Amount::from_units(DEFAULT_OPTIMIZED_THRESHOLD),
        }
    }
}

/// One coin-selection call.
///
/// Built fresh per user send intent (per amount edit or submit), never
/// mutated, never persisted. The engine holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Snapshot of candidate spendable outputs.
    pub pool: UtxoPool,

    /// Amount the recipient should receive, excluding the fee.
    pub target_amount: Amount,

    /// Numeric policy for this call.
    pub config: SelectionConfig,
}

impl SelectionRequest {
    /// Create a new selection request.
    pub fn new(pool: UtxoPool, target_amount: Amount, config: SelectionConfig) -> Self {
        Self {
            pool,
            target_amount,
            config,
        }
    }

    /// Check the request preconditions.
    ///
    /// Pool invariants are enforced at [`UtxoPool`] construction, so only the
    /// target amount and the config are checked here.
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.target_amount.is_zero() {
            return Err(WalletError::InvalidAmount(
                "target amount must be positive".to_string(),
            ));
        }
        self.config.validate()
    }

    /// Total the selected inputs must cover: target plus fee.
    pub fn required_total(&self) -> Result<Amount, WalletError> {
        self.target_amount
            .checked_add(self.config.fee_amount)
            .ok_or_else(|| {
                WalletError::AmountMath("target amount plus fee overflows u64".to_string())
            })
    }
}

/// Result of coin selection
///
/// Either success with the chosen inputs, their sum and the resulting change,
/// or insufficient funds. Insufficiency is a normal, expected outcome and is
/// represented as a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// Selection successful
    ///
    /// Invariant: `selected_sum = target_amount + fee_amount + change_amount`
    /// and `selected_inputs` is a duplicate-free subset of the request pool,
    /// in the algorithm's own ordering.
    Success {
        /// Selected inputs, in the algorithm's ordering
        selected_inputs: Vec<Utxo>,
        /// Sum of the selected inputs
        selected_sum: Amount,
        /// Change returned to the sender
        change_amount: Amount,
    },

    /// No subset of the pool reaches `target_amount + fee_amount`
    InsufficientFunds {
        /// The pool that was searched
        pool: UtxoPool,
        /// The total that could not be covered
        required_total: Amount,
    },
}

impl SelectionResult {
    /// Check whether this result is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, SelectionResult::Success { .. })
    }
}
