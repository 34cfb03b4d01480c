//! Coin selection module
//!
//! Given a snapshot of spendable outputs, a target amount and a fee, decide
//! which outputs to consume and how much change results. The selection
//! strategy impacts transaction fees, change output amounts and UTXO
//! fragmentation.
//!
//! # Module Structure
//!
//! - `types.rs` - Core data structures: [`Utxo`], [`UtxoPool`],
//!   [`SelectionConfig`], [`SelectionRequest`], [`SelectionResult`]
//! - `policy.rs` - Pure change-policy predicates
//! - `selector.rs` - Main selector implementation (Strategy pattern context)
//! - `strategies/` - Selection algorithms
//!   - `largest_first.rs` - Largest-first greedy walk with an acceptance
//!     window (the default)
//!   - `branch_and_bound.rs` - Budgeted search minimizing the change amount
//!
//! # Guarantees
//!
//! - **Deterministic**: a pool is ordered by value descending with ties broken
//!   by `(prev_tx_id, prev_out_index)`, so the same pool-as-a-set always
//!   yields the same result regardless of enumeration order.
//! - **Pure**: no I/O, no shared state; safe to call per keystroke for a live
//!   fee/change preview.
//! - **Validated up front**: bad targets, bad configs and malformed pools are
//!   rejected before any selection work; insufficiency is an ordinary result
//!   value.

pub mod policy;
pub mod selector;
pub mod strategies;
pub mod types;

pub use selector::{select_utxos, CoinSelector};
pub use strategies::{BranchAndBoundStrategy, LargestFirstStrategy, SelectionStrategy};
pub use types::{SelectionConfig, SelectionRequest, SelectionResult, Utxo, UtxoPool};
