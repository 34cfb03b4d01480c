//! MYC Wallet Common Library
//!
//! This crate provides the shared functionality behind the MYC wallet UI:
//! core types, the coin-selection engine, and the plumbing that connects a
//! UI toolkit to the external wallet engine.
//!
//! # Modules
//!
//! - `types`: core domain types (amounts, ids, errors, sensitive strings)
//! - `coin_selection`: coin-selection engine, change policy and strategies
//! - `collaborators`: contracts for the external wallet engine and node
//! - `events`: typed wallet commands, events and the event bus
//! - `wallet_state`: loadable address/balance state behind the screens
//! - `wallet_operations`: send and mining flows, command dispatch
//! - `config`: TOML configuration management
//! - `logging`: logging infrastructure
//!
//! # Design
//!
//! The coin selector is pure and deterministic; everything that talks to the
//! outside world is injected through the `collaborators` traits and observed
//! through the typed event bus. The selector never calls a collaborator, and
//! a collaborator failure never changes what the selector would have chosen.

/// Core domain types for the MYC wallet
pub mod types;

/// Coin-selection engine and strategies
pub mod coin_selection;

/// Contracts for the external wallet engine
pub mod collaborators;

/// Typed wallet commands, events and the event bus
pub mod events;

/// Loadable address/balance state
pub mod wallet_state;

/// Send and mining flows
pub mod wallet_operations;

/// Configuration management
pub mod config;

/// Logging functionality
pub mod logging;

/// Re-export coin selection types
pub use coin_selection::{
    select_utxos, BranchAndBoundStrategy, CoinSelector, LargestFirstStrategy, SelectionConfig,
    SelectionRequest, SelectionResult, SelectionStrategy, Utxo, UtxoPool,
};

/// Re-export common types for convenience
pub use types::{Address, Amount, BlockId, SensitiveString, TxId, WalletError};

/// Re-export collaborator contracts
pub use collaborators::{
    AddressRepository, BalanceRepository, BlockMiner, TransactionAssembler, WalletHandle,
};

/// Re-export event and state types
pub use events::{UtxoRef, WalletCommand, WalletEvent, WalletEventBus};
pub use wallet_operations::WalletController;
pub use wallet_state::{Loadable, WalletState};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if the library was built in debug mode
pub const fn is_debug_build() -> bool {
    cfg!(debug_assertions)
}

/// Library initialization
///
/// Sets up logging with the default configuration. Safe to call multiple
/// times.
///
/// # Returns
/// * Result with () on success, or an error message string
pub fn init() -> Result<(), String> {
    logging::init(&logging::LogConfig::default())
}
