//! Contracts for the external wallet engine
//!
//! The wallet UI plumbing consumes four opaque, fallible services: key and
//! address management, balance lookup, transaction assembly/signing, and
//! block mining. This crate defines only their contracts; implementations
//! live with the engine (WASM bindings, node RPC client, test mocks).
//!
//! Errors from these services surface as [`WalletError::Upstream`] and are
//! propagated unchanged: this crate never retries or swallows them, and the
//! coin selector never calls them at all. Retry and user-facing messaging are
//! the UI layer's responsibility.

use crate::coin_selection::types::Utxo;
use crate::types::{Address, Amount, BlockId, SensitiveString, TxId, WalletError};

/// Handle to a newly created wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletHandle {
    /// Primary address of the new wallet.
    pub address: Address,
}

/// Key generation and address listing.
pub trait AddressRepository {
    /// Create a new wallet protected by the given passphrase.
    fn create_wallet(&self, passphrase: &SensitiveString) -> Result<WalletHandle, WalletError>;

    /// List the addresses known to the engine.
    fn list_addresses(&self) -> Result<Vec<Address>, WalletError>;
}

/// Balance lookup: the spendable outputs of one address.
pub trait BalanceRepository {
    /// List the unspent outputs currently spendable by `address`.
    fn list_utxos(&self, address: &Address) -> Result<Vec<Utxo>, WalletError>;
}

/// Transaction assembly and signing.
pub trait TransactionAssembler {
    /// Assemble, sign and submit a transaction spending `inputs`.
    ///
    /// The inputs are exactly the ones chosen by coin selection; the engine
    /// must not reselect.
    #[allow(clippy::too_many_arguments)]
    fn create_transaction(
        &self,
        from: &Address,
        passphrase: &SensitiveString,
        to: &Address,
        amount: Amount,
        fee: Amount,
        inputs: &[Utxo],
    ) -> Result<TxId, WalletError>;
}

/// Block production on the local dev chain.
pub trait BlockMiner {
    /// Mine one block, confirming pending transactions.
    fn mine_block(&self) -> Result<BlockId, WalletError>;
}
