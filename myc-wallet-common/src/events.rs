//! Typed wallet events and commands
//!
//! The UI layer drives the wallet with [`WalletCommand`] values and observes
//! it through [`WalletEvent`] values published on a [`WalletEventBus`] -
//! typed replacements for ad-hoc callback handlers, decoupled from any
//! specific UI toolkit.
//!
//! Event payloads carry only display-safe data (truncatable ids, counts,
//! amounts). They never contain passphrases or key material.

use crate::coin_selection::types::Utxo;
use crate::types::{Address, Amount, SensitiveString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Serializable reference to a UTXO, used in event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoRef {
    /// Transaction id as a hex string
    pub tx_id: String,
    /// Output index
    pub index: u32,
}

impl From<&Utxo> for UtxoRef {
    fn from(utxo: &Utxo) -> Self {
        Self {
            tx_id: utxo.prev_tx_id.to_string(),
            index: utxo.prev_out_index,
        }
    }
}

/// Domain events published by the wallet plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletEvent {
    /// A wallet was created through the address repository.
    WalletCreated { address: String },

    /// The address list was refreshed.
    AddressListRefreshed { count: usize },

    /// Refreshing the address list failed.
    AddressListRefreshFailed { reason: String },

    /// A balance refresh started for an address.
    BalanceRefreshStarted { address: String },

    /// A balance refresh completed.
    BalanceRefreshed {
        address: String,
        utxo_count: usize,
        total: u64,
    },

    /// A balance refresh failed.
    BalanceRefreshFailed { address: String, reason: String },

    /// A selection preview completed for a prospective send.
    SelectionPreviewed {
        strategy: String,
        target_amount: u64,
        fee_amount: u64,
        change_amount: u64,
        inputs: Vec<UtxoRef>,
    },

    /// Selection could not cover the requested total.
    SelectionFailed {
        strategy: String,
        target_amount: u64,
        required_total: u64,
        available: u64,
    },

    /// A transaction was assembled and submitted.
    TransactionSubmitted {
        tx_id: String,
        amount: u64,
        fee: u64,
    },

    /// A block was mined on the dev chain.
    BlockMined { block_id: String },

    /// Configuration was saved to disk.
    ConfigUpdated { path: String },
}

impl WalletEvent {
    /// Topic string used for filtered subscriptions.
    pub fn topic(&self) -> &'static str {
        match self {
            WalletEvent::WalletCreated { .. } => "wallet_created",
            WalletEvent::AddressListRefreshed { .. } => "address_list_refreshed",
            WalletEvent::AddressListRefreshFailed { .. } => "address_list_refresh_failed",
            WalletEvent::BalanceRefreshStarted { .. } => "balance_refresh_started",
            WalletEvent::BalanceRefreshed { .. } => "balance_refreshed",
            WalletEvent::BalanceRefreshFailed { .. } => "balance_refresh_failed",
            WalletEvent::SelectionPreviewed { .. } => "selection_previewed",
            WalletEvent::SelectionFailed { .. } => "selection_failed",
            WalletEvent::TransactionSubmitted { .. } => "transaction_submitted",
            WalletEvent::BlockMined { .. } => "block_mined",
            WalletEvent::ConfigUpdated { .. } => "config_updated",
        }
    }
}

/// Commands the UI issues against the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    /// Create a new wallet with the given passphrase.
    CreateWallet { passphrase: SensitiveString },

    /// Reload the address list from the engine.
    RefreshAddresses,

    /// Re-snapshot the balance of the selected address.
    RefreshBalance,

    /// Change the selected address; triggers a balance refresh.
    SelectAddress(Address),

    /// Run a selection preview for the given amount, without sending.
    PreviewSend { amount: Amount },

    /// Send `amount` to `to` from the selected address.
    Send {
        to: Address,
        amount: Amount,
        passphrase: SensitiveString,
    },

    /// Mine one block and refresh the balance.
    MineBlock,
}

/// Simple message bus for wallet events
///
/// Subscribers register per topic (or `"all"`) and receive events over a
/// standard mpsc channel. Sends to disconnected receivers are ignored, so
/// dropped subscribers cost nothing.
pub struct WalletEventBus {
    subscribers: Arc<Mutex<HashMap<String, Vec<Sender<WalletEvent>>>>>,
}

impl WalletEventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Subscribe to every event.
    pub fn subscribe_all(&self) -> Receiver<WalletEvent> {
        self.subscribe("all")
    }

    /// Subscribe to one topic (see [`WalletEvent::topic`]), or `"all"`.
    pub fn subscribe(&self, topic: &str) -> Receiver<WalletEvent> {
        let (sender, receiver) = channel();

        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers
            .entry(topic.to_lowercase())
            .or_insert_with(Vec::new)
            .push(sender);

        receiver
    }

    /// Publish an event to its topic subscribers and to `"all"` subscribers.
    pub fn publish(&self, event: WalletEvent) {
        let subscribers = self.subscribers.lock().unwrap();

        if let Some(topic_subscribers) = subscribers.get(event.topic()) {
            for subscriber in topic_subscribers {
                // Ignore errors from closed channels
                let _ = subscriber.send(event.clone());
            }
        }

        if let Some(all_subscribers) = subscribers.get("all") {
            for subscriber in all_subscribers {
                let _ = subscriber.send(event.clone());
            }
        }
    }

    /// Number of registered subscribers across all topics.
    pub fn subscriber_count(&self) -> usize {
        let subscribers = self.subscribers.lock().unwrap();
        subscribers.values().map(|v| v.len()).sum()
    }
}

impl Default for WalletEventBus {
    fn default() -> Self {
        Self::new()
    }
}
