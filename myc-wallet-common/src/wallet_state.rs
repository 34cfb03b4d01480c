//! Reactive wallet state
//!
//! Holds the address list, the selected address and the balance snapshot the
//! UI renders from. Each refreshable value is a [`Loadable`], an explicit
//! three-state machine (`Idle | Loading -> Ready | Failed`) that a refresh
//! command re-enters at will.
//!
//! Collaborators are injected as type parameters rather than reached through
//! module-level singletons, so tests (and alternative engines) supply their
//! own. Refreshes publish [`WalletEvent`]s on the shared bus; the UI layer
//! subscribes and re-renders.

use crate::coin_selection::types::UtxoPool;
use crate::collaborators::{AddressRepository, BalanceRepository};
use crate::events::{WalletEvent, WalletEventBus};
use crate::logging::{log_ui, LogLevel};
use crate::types::{Address, WalletError};
use serde_json::json;
use std::sync::Arc;

/// Loading state of a value that is refreshed from an external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// No load has been requested yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// The most recent load succeeded.
    Ready(T),
    /// The most recent load failed.
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Loadable::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Loadable::Failed(_))
    }

    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Address and balance state behind the wallet screens.
pub struct WalletState<A, B> {
    address_repo: A,
    balance_repo: B,
    events: Arc<WalletEventBus>,
    addresses: Loadable<Vec<Address>>,
    selected_address: Option<Address>,
    balance: Loadable<UtxoPool>,
}

impl<A, B> WalletState<A, B>
where
    A: AddressRepository,
    B: BalanceRepository,
{
    /// Create a new wallet state with injected collaborators.
    pub fn new(address_repo: A, balance_repo: B, events: Arc<WalletEventBus>) -> Self {
        Self {
            address_repo,
            balance_repo,
            events,
            addresses: Loadable::Idle,
            selected_address: None,
            balance: Loadable::Idle,
        }
    }

    /// Current address list state.
    pub fn addresses(&self) -> &Loadable<Vec<Address>> {
        &self.addresses
    }

    /// Currently selected address, if any.
    pub fn selected_address(&self) -> Option<&Address> {
        self.selected_address.as_ref()
    }

    /// Current balance state.
    pub fn balance(&self) -> &Loadable<UtxoPool> {
        &self.balance
    }

    /// The balance snapshot, if one is loaded.
    pub fn pool_snapshot(&self) -> Option<&UtxoPool> {
        self.balance.ready()
    }

    /// Access the injected address repository.
    pub fn address_repo(&self) -> &A {
        &self.address_repo
    }

    /// Reload the address list from the engine.
    ///
    /// Upstream errors are recorded in the state AND returned unchanged; the
    /// UI decides whether to retry.
    pub fn refresh_addresses(&mut self) -> Result<(), WalletError> {
        self.addresses = Loadable::Loading;

        match self.address_repo.list_addresses() {
            Ok(addresses) => {
                self.events.publish(WalletEvent::AddressListRefreshed {
                    count: addresses.len(),
                });
                self.addresses = Loadable::Ready(addresses);
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                log_ui(
                    LogLevel::Warn,
                    "address list refresh failed",
                    Some(json!({ "reason": reason })),
                );
                self.events.publish(WalletEvent::AddressListRefreshFailed {
                    reason: reason.clone(),
                });
                self.addresses = Loadable::Failed(reason);
                Err(err)
            }
        }
    }

    /// Re-snapshot the balance of the selected address.
    ///
    /// With no address selected the balance is an empty, ready pool. A
    /// successful refresh replaces the snapshot wholesale; a selection
    /// running against the previous snapshot is unaffected.
    pub fn refresh_balance(&mut self) -> Result<(), WalletError> {
        let address = match &self.selected_address {
            Some(address) => address.clone(),
            None => {
                self.balance = Loadable::Ready(UtxoPool::empty());
                return Ok(());
            }
        };

        self.balance = Loadable::Loading;
        self.events.publish(WalletEvent::BalanceRefreshStarted {
            address: address.to_string(),
        });

        let loaded = self
            .balance_repo
            .list_utxos(&address)
            .and_then(UtxoPool::from_utxos);

        match loaded {
            Ok(pool) => {
                self.events.publish(WalletEvent::BalanceRefreshed {
                    address: address.to_string(),
                    utxo_count: pool.len(),
                    total: pool.total_value().to_units(),
                });
                self.balance = Loadable::Ready(pool);
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                log_ui(
                    LogLevel::Warn,
                    "balance refresh failed",
                    Some(json!({ "address": address.to_string(), "reason": reason })),
                );
                self.events.publish(WalletEvent::BalanceRefreshFailed {
                    address: address.to_string(),
                    reason: reason.clone(),
                });
                self.balance = Loadable::Failed(reason);
                Err(err)
            }
        }
    }

    /// Change the selected address and refresh its balance.
    pub fn select_address(&mut self, address: Address) -> Result<(), WalletError> {
        self.selected_address = Some(address);
        self.balance = Loadable::Idle;
        self.refresh_balance()
    }
}
