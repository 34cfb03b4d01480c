//! Send and mining flows
//!
//! Glue between the pure coin-selection engine and the external wallet
//! engine: snapshot in hand, select inputs, hand them to the transaction
//! assembler, publish events, refresh. Nothing here retries; upstream errors
//! pass through unchanged and the UI decides what to do with them.
//!
//! [`WalletController`] dispatches [`WalletCommand`] values onto these flows
//! and the [`WalletState`] transitions, which is all a UI toolkit needs to
//! wire up a wallet screen.

use crate::coin_selection::selector::CoinSelector;
use crate::coin_selection::types::{SelectionConfig, SelectionRequest, SelectionResult, UtxoPool};
use crate::collaborators::{AddressRepository, BalanceRepository, BlockMiner, TransactionAssembler};
use crate::events::{UtxoRef, WalletCommand, WalletEvent, WalletEventBus};
use crate::logging::{log_selection, log_transaction, sanitize_for_logging, LogLevel};
use crate::types::{Address, Amount, BlockId, SensitiveString, TxId, WalletError};
use crate::wallet_state::WalletState;
use serde_json::json;
use std::sync::Arc;

/// Select inputs for a prospective send and publish the outcome as a preview
/// event, without touching the assembler.
///
/// Cheap enough to run on every keystroke of the amount field; the result
/// carries the fee and change the UI displays.
pub fn preview_send(
    selector: &CoinSelector,
    pool: &UtxoPool,
    amount: Amount,
    config: &SelectionConfig,
    events: Option<&WalletEventBus>,
) -> Result<SelectionResult, WalletError> {
    let request = SelectionRequest::new(pool.clone(), amount, *config);
    let result = selector.select(&request)?;

    if let SelectionResult::Success {
        selected_inputs,
        change_amount,
        ..
    } = &result
    {
        log_selection(
            LogLevel::Debug,
            "selection preview",
            Some(json!({
                "strategy": selector.strategy_name(),
                "input_count": selected_inputs.len(),
                "change_amount": change_amount.to_units(),
            })),
        );
    }

    if let Some(bus) = events {
        match &result {
            SelectionResult::Success {
                selected_inputs,
                change_amount,
                ..
            } => {
                bus.publish(WalletEvent::SelectionPreviewed {
                    strategy: selector.strategy_name().to_string(),
                    target_amount: amount.to_units(),
                    fee_amount: config.fee_amount.to_units(),
                    change_amount: change_amount.to_units(),
                    inputs: selected_inputs.iter().map(UtxoRef::from).collect(),
                });
            }
            SelectionResult::InsufficientFunds {
                pool,
                required_total,
            } => {
                bus.publish(WalletEvent::SelectionFailed {
                    strategy: selector.strategy_name().to_string(),
                    target_amount: amount.to_units(),
                    required_total: required_total.to_units(),
                    available: pool.total_value().to_units(),
                });
            }
        }
    }

    Ok(result)
}

/// Select inputs and hand them to the transaction assembler.
///
/// Insufficient funds becomes [`WalletError::InsufficientFunds`] here: a
/// preview can shrug it off, an actual send cannot.
#[allow(clippy::too_many_arguments)]
pub fn send_transaction<T: TransactionAssembler>(
    assembler: &T,
    selector: &CoinSelector,
    pool: &UtxoPool,
    from: &Address,
    passphrase: &SensitiveString,
    to: &Address,
    amount: Amount,
    config: &SelectionConfig,
    events: Option<&WalletEventBus>,
) -> Result<TxId, WalletError> {
    let request = SelectionRequest::new(pool.clone(), amount, *config);

    match selector.select(&request)? {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            log_transaction(
                LogLevel::Info,
                "submitting transaction",
                Some(json!({
                    "strategy": selector.strategy_name(),
                    "input_count": selected_inputs.len(),
                    "selected_sum": selected_sum.to_units(),
                    "change_amount": change_amount.to_units(),
                })),
            );

            let tx_id = assembler.create_transaction(
                from,
                passphrase,
                to,
                amount,
                config.fee_amount,
                &selected_inputs,
            )?;

            log_transaction(
                LogLevel::Info,
                "transaction submitted",
                Some(json!({ "tx_id": sanitize_for_logging(&tx_id.to_string()) })),
            );

            if let Some(bus) = events {
                bus.publish(WalletEvent::TransactionSubmitted {
                    tx_id: tx_id.to_string(),
                    amount: amount.to_units(),
                    fee: config.fee_amount.to_units(),
                });
            }

            Ok(tx_id)
        }
        SelectionResult::InsufficientFunds {
            pool,
            required_total,
        } => {
            if let Some(bus) = events {
                bus.publish(WalletEvent::SelectionFailed {
                    strategy: selector.strategy_name().to_string(),
                    target_amount: amount.to_units(),
                    required_total: required_total.to_units(),
                    available: pool.total_value().to_units(),
                });
            }

            Err(WalletError::InsufficientFunds {
                needed: required_total.to_units(),
                available: pool.total_value().to_units(),
            })
        }
    }
}

/// Mine one block and publish the result.
pub fn mine_block<M: BlockMiner>(
    miner: &M,
    events: Option<&WalletEventBus>,
) -> Result<BlockId, WalletError> {
    let block_id = miner.mine_block()?;

    if let Some(bus) = events {
        bus.publish(WalletEvent::BlockMined {
            block_id: block_id.to_string(),
        });
    }

    Ok(block_id)
}

/// Command dispatcher owning the wallet state and the injected engine
/// services.
///
/// One controller per wallet screen. The UI translates user interactions
/// into [`WalletCommand`] values, hands them to [`WalletController::handle`],
/// and re-renders from [`WalletController::state`] and the event bus.
pub struct WalletController<A, B, T, M> {
    state: WalletState<A, B>,
    assembler: T,
    miner: M,
    selector: CoinSelector,
    config: SelectionConfig,
    events: Arc<WalletEventBus>,
}

impl<A, B, T, M> WalletController<A, B, T, M>
where
    A: AddressRepository,
    B: BalanceRepository,
    T: TransactionAssembler,
    M: BlockMiner,
{
    /// Create a controller with the default selector and the given config.
    pub fn new(
        address_repo: A,
        balance_repo: B,
        assembler: T,
        miner: M,
        config: SelectionConfig,
    ) -> Self {
        let events = Arc::new(WalletEventBus::new());
        Self {
            state: WalletState::new(address_repo, balance_repo, Arc::clone(&events)),
            assembler,
            miner,
            selector: CoinSelector::new(),
            config,
            events,
        }
    }

    /// Replace the selection strategy (e.g. with branch-and-bound).
    pub fn set_selector(&mut self, selector: CoinSelector) {
        self.selector = selector;
    }

    /// The shared event bus; subscribe before issuing commands.
    pub fn events(&self) -> Arc<WalletEventBus> {
        Arc::clone(&self.events)
    }

    /// The wallet state the UI renders from.
    pub fn state(&self) -> &WalletState<A, B> {
        &self.state
    }

    /// Dispatch one command.
    pub fn handle(&mut self, command: WalletCommand) -> Result<(), WalletError> {
        match command {
            WalletCommand::CreateWallet { passphrase } => {
                let handle = self.state.address_repo().create_wallet(&passphrase)?;
                self.events.publish(WalletEvent::WalletCreated {
                    address: handle.address.to_string(),
                });
                self.state.refresh_addresses()
            }
            WalletCommand::RefreshAddresses => self.state.refresh_addresses(),
            WalletCommand::RefreshBalance => self.state.refresh_balance(),
            WalletCommand::SelectAddress(address) => self.state.select_address(address),
            WalletCommand::PreviewSend { amount } => {
                let pool = self.loaded_pool()?;
                preview_send(
                    &self.selector,
                    &pool,
                    amount,
                    &self.config,
                    Some(self.events.as_ref()),
                )?;
                Ok(())
            }
            WalletCommand::Send {
                to,
                amount,
                passphrase,
            } => {
                let from = self
                    .state
                    .selected_address()
                    .cloned()
                    .ok_or_else(|| WalletError::NotFound("no address selected".to_string()))?;
                let pool = self.loaded_pool()?;

                send_transaction(
                    &self.assembler,
                    &self.selector,
                    &pool,
                    &from,
                    &passphrase,
                    &to,
                    amount,
                    &self.config,
                    Some(self.events.as_ref()),
                )?;

                self.state.refresh_balance()
            }
            WalletCommand::MineBlock => {
                mine_block(&self.miner, Some(self.events.as_ref()))?;
                self.state.refresh_balance()
            }
        }
    }

    /// The loaded balance snapshot, cloned so selection works on an immutable
    /// copy even while a refresh replaces the state behind it.
    fn loaded_pool(&self) -> Result<UtxoPool, WalletError> {
        self.state
            .pool_snapshot()
            .cloned()
            .ok_or_else(|| WalletError::NotFound("balance not loaded".to_string()))
    }
}
