//! Configuration management for the MYC wallet.
//!
//! Application settings stored in TOML: a strongly-typed [`Config`] with
//! per-section defaults and validation. The `[wallet]` section carries the
//! coin-selection policy numbers; [`Config::selection_config`] bridges them
//! into the engine's [`SelectionConfig`].
//!
//! No security-critical information lives here. Configuration values are
//! validated before they reach selection or the node client.

use crate::coin_selection::types::{
    SelectionConfig, DEFAULT_DUST_THRESHOLD, DEFAULT_FEE_AMOUNT, DEFAULT_OPTIMIZED_THRESHOLD,
};
use crate::events::{WalletEvent, WalletEventBus};
use crate::types::Amount;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for the MYC wallet
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub node: NodeConfig,
}

/// Wallet-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletConfig {
    /// Flat fee per transaction, in smallest units. Placeholder until fees
    /// are derived from transaction size.
    #[serde(default = "default_fee_amount")]
    pub fee_amount: u64,

    /// Change at or below this is not worth creating.
    #[serde(default = "default_dust_threshold")]
    pub dust_threshold: u64,

    /// Change at or above this is considered excessive.
    #[serde(default = "default_optimized_threshold")]
    pub optimized_threshold: u64,

    /// Unit label shown next to amounts.
    #[serde(default = "default_display_unit")]
    pub display_unit: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            fee_amount: default_fee_amount(),
            dust_threshold: default_dust_threshold(),
            optimized_threshold: default_optimized_threshold(),
            display_unit: default_display_unit(),
        }
    }
}

/// Node connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeConfig {
    /// Base URL of the node the wallet engine talks to.
    #[serde(default = "default_node_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            base_url: default_node_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &str) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str, events: Option<&WalletEventBus>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path, content).map_err(|e| anyhow!("Failed to write config file: {}", e))?;

        if let Some(bus) = events {
            bus.publish(WalletEvent::ConfigUpdated {
                path: path.to_string(),
            });
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.wallet.dust_threshold > self.wallet.optimized_threshold {
            return Err(anyhow!(
                "Invalid selection thresholds: dust {} exceeds optimized {}",
                self.wallet.dust_threshold,
                self.wallet.optimized_threshold
            ));
        }

        if self.node.base_url.is_empty() {
            return Err(anyhow!("Invalid node URL: must not be empty"));
        }

        if self.node.timeout_seconds == 0 {
            return Err(anyhow!("Invalid node timeout: must be greater than 0"));
        }

        Ok(())
    }

    /// Bridge the `[wallet]` section into the selection engine's config.
    pub fn selection_config(&self) -> SelectionConfig {
        SelectionConfig {
            fee_amount: Amount::from_units(self.wallet.fee_amount),
            dust_threshold: Amount::from_units(self.wallet.dust_threshold),
            optimized_threshold: Amount::from_units(self.wallet.optimized_threshold),
        }
    }
}

/// Ensure a configuration file exists at the specified path.
/// If it doesn't exist, create it with default values.
pub fn ensure_config_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        let default_config = Config::default();
        let content = toml::to_string_pretty(&default_config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
            }
        }

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write default config file: {}", e))?;
    }

    Ok(())
}

// Default value functions

fn default_fee_amount() -> u64 {
    DEFAULT_FEE_AMOUNT
}

fn default_dust_threshold() -> u64 {
    DEFAULT_DUST_THRESHOLD
}

fn default_optimized_threshold() -> u64 {
    DEFAULT_OPTIMIZED_THRESHOLD
}

fn default_display_unit() -> String {
    "MYC".to_string()
}

fn default_node_url() -> String {
    "http://localhost:8989".to_string()
}

fn default_timeout() -> u32 {
    30
}
