//! Common data types for the MYC wallet
//!
//! These types represent the shared data structures used across different
//! components of the wallet. They are designed to be serializable and to NOT
//! contain sensitive cryptographic material.
//!
//! Monetary values are fixed-width unsigned integers in the chain's smallest
//! unit. Floating point never touches an amount anywhere in this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An amount of MYC in the chain's smallest unit.
///
/// Wraps a `u64` so that amounts cannot be confused with other integers at
/// API boundaries. Fallible arithmetic is exposed through the `checked_*`
/// methods; the operator impls are reserved for call sites whose bounds are
/// already established (e.g. partial sums over a validated pool).
///
/// # Examples
///
/// ```
/// use myc_wallet_common::types::Amount;
///
/// let a = Amount::from_units(100);
/// let b = Amount::from_units(13);
/// assert_eq!((a + b).to_units(), 113);
/// assert!(a.checked_sub(b).is_some());
/// assert!(b.checked_sub(a).is_none());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a number of smallest units.
    pub const fn from_units(units: u64) -> Self {
        Amount(units)
    }

    /// Get the raw number of smallest units.
    pub const fn to_units(self) -> u64 {
        self.0
    }

    /// Check whether this amount is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked subtraction. Returns `None` if `rhs > self`.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }
}

impl Add for Amount {
    type Output = Amount;

    /// # Panics
    ///
    /// Panics on overflow. Use [`Amount::checked_add`] where the operands are
    /// not already bounded.
    fn add(self, rhs: Amount) -> Amount {
        self.checked_add(rhs).expect("amount addition overflow")
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sub for Amount {
    type Output = Amount;

    /// # Panics
    ///
    /// Panics if `rhs > self`. Use [`Amount::checked_sub`] where the ordering
    /// is not already established.
    fn sub(self, rhs: Amount) -> Amount {
        self.checked_sub(rhs).expect("amount subtraction underflow")
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} myc", self.0)
    }
}

/// Identifier of a transaction, as an opaque 32-byte hash.
///
/// The wallet never interprets the hash; it only needs a total order (for
/// deterministic tie-breaking) and a stable display form (lowercase hex).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxId([u8; 32]);

impl TxId {
    /// Length of a transaction id in bytes.
    pub const LEN: usize = 32;

    /// Create a transaction id from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        TxId(bytes)
    }

    /// Access the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self)
    }
}

impl FromStr for TxId {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)
            .map_err(|e| WalletError::InvalidTransactionId(format!("invalid hex: {}", e)))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
            WalletError::InvalidTransactionId(format!("expected 32 bytes, got {}", b.len()))
        })?;
        Ok(TxId(bytes))
    }
}

impl Serialize for TxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TxId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A wallet address, in the display form produced by the wallet engine.
///
/// Treated as opaque by this crate; validation and derivation belong to the
/// engine behind [`crate::collaborators::AddressRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Address(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a mined block. Opaque to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        BlockId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A string that contains sensitive data and is zeroed when dropped.
///
/// # Security
///
/// Used for passphrases crossing the collaborator boundary. The content is
/// wiped from memory on drop and redacted from `Debug` output. Access the
/// inner value only at the point where it is handed to the wallet engine.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SensitiveString {
    inner: String,
}

impl SensitiveString {
    /// Create a new SensitiveString.
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Expose the secret value.
    ///
    /// # Security
    ///
    /// The returned reference must not be persisted or logged.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Wipe the content, leaving the string empty.
    pub fn clear(&mut self) {
        self.inner.zeroize();
    }

    /// Length in bytes. Safe to use; does not expose the content.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Clone for SensitiveString {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl PartialEq for SensitiveString {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for SensitiveString {}

impl fmt::Debug for SensitiveString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SensitiveString([REDACTED], length={})", self.len())
    }
}

/// Common error types for wallet operations
///
/// # Security
///
/// Error messages are constructed so that they can be surfaced to the UI
/// without leaking wallet state beyond what the user already entered.
///
/// # Examples
///
/// ```
/// use myc_wallet_common::types::WalletError;
///
/// let error = WalletError::InvalidAmount("target amount must be positive".to_string());
/// assert!(error.to_string().contains("Invalid amount"));
/// ```
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid selection config: {0}")]
    InvalidConfig(String),

    #[error("Duplicate input: {0}")]
    DuplicateInput(String),

    #[error("Invalid transaction ID: {0}")]
    InvalidTransactionId(String),

    #[error("Amount math error: {0}")]
    AmountMath(String),

    #[error("Insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
