use myc_wallet_common::types::{Address, Amount, BlockId, SensitiveString, TxId, WalletError};

#[test]
fn test_amount_arithmetic() {
    let a = Amount::from_units(100);
    let b = Amount::from_units(13);

    assert_eq!((a + b).to_units(), 113);
    assert_eq!((a - b).to_units(), 87);
    assert_eq!(a.checked_add(b), Some(Amount::from_units(113)));
    assert_eq!(b.checked_sub(a), None);
    assert_eq!(Amount::from_units(u64::MAX).checked_add(b), None);

    assert!(Amount::ZERO.is_zero());
    assert!(!a.is_zero());

    let total: Amount = [a, b, Amount::from_units(7)].into_iter().sum();
    assert_eq!(total.to_units(), 120);
}

#[test]
fn test_amount_ordering_and_display() {
    assert!(Amount::from_units(5) < Amount::from_units(6));
    assert_eq!(Amount::from_units(42).to_string(), "42 myc");
}

#[test]
fn test_txid_round_trips_through_hex() {
    let txid = TxId::from_bytes([0xab; 32]);
    let hex = txid.to_string();
    assert_eq!(hex.len(), 64);
    assert_eq!(hex, "ab".repeat(32));

    let parsed: TxId = hex.parse().unwrap();
    assert_eq!(parsed, txid);
}

#[test]
fn test_txid_rejects_bad_input() {
    let err = "zz".repeat(32).parse::<TxId>().unwrap_err();
    assert!(matches!(err, WalletError::InvalidTransactionId(_)));

    let err = "ab".repeat(16).parse::<TxId>().unwrap_err();
    assert!(matches!(err, WalletError::InvalidTransactionId(_)));
}

#[test]
fn test_txid_serde_uses_hex_strings() {
    let txid = TxId::from_bytes([0x01; 32]);
    let json = serde_json::to_string(&txid).unwrap();
    assert_eq!(json, format!("\"{}\"", "01".repeat(32)));

    let back: TxId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, txid);

    assert!(serde_json::from_str::<TxId>("\"xyz\"").is_err());
}

#[test]
fn test_txid_ordering_is_bytewise() {
    let small = TxId::from_bytes([0x00; 32]);
    let large = TxId::from_bytes([0xff; 32]);
    assert!(small < large);
}

#[test]
fn test_address_and_block_id_are_opaque_strings() {
    let address = Address::new("addr-1");
    assert_eq!(address.as_str(), "addr-1");
    assert_eq!(address.to_string(), "addr-1");

    let block = BlockId::new("block-1");
    assert_eq!(block.as_str(), "block-1");
}

#[test]
fn test_sensitive_string_redacts_debug_output() {
    let secret = SensitiveString::new("hunter2");
    let debug = format!("{:?}", secret);

    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("REDACTED"));
    assert_eq!(secret.len(), 7);
    assert!(!secret.is_empty());
    assert_eq!(secret.expose_secret(), "hunter2");
}

#[test]
fn test_sensitive_string_clear_wipes_content() {
    let mut secret = SensitiveString::new("hunter2");
    secret.clear();
    assert!(secret.is_empty());
    assert_eq!(secret.expose_secret(), "");
}

#[test]
fn test_wallet_error_messages() {
    let err = WalletError::InsufficientFunds {
        needed: 110,
        available: 90,
    };
    assert_eq!(
        err.to_string(),
        "Insufficient funds: needed 110, available 90"
    );

    let err = WalletError::Upstream("node unreachable".to_string());
    assert!(err.to_string().contains("node unreachable"));
}
