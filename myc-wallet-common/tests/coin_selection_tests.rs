use myc_wallet_common::coin_selection::{
    select_utxos, CoinSelector, SelectionConfig, SelectionRequest, SelectionResult, Utxo, UtxoPool,
};
use myc_wallet_common::types::{Amount, TxId, WalletError};

// Helper to build a transaction id from a tag byte
fn txid(tag: u8) -> TxId {
    TxId::from_bytes([tag; 32])
}

// Helper to build a UTXO
fn utxo(tag: u8, index: u32, value: u64) -> Utxo {
    Utxo::new(txid(tag), index, Amount::from_units(value))
}

fn select(utxos: Vec<Utxo>, target: u64) -> SelectionResult {
    select_utxos(&utxos, Amount::from_units(target), &SelectionConfig::default())
        .expect("valid request")
}

#[test]
fn test_exact_match_stops_with_zero_change() {
    // One 110 output covers target 100 plus fee 10 exactly
    let result = select(vec![utxo(1, 0, 110)], 100);

    match result {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            assert_eq!(selected_inputs.len(), 1);
            assert_eq!(selected_inputs[0].value.to_units(), 110);
            assert_eq!(selected_sum.to_units(), 110);
            assert_eq!(change_amount, Amount::ZERO);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_optimized_window_accepts_small_change() {
    // 100 alone misses required 110; adding 13 gives sum 113, change 3,
    // strictly inside the (2, 5) window
    let result = select(vec![utxo(1, 0, 100), utxo(2, 0, 13)], 100);

    match result {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            assert_eq!(selected_inputs.len(), 2);
            assert_eq!(selected_inputs[0].value.to_units(), 100);
            assert_eq!(selected_inputs[1].value.to_units(), 13);
            assert_eq!(selected_sum.to_units(), 113);
            assert_eq!(change_amount.to_units(), 3);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_overshoot_is_accepted_as_is() {
    // A single 200 output leaves change 90, far outside the window; the
    // baseline still accepts the first covering combination
    let result = select(vec![utxo(1, 0, 200)], 100);

    match result {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            assert_eq!(selected_inputs.len(), 1);
            assert_eq!(selected_inputs[0].value.to_units(), 200);
            assert_eq!(selected_sum.to_units(), 200);
            assert_eq!(change_amount.to_units(), 90);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_exact_match_across_multiple_inputs() {
    let result = select(vec![utxo(1, 0, 60), utxo(2, 0, 50)], 100);

    match result {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            assert_eq!(selected_inputs.len(), 2);
            assert_eq!(selected_sum.to_units(), 110);
            assert_eq!(change_amount, Amount::ZERO);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_change_at_dust_threshold_is_still_accepted() {
    // Change 2 equals the dust threshold: outside the strict window, but the
    // baseline accepts the combination anyway
    let result = select(vec![utxo(1, 0, 112)], 100);

    match result {
        SelectionResult::Success { change_amount, .. } => {
            assert_eq!(change_amount.to_units(), 2);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_change_at_optimized_threshold_is_still_accepted() {
    let result = select(vec![utxo(1, 0, 115)], 100);

    match result {
        SelectionResult::Success { change_amount, .. } => {
            assert_eq!(change_amount.to_units(), 5);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_insufficient_funds_reports_required_total() {
    let result = select(vec![utxo(1, 0, 50), utxo(2, 0, 40)], 100);

    match result {
        SelectionResult::InsufficientFunds {
            pool,
            required_total,
        } => {
            assert_eq!(required_total.to_units(), 110);
            assert_eq!(pool.total_value().to_units(), 90);
            assert_eq!(pool.len(), 2);
        }
        SelectionResult::Success { .. } => panic!("expected insufficient funds"),
    }
}

#[test]
fn test_empty_pool_is_insufficient() {
    let result = select(Vec::new(), 1);
    assert!(!result.is_success());
}

#[test]
fn test_largest_outputs_are_spent_first() {
    // required 110: the 90 and 30 outputs cover it; the 5 output stays
    let result = select(vec![utxo(1, 0, 5), utxo(2, 0, 90), utxo(3, 0, 30)], 100);

    match result {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            assert_eq!(selected_inputs.len(), 2);
            assert_eq!(selected_inputs[0].value.to_units(), 90);
            assert_eq!(selected_inputs[1].value.to_units(), 30);
            assert_eq!(selected_sum.to_units(), 120);
            assert_eq!(change_amount.to_units(), 10);
        }
        SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
    }
}

#[test]
fn test_determinism_across_pool_permutations() {
    let utxos = vec![
        utxo(1, 0, 40),
        utxo(2, 1, 70),
        utxo(3, 0, 25),
        utxo(4, 2, 70),
        utxo(5, 0, 10),
    ];

    let baseline = select(utxos.clone(), 90);

    let mut reversed = utxos.clone();
    reversed.reverse();
    assert_eq!(select(reversed, 90), baseline);

    let mut rotated = utxos.clone();
    rotated.rotate_left(2);
    assert_eq!(select(rotated, 90), baseline);

    let mut by_value = utxos;
    by_value.sort_by_key(|u| u.value);
    assert_eq!(select(by_value, 90), baseline);
}

#[test]
fn test_equal_values_tie_break_on_outpoint() {
    // Two 70s: the one with the smaller (txid, index) key must come first,
    // however the pool was enumerated
    let a = utxo(2, 1, 70);
    let b = utxo(4, 2, 70);

    for pool in [vec![a.clone(), b.clone()], vec![b.clone(), a.clone()]] {
        match select(pool, 100) {
            SelectionResult::Success {
                selected_inputs, ..
            } => {
                assert_eq!(selected_inputs[0], a);
                assert_eq!(selected_inputs[1], b);
            }
            SelectionResult::InsufficientFunds { .. } => panic!("expected success"),
        }
    }
}

#[test]
fn test_idempotence() {
    let utxos = vec![utxo(1, 0, 100), utxo(2, 0, 13), utxo(3, 0, 200)];
    let config = SelectionConfig::default();

    let first = select_utxos(&utxos, Amount::from_units(100), &config).unwrap();
    let second = select_utxos(&utxos, Amount::from_units(100), &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_zero_target_is_rejected_before_selection() {
    let err = select_utxos(
        &[utxo(1, 0, 100)],
        Amount::ZERO,
        &SelectionConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, WalletError::InvalidAmount(_)));
}

#[test]
fn test_malformed_config_is_rejected() {
    let config = SelectionConfig {
        fee_amount: Amount::from_units(10),
        dust_threshold: Amount::from_units(9),
        optimized_threshold: Amount::from_units(5),
    };

    let err = select_utxos(&[utxo(1, 0, 100)], Amount::from_units(10), &config).unwrap_err();
    assert!(matches!(err, WalletError::InvalidConfig(_)));
}

#[test]
fn test_duplicate_pool_entries_are_rejected() {
    let err = select_utxos(
        &[utxo(1, 0, 100), utxo(1, 0, 100)],
        Amount::from_units(10),
        &SelectionConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, WalletError::DuplicateInput(_)));
}

#[test]
fn test_zero_value_entries_are_rejected() {
    let err = UtxoPool::from_utxos(vec![utxo(1, 0, 0)]).unwrap_err();
    assert!(matches!(err, WalletError::InvalidAmount(_)));
}

#[test]
fn test_overflowing_required_total_is_an_error() {
    let pool = UtxoPool::from_utxos(vec![utxo(1, 0, 100)]).unwrap();
    let request = SelectionRequest::new(
        pool,
        Amount::from_units(u64::MAX),
        SelectionConfig::default(),
    );

    let err = CoinSelector::new().select(&request).unwrap_err();
    assert!(matches!(err, WalletError::AmountMath(_)));
}

#[test]
fn test_selector_reports_default_strategy_name() {
    assert_eq!(CoinSelector::new().strategy_name(), "LargestFirst");
}
