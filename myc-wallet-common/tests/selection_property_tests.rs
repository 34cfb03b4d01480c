//! Property-based tests for the coin-selection engine
//!
//! These tests use quickcheck to verify the engine's contract over arbitrary
//! pools: coverage, insufficiency, the change identity, determinism under
//! permutation, and the branch-and-bound acceptance predicate.

use myc_wallet_common::coin_selection::policy;
use myc_wallet_common::coin_selection::{
    BranchAndBoundStrategy, CoinSelector, LargestFirstStrategy, SelectionConfig, SelectionRequest,
    SelectionResult, SelectionStrategy, Utxo, UtxoPool,
};
use myc_wallet_common::types::{Amount, TxId};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use std::collections::HashSet;

// Helper to generate a valid pool: unique keys, positive bounded values
#[derive(Clone, Debug)]
struct ArbPool(Vec<Utxo>);

impl Arbitrary for ArbPool {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 12;
        let mut seen = HashSet::new();
        let mut utxos = Vec::new();

        for _ in 0..len {
            let tag = u8::arbitrary(g);
            let index = u32::arbitrary(g) % 4;
            if !seen.insert((tag, index)) {
                continue;
            }
            let value = u64::arbitrary(g) % 1_000 + 1;
            utxos.push(Utxo::new(
                TxId::from_bytes([tag; 32]),
                index,
                Amount::from_units(value),
            ));
        }

        ArbPool(utxos)
    }
}

// Helper to generate a positive target amount in the pools' value range
#[derive(Clone, Debug)]
struct ArbTarget(u64);

impl Arbitrary for ArbTarget {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbTarget(u64::arbitrary(g) % 2_000 + 1)
    }
}

fn run_default(utxos: &[Utxo], target: u64) -> SelectionResult {
    let pool = UtxoPool::from_utxos(utxos.to_vec()).expect("generated pool is valid");
    let request = SelectionRequest::new(
        pool,
        Amount::from_units(target),
        SelectionConfig::default(),
    );
    CoinSelector::new().select(&request).expect("valid request")
}

fn pool_total(utxos: &[Utxo]) -> u64 {
    utxos.iter().map(|u| u.value.to_units()).sum()
}

#[quickcheck]
fn coverage_whenever_pool_suffices(pool: ArbPool, target: ArbTarget) -> TestResult {
    let required = target.0 + 10; // default fee
    if pool_total(&pool.0) < required {
        return TestResult::discard();
    }

    match run_default(&pool.0, target.0) {
        SelectionResult::Success { selected_sum, .. } => {
            TestResult::from_bool(selected_sum.to_units() >= required)
        }
        SelectionResult::InsufficientFunds { .. } => TestResult::failed(),
    }
}

#[quickcheck]
fn insufficiency_whenever_pool_falls_short(pool: ArbPool, target: ArbTarget) -> TestResult {
    let required = target.0 + 10;
    if pool_total(&pool.0) >= required {
        return TestResult::discard();
    }

    match run_default(&pool.0, target.0) {
        SelectionResult::InsufficientFunds { required_total, .. } => {
            TestResult::from_bool(required_total.to_units() == required)
        }
        SelectionResult::Success { .. } => TestResult::failed(),
    }
}

#[quickcheck]
fn change_identity_holds_on_success(pool: ArbPool, target: ArbTarget) -> TestResult {
    match run_default(&pool.0, target.0) {
        SelectionResult::Success {
            selected_inputs,
            selected_sum,
            change_amount,
        } => {
            let input_sum: u64 = selected_inputs.iter().map(|u| u.value.to_units()).sum();
            TestResult::from_bool(
                input_sum == selected_sum.to_units()
                    && selected_sum.to_units() == target.0 + 10 + change_amount.to_units(),
            )
        }
        SelectionResult::InsufficientFunds { .. } => TestResult::discard(),
    }
}

#[quickcheck]
fn selected_inputs_are_a_unique_subset_of_the_pool(pool: ArbPool, target: ArbTarget) -> TestResult {
    match run_default(&pool.0, target.0) {
        SelectionResult::Success {
            selected_inputs, ..
        } => {
            let mut keys = HashSet::new();
            let unique = selected_inputs.iter().all(|u| keys.insert(u.key()));
            let subset = selected_inputs.iter().all(|u| pool.0.contains(u));
            TestResult::from_bool(unique && subset)
        }
        SelectionResult::InsufficientFunds { .. } => TestResult::discard(),
    }
}

#[quickcheck]
fn determinism_under_permutation(
    pool: ArbPool,
    target: ArbTarget,
    rotation: usize,
    reverse: bool,
) -> bool {
    let baseline = run_default(&pool.0, target.0);

    let mut permuted = pool.0.clone();
    if !permuted.is_empty() {
        let shift = rotation % permuted.len();
        permuted.rotate_left(shift);
    }
    if reverse {
        permuted.reverse();
    }

    run_default(&permuted, target.0) == baseline
}

#[quickcheck]
fn idempotence(pool: ArbPool, target: ArbTarget) -> bool {
    run_default(&pool.0, target.0) == run_default(&pool.0, target.0)
}

#[quickcheck]
fn branch_and_bound_never_returns_worse_change(pool: ArbPool, target: ArbTarget) -> TestResult {
    let config = SelectionConfig::default();
    let utxo_pool = UtxoPool::from_utxos(pool.0.clone()).expect("generated pool is valid");
    let target_amount = Amount::from_units(target.0);

    let greedy = LargestFirstStrategy::new().select(&utxo_pool, target_amount, &config);
    let bounded = BranchAndBoundStrategy::new().select(&utxo_pool, target_amount, &config);

    match (&greedy, &bounded) {
        (
            SelectionResult::Success {
                change_amount: greedy_change,
                ..
            },
            SelectionResult::Success {
                change_amount: bounded_change,
                ..
            },
        ) => {
            // Either the search found a qualifying subset (and it is no worse
            // than greedy's when greedy's own change also qualifies), or it
            // fell back to the greedy result wholesale.
            if policy::is_acceptable_change(*bounded_change, config.dust_threshold) {
                if policy::is_acceptable_change(*greedy_change, config.dust_threshold) {
                    TestResult::from_bool(bounded_change <= greedy_change)
                } else {
                    TestResult::passed()
                }
            } else {
                TestResult::from_bool(bounded == greedy)
            }
        }
        (SelectionResult::InsufficientFunds { .. }, SelectionResult::InsufficientFunds { .. }) => {
            TestResult::passed()
        }
        _ => TestResult::failed(),
    }
}
