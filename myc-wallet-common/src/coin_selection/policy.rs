//! Change policy predicates
//!
//! Pure numeric rules consulted by selection strategies to decide when a
//! candidate combination of inputs is good enough. Parameterized entirely by
//! [`SelectionConfig`](crate::coin_selection::types::SelectionConfig) values;
//! no side effects, no state.

use crate::types::Amount;

/// True iff the accumulated sum covers the required total exactly, leaving no
/// change at all.
pub fn is_exact_match(running_sum: Amount, required_total: Amount) -> bool {
    running_sum == required_total
}

/// True iff the change falls strictly inside the acceptable window:
/// above dust, below the excessive-change bound.
pub fn is_optimized_change(
    change: Amount,
    dust_threshold: Amount,
    optimized_threshold: Amount,
) -> bool {
    dust_threshold < change && change < optimized_threshold
}

/// True iff a combination qualifies for the minimizing search: either no
/// change output is needed, or the change is large enough to be worth
/// creating.
pub fn is_acceptable_change(change: Amount, dust_threshold: Amount) -> bool {
    change.is_zero() || change > dust_threshold
}
