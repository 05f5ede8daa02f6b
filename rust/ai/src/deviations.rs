//! Count-triggered deviations from basic strategy.
//!
//! A small fixed set of overrides that fire only at extreme true counts
//! (|true count| >= 2). Everything else falls back to the basic table.

use hilo_engine::cards::Action;
use hilo_engine::hand::HandValue;

use crate::basic::basic_action;
use crate::PlayStrategy;

/// True-count magnitude at which the overlay activates.
pub const DEVIATION_THRESHOLD: f64 = 2.0;

/// Returns the deviation for this total/up-card combination, or `None`
/// when basic strategy applies.
pub fn deviation(total: u32, dealer_up: u32, true_count: f64) -> Option<Action> {
    if true_count >= DEVIATION_THRESHOLD {
        match (total, dealer_up) {
            (16, 10) | (15, 10) => Some(Action::Stand),
            (12, 2..=3) => Some(Action::Stand),
            (10, 10) => Some(Action::Double),
            (9, 2) => Some(Action::Double),
            _ => None,
        }
    } else if true_count <= -DEVIATION_THRESHOLD {
        match (total, dealer_up) {
            (12, 4..=6) | (13, 2) => Some(Action::Hit),
            _ => None,
        }
    } else {
        None
    }
}

/// Recommended action for a hand under the given playing policy. The
/// basic table always supplies the baseline; counting policies overlay
/// the deviation set on top.
pub fn recommend(
    strategy: PlayStrategy,
    value: HandValue,
    dealer_up: u32,
    can_double: bool,
    true_count: f64,
) -> Action {
    let baseline = basic_action(value.total, dealer_up, value.is_soft, can_double);
    if !strategy.uses_deviations() {
        return baseline;
    }
    deviation(value.total, dealer_up, true_count).unwrap_or(baseline)
}
