//! Hi-Lo count tracking.
//!
//! The running count is a plain integer owned by the caller; these
//! helpers keep it in sync with cards leaving the shoe and derive the
//! true count from the remaining composition.

use crate::cards::Rank;
use crate::shoe::{Shoe, CARDS_PER_DECK};

/// Folds one drawn card into the running count.
pub fn apply_draw(running: i32, rank: Rank) -> i32 {
    running + rank.hi_lo_tag()
}

/// Running count normalized by decks remaining. Defined as 0 for an
/// empty shoe so callers never divide by zero.
pub fn true_count(running: i32, shoe: &Shoe) -> f64 {
    let decks_remaining = f64::from(shoe.remaining()) / f64::from(CARDS_PER_DECK);
    if decks_remaining > 0.0 {
        f64::from(running) / decks_remaining
    } else {
        0.0
    }
}
