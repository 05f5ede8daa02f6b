use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Rank};
use crate::errors::EngineError;

pub const CARDS_PER_DECK: u32 = 52;
const COPIES_PER_RANK: u32 = 4;

/// The multiset of cards remaining in the shoe, tracked as one count per
/// rank. A plain value type: callers clone or copy it to explore or
/// simulate without disturbing the live composition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    counts: [u32; 13],
    decks: u32,
}

impl Shoe {
    /// Creates a full shoe: `decks * 4` copies of every rank.
    pub fn new(decks: u32) -> Self {
        Self {
            counts: [decks * COPIES_PER_RANK; 13],
            decks,
        }
    }

    pub fn decks(&self) -> u32 {
        self.decks
    }

    /// Total card capacity of the shoe (`decks * 52`).
    pub fn capacity(&self) -> u32 {
        self.decks * CARDS_PER_DECK
    }

    pub fn remaining(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn remaining_of(&self, rank: Rank) -> u32 {
        self.counts[rank.index()]
    }

    /// Fraction of the shoe already dealt, in `[0, 1]`.
    pub fn penetration(&self) -> f64 {
        let capacity = self.capacity();
        f64::from(capacity - self.remaining()) / f64::from(capacity)
    }

    /// Samples a rank uniformly over the individual remaining cards, via
    /// a cumulative-count threshold scan over the rank buckets. Returns
    /// `None` when the shoe is exhausted; that is a signal, not an error.
    ///
    /// Does not remove the card; pair with [`Shoe::consume`] or use
    /// [`Shoe::deal`].
    pub fn draw(&self, rng: &mut impl Rng) -> Option<Rank> {
        let total = self.remaining();
        if total == 0 {
            return None;
        }
        let mut threshold = rng.random_range(0..total);
        for rank in all_ranks() {
            let count = self.counts[rank.index()];
            if threshold < count {
                return Some(rank);
            }
            threshold -= count;
        }
        unreachable!("threshold bounded by total remaining count")
    }

    /// Removes one card of the given rank.
    pub fn consume(&mut self, rank: Rank) -> Result<(), EngineError> {
        let slot = &mut self.counts[rank.index()];
        if *slot == 0 {
            return Err(EngineError::InvalidState { rank });
        }
        *slot -= 1;
        Ok(())
    }

    /// Returns one card of the given rank to the shoe. The inverse of
    /// [`Shoe::consume`], for hosts that let a user un-enter a card.
    pub fn restore(&mut self, rank: Rank) -> Result<(), EngineError> {
        let slot = &mut self.counts[rank.index()];
        if *slot >= self.decks * COPIES_PER_RANK {
            return Err(EngineError::InvalidState { rank });
        }
        *slot += 1;
        Ok(())
    }

    /// Draws and removes one card. `None` on exhaustion.
    pub fn deal(&mut self, rng: &mut impl Rng) -> Option<Rank> {
        let rank = self.draw(rng)?;
        self.counts[rank.index()] -= 1;
        Some(rank)
    }

    /// Resets every rank back to `decks * 4`.
    pub fn reshuffle(&mut self) {
        self.counts = [self.decks * COPIES_PER_RANK; 13];
    }
}
