//! Plays one hand end to end over a copied table state.

use rand::Rng;

use hilo_engine::cards::{Action, Rank};
use hilo_engine::count::{apply_draw, true_count};
use hilo_engine::errors::EngineError;
use hilo_engine::hand::evaluate;
use hilo_engine::record::HandRecord;
use hilo_engine::rules::{dealer_must_draw, settle, MAX_DEALER_DRAWS};
use hilo_engine::shoe::Shoe;

use hilo_ai::betting::bet_size;
use hilo_ai::recommend;

use crate::config::SimConfig;

/// The shoe and its running count, moved through the simulation as one
/// value. The resolver mutates a copy and returns it; the orchestrator
/// decides whether to adopt the result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableState {
    pub shoe: Shoe,
    pub running_count: i32,
}

impl TableState {
    pub fn new(decks: u32) -> Self {
        Self {
            shoe: Shoe::new(decks),
            running_count: 0,
        }
    }

    /// Fresh shoe, count back to zero.
    pub fn reshuffle(&mut self) {
        self.shoe.reshuffle();
        self.running_count = 0;
    }

    pub fn true_count(&self) -> f64 {
        true_count(self.running_count, &self.shoe)
    }

    /// Deals one card, keeping the running count in sync. `None` on
    /// shoe exhaustion.
    fn deal(&mut self, rng: &mut impl Rng) -> Option<Rank> {
        let rank = self.shoe.deal(rng)?;
        self.running_count = apply_draw(self.running_count, rank);
        Some(rank)
    }
}

/// Plays exactly one hand: deal, bet, act, run the dealer, settle.
///
/// Takes the table state by value, works on the copy, and returns it
/// alongside the record so the caller can adopt the new state. The
/// bankroll given is the player's bankroll before the bet; the record's
/// `bankroll` field is the balance after settlement.
///
/// # Errors
///
/// [`EngineError::InsufficientCards`] when fewer than four cards remain
/// before dealing starts. Exhaustion mid-hand is not an error: the
/// dealer simply stops drawing, and a hit that cannot draw leaves the
/// hand as-is.
pub fn play_hand(
    mut state: TableState,
    bankroll: f64,
    hand_number: u64,
    cfg: &SimConfig,
    rng: &mut impl Rng,
) -> Result<(HandRecord, TableState), EngineError> {
    let available = state.shoe.remaining();
    if available < 4 {
        return Err(EngineError::InsufficientCards {
            available,
            needed: 4,
        });
    }

    let mut player = Vec::with_capacity(3);
    let mut dealer = Vec::with_capacity(4);
    for _ in 0..2 {
        player.push(state.deal(rng).ok_or(EngineError::InsufficientCards {
            available,
            needed: 4,
        })?);
    }
    for _ in 0..2 {
        dealer.push(state.deal(rng).ok_or(EngineError::InsufficientCards {
            available,
            needed: 4,
        })?);
    }

    let dealer_up = dealer[0].point_value();
    let tc = state.true_count();
    let mut bet = bet_size(cfg.bet_strategy, tc, bankroll, &cfg.bet_config());

    let value = evaluate(&player);
    let action = recommend(cfg.play_strategy, value, dealer_up, true, tc);

    match action {
        Action::Hit => {
            if value.total < 21 {
                if let Some(card) = state.deal(rng) {
                    player.push(card);
                }
            }
        }
        Action::Double => {
            // One card, then the hand stands regardless of its total.
            bet = (bet * 2.0).min(bankroll);
            if let Some(card) = state.deal(rng) {
                player.push(card);
            }
        }
        Action::Stand => {}
    }

    let mut draws = 0;
    while draws < MAX_DEALER_DRAWS && dealer_must_draw(evaluate(&dealer)) {
        match state.deal(rng) {
            Some(card) => dealer.push(card),
            None => break,
        }
        draws += 1;
    }

    let (outcome, profit) = settle(&player, &dealer, bet);
    let player_total = evaluate(&player).total;
    let dealer_total = evaluate(&dealer).total;

    let record = HandRecord {
        hand_number,
        player_cards: player,
        dealer_cards: dealer,
        player_total,
        dealer_total,
        action,
        bet,
        outcome,
        profit,
        bankroll: bankroll + profit,
        true_count: tc,
        ts: None,
    };

    Ok((record, state))
}
