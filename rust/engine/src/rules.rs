//! Table rules: the dealer automaton predicate and hand settlement.

use crate::cards::Rank;
use crate::hand::{evaluate, is_blackjack, HandValue};
use crate::record::Outcome;

/// Payout multiplier for a natural blackjack (3:2).
pub const BLACKJACK_PAYOUT: f64 = 1.5;

/// Hard ceiling on dealer draws within one hand. The automaton always
/// terminates well before this in practice; the bound guards against a
/// malformed composition.
pub const MAX_DEALER_DRAWS: usize = 10;

/// Whether the dealer must take another card: below 17, or exactly a
/// soft 17 (the dealer hits soft 17 at this table).
pub fn dealer_must_draw(value: HandValue) -> bool {
    value.total < 17 || (value.total == 17 && value.is_soft)
}

/// Settles a finished hand, returning the outcome and the player's
/// signed profit for a given bet.
///
/// Resolution order: blackjack-vs-blackjack pushes, a lone blackjack
/// pays 3:2 (or loses the bet when it is the dealer's), then busts, then
/// a straight total comparison at even money.
pub fn settle(player: &[Rank], dealer: &[Rank], bet: f64) -> (Outcome, f64) {
    let player_total = evaluate(player).total;
    let dealer_total = evaluate(dealer).total;
    let player_blackjack = is_blackjack(player);
    let dealer_blackjack = is_blackjack(dealer);

    if player_blackjack && dealer_blackjack {
        (Outcome::Push, 0.0)
    } else if player_blackjack {
        (Outcome::Win, bet * BLACKJACK_PAYOUT)
    } else if dealer_blackjack {
        (Outcome::Loss, -bet)
    } else if player_total > 21 {
        (Outcome::Loss, -bet)
    } else if dealer_total > 21 {
        (Outcome::Win, bet)
    } else if player_total > dealer_total {
        (Outcome::Win, bet)
    } else if player_total == dealer_total {
        (Outcome::Push, 0.0)
    } else {
        (Outcome::Loss, -bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank::*;

    #[test]
    fn dealer_draws_below_seventeen_and_on_soft_seventeen() {
        assert!(dealer_must_draw(evaluate(&[Ten, Six])));
        assert!(dealer_must_draw(evaluate(&[Ace, Six])));
        assert!(!dealer_must_draw(evaluate(&[Ten, Seven])));
        assert!(!dealer_must_draw(evaluate(&[Ace, Seven])));
        assert!(!dealer_must_draw(evaluate(&[Ten, Six, Five])));
    }

    #[test]
    fn higher_total_wins_even_money() {
        let (outcome, profit) = settle(&[King, Queen], &[Ten, Nine], 25.0);
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(profit, 25.0);
    }

    #[test]
    fn equal_totals_push() {
        let (outcome, profit) = settle(&[Ten, Nine], &[King, Nine], 25.0);
        assert_eq!(outcome, Outcome::Push);
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn blackjack_pays_three_to_two() {
        let (outcome, profit) = settle(&[Ace, King], &[Ten, Nine], 10.0);
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(profit, 15.0);
    }

    #[test]
    fn blackjack_against_blackjack_pushes() {
        let (outcome, profit) = settle(&[Ace, King], &[Ace, Queen], 10.0);
        assert_eq!(outcome, Outcome::Push);
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn dealer_blackjack_beats_a_drawn_twenty_one() {
        let (outcome, profit) = settle(&[Seven, Seven, Seven], &[Ace, Jack], 10.0);
        assert_eq!(outcome, Outcome::Loss);
        assert_eq!(profit, -10.0);
    }

    #[test]
    fn player_bust_loses_even_when_dealer_busts_too() {
        let (outcome, profit) = settle(&[Ten, Six, King], &[Ten, Six, King], 10.0);
        assert_eq!(outcome, Outcome::Loss);
        assert_eq!(profit, -10.0);
    }

    #[test]
    fn dealer_bust_wins_for_any_live_player_hand() {
        let (outcome, profit) = settle(&[Ten, Two], &[Ten, Six, King], 10.0);
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(profit, 10.0);
    }
}
