//! One-shot advice for a hand in progress: recommended action, a rough
//! win-probability estimate, and a bankroll-relative bet.
//!
//! The probability model is a coarse heuristic, not an exact EV
//! calculation: a tiered base rate by player total and dealer up-card,
//! nudged by hand softness, the true count, and how ten-dense the
//! remaining shoe is.

use hilo_engine::cards::{Action, Rank};
use hilo_engine::count::true_count;
use hilo_engine::hand::{evaluate, is_blackjack};
use hilo_engine::shoe::Shoe;

use crate::betting::optimal_bet;
use crate::deviations::recommend;
use crate::PlayStrategy;

/// Expected share of tens and aces in a neutral deck (20 of 52).
const EXPECTED_HIGH_CARD_RATIO: f64 = 20.0 / 52.0;

/// Everything a host needs to display for one decision point.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub action: Action,
    pub win_probability: f64,
    pub bet: f64,
    pub true_count: f64,
}

/// Heuristic probability that the player hand wins from here, in [0, 1].
pub fn win_probability(player: &[Rank], dealer_up: Rank, tc: f64, shoe: &Shoe) -> f64 {
    if player.is_empty() {
        return 0.0;
    }
    if is_blackjack(player) {
        return 0.9;
    }

    let value = evaluate(player);
    if value.total > 21 {
        return 0.0;
    }

    let dealer_value = dealer_up.point_value();
    let strong_dealer = dealer_value >= 7;
    let mut prob = if value.total >= 17 {
        let base = if strong_dealer { 0.4 } else { 0.6 };
        base + f64::from(value.total - 17) * 0.05
    } else if value.total >= 12 {
        let base = if strong_dealer { 0.25 } else { 0.45 };
        base + f64::from(value.total - 12) * 0.03
    } else {
        0.4
    };

    if value.is_soft {
        prob += 0.05;
    }

    prob += tc * 0.01;
    prob += (high_card_ratio(shoe) - EXPECTED_HIGH_CARD_RATIO) * 0.5;

    prob.clamp(0.0, 1.0)
}

fn high_card_ratio(shoe: &Shoe) -> f64 {
    let remaining = shoe.remaining();
    if remaining == 0 {
        return EXPECTED_HIGH_CARD_RATIO;
    }
    let high = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .iter()
        .map(|&r| shoe.remaining_of(r))
        .sum::<u32>();
    f64::from(high) / f64::from(remaining)
}

/// Produces a full recommendation for the current table situation. The
/// shoe must already reflect every visible card (player, dealer, and
/// anything else seen), with `running` the matching running count.
pub fn advise(
    shoe: &Shoe,
    player: &[Rank],
    dealer_up: Rank,
    running: i32,
    bankroll: f64,
    strategy: PlayStrategy,
) -> Advice {
    let tc = true_count(running, shoe);
    let value = evaluate(player);
    let can_double = player.len() == 2;
    let action = recommend(strategy, value, dealer_up.point_value(), can_double, tc);

    Advice {
        action,
        win_probability: win_probability(player, dealer_up, tc, shoe),
        bet: optimal_bet(tc, bankroll),
        true_count: tc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_engine::cards::Rank::*;
    use hilo_engine::count::apply_draw;

    fn shoe_after(seen: &[Rank], decks: u32) -> (Shoe, i32) {
        let mut shoe = Shoe::new(decks);
        let mut running = 0;
        for &rank in seen {
            shoe.consume(rank).unwrap();
            running = apply_draw(running, rank);
        }
        (shoe, running)
    }

    #[test]
    fn blackjack_is_near_certain() {
        let (shoe, _) = shoe_after(&[Ace, King, Six], 6);
        assert_eq!(win_probability(&[Ace, King], Six, 0.0, &shoe), 0.9);
    }

    #[test]
    fn busted_hand_cannot_win() {
        let (shoe, _) = shoe_after(&[Ten, Nine, Five, Six], 6);
        assert_eq!(win_probability(&[Ten, Nine, Five], Six, 0.0, &shoe), 0.0);
    }

    #[test]
    fn weak_dealer_upcard_improves_the_estimate() {
        let (shoe, _) = shoe_after(&[], 6);
        let vs_six = win_probability(&[Ten, Eight], Six, 0.0, &shoe);
        let vs_ten = win_probability(&[Ten, Eight], Ten, 0.0, &shoe);
        assert!(vs_six > vs_ten);
    }

    #[test]
    fn estimate_stays_in_unit_interval() {
        let (shoe, _) = shoe_after(&[], 1);
        for count in [-10.0, -2.0, 0.0, 2.0, 10.0] {
            let p = win_probability(&[Ten, Ten], Two, count, &shoe);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn advise_applies_deviations_for_counting_policies() {
        // Strip low cards so the running count and true count are high.
        let seen = [Two, Three, Four, Five, Six, Two, Three, Four, Five, Six];
        let (shoe, running) = shoe_after(&seen, 1);
        let advice = advise(&shoe, &[Ten, Six], Ten, running, 1000.0, PlayStrategy::Ai);
        assert_eq!(advice.action, Action::Stand);
        assert!(advice.true_count >= 2.0);

        let basic = advise(&shoe, &[Ten, Six], Ten, running, 1000.0, PlayStrategy::Basic);
        assert_eq!(basic.action, Action::Hit);
    }

    #[test]
    fn advise_sizes_the_bet_from_the_bankroll() {
        let (shoe, running) = shoe_after(&[], 6);
        let advice = advise(&shoe, &[Ten, Six], Ten, running, 1000.0, PlayStrategy::Ai);
        // Neutral count: minimum recommendation.
        assert_eq!(advice.bet, 5.0);
        assert_eq!(advice.true_count, 0.0);
    }
}
