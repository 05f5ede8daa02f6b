//! Bet sizing policies.
//!
//! Two Kelly calibrations exist on purpose: the bounded form spreads the
//! fractional-Kelly signal across the table's min/max bet range and is
//! what the simulation loop uses; the bankroll-relative form sizes a
//! single standalone recommendation directly off the bankroll.

use serde::{Deserialize, Serialize};

use crate::BetStrategy;

/// Assumed edge gained per point of true count.
pub const ADVANTAGE_PER_TRUE_COUNT: f64 = 0.005;
/// Assumed per-hand variance of blackjack.
pub const BLACKJACK_VARIANCE: f64 = 1.3;
/// Quarter-Kelly multiplier, trading growth for drawdown safety.
pub const KELLY_FRACTION: f64 = 0.25;

/// Table limits and starting bankroll for a run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetConfig {
    pub min_bet: f64,
    pub max_bet: f64,
    pub initial_bankroll: f64,
}

/// Fraction of bankroll a quarter-Kelly bettor would stake at this true
/// count. Zero when there is no advantage.
fn fractional_kelly(true_count: f64) -> f64 {
    let advantage = true_count * ADVANTAGE_PER_TRUE_COUNT;
    if advantage <= 0.0 {
        return 0.0;
    }
    (advantage / BLACKJACK_VARIANCE) * KELLY_FRACTION
}

/// Sizes the bet for one hand inside a run, then clamps it to
/// `[min_bet, min(max_bet, bankroll)]`.
pub fn bet_size(strategy: BetStrategy, true_count: f64, bankroll: f64, cfg: &BetConfig) -> f64 {
    let mut bet = cfg.min_bet;

    match strategy {
        BetStrategy::Flat => {}
        BetStrategy::Kelly => {
            let kelly = fractional_kelly(true_count);
            if kelly > 0.0 {
                bet = cfg.min_bet + (cfg.max_bet - cfg.min_bet) * kelly;
                bet = bet.min(cfg.max_bet);
            }
        }
        BetStrategy::Progressive => {
            if true_count >= 3.0 {
                bet = cfg.min_bet * 3.0;
            } else if true_count >= 2.0 {
                bet = cfg.min_bet * 2.0;
            } else if true_count >= 1.0 {
                bet = cfg.min_bet * 1.5;
            }
        }
    }

    bet.min(bankroll).min(cfg.max_bet).max(cfg.min_bet)
}

/// Bankroll-relative Kelly recommendation for a single hand: floored at
/// 5, capped at 10% of bankroll and at 100, rounded to a multiple of 5.
pub fn optimal_bet(true_count: f64, bankroll: f64) -> f64 {
    let kelly = fractional_kelly(true_count);
    if kelly <= 0.0 {
        return 5.0;
    }

    let mut bet = bankroll * kelly;
    bet = bet.max(5.0);
    bet = bet.min(bankroll * 0.10);
    bet = bet.min(100.0);

    (bet / 5.0).round() * 5.0
}
