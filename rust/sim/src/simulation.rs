//! The run loop: shoe lifecycle, bankroll tracking, aggregation, and
//! progress reporting.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use hilo_engine::errors::EngineError;
use hilo_engine::record::{HandRecord, Outcome};

use crate::config::SimConfig;
use crate::resolver::{play_hand, TableState};

/// Reshuffle once less than this fraction of the shoe remains.
pub const RESHUFFLE_THRESHOLD: f64 = 0.25;
/// Progress callback cadence, in hands.
pub const PROGRESS_INTERVAL: u64 = 50;
/// How many of the most recent hand records are retained. All hands are
/// counted in the aggregates regardless.
pub const HISTORY_LIMIT: usize = 100;

/// Aggregate outcome of a run, computed once when the loop exits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub hands_played: u64,
    pub hands_won: u64,
    pub hands_lost: u64,
    pub hands_pushed: u64,
    pub total_wagered: f64,
    /// Total returned to the player on winning hands (stake + profit).
    pub total_returned: f64,
    pub net_profit: f64,
    /// Wins over hands played; 0 for an empty run.
    pub win_rate: f64,
    /// Net profit over initial bankroll, as a percentage.
    pub roi: f64,
    pub max_drawdown: f64,
    pub final_bankroll: f64,
}

/// Why the loop stopped.
#[derive(Debug, PartialEq, Eq)]
pub enum RunEnd {
    Completed,
    /// Bankroll dropped below the minimum bet.
    Bankrupt,
    /// A hand failed to resolve; tallies up to that point are kept.
    Failed(EngineError),
}

/// A finished run: the aggregate result, the retained tail of the hand
/// history, and how the run ended.
#[derive(Debug)]
pub struct SimReport {
    pub result: SimulationResult,
    pub recent_hands: Vec<HandRecord>,
    pub end: RunEnd,
}

/// Runs the configured number of hands with no progress observer.
pub fn run(cfg: &SimConfig) -> SimReport {
    run_with_progress(cfg, |_| {})
}

/// Runs the configured number of hands, invoking `progress` with a
/// completion percentage in `[0, 100]` every [`PROGRESS_INTERVAL`] hands
/// and once more when the loop exits. The callback carries no
/// correctness obligation; hands resolve strictly in order either way.
pub fn run_with_progress(cfg: &SimConfig, mut progress: impl FnMut(f64)) -> SimReport {
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut state = TableState::new(cfg.decks);
    let mut bankroll = cfg.initial_bankroll;
    let mut peak = bankroll;
    let mut max_drawdown = 0.0f64;

    let mut hands_won = 0u64;
    let mut hands_lost = 0u64;
    let mut hands_pushed = 0u64;
    let mut total_wagered = 0.0;
    let mut total_returned = 0.0;
    let mut history: VecDeque<HandRecord> = VecDeque::with_capacity(HISTORY_LIMIT);

    let reshuffle_at = f64::from(state.shoe.capacity()) * RESHUFFLE_THRESHOLD;
    let mut end = RunEnd::Completed;

    for i in 0..cfg.hands {
        if f64::from(state.shoe.remaining()) < reshuffle_at {
            state.reshuffle();
        }

        if bankroll < cfg.min_bet {
            end = RunEnd::Bankrupt;
            break;
        }

        match play_hand(state, bankroll, i + 1, cfg, &mut rng) {
            Ok((record, next)) => {
                state = next;
                bankroll = record.bankroll;

                match record.outcome {
                    Outcome::Win => hands_won += 1,
                    Outcome::Loss => hands_lost += 1,
                    Outcome::Push => hands_pushed += 1,
                }
                total_wagered += record.bet;
                if record.profit > 0.0 {
                    total_returned += record.profit + record.bet;
                }

                peak = peak.max(bankroll);
                max_drawdown = max_drawdown.max(peak - bankroll);

                if history.len() == HISTORY_LIMIT {
                    history.pop_front();
                }
                history.push_back(record);

                if i % PROGRESS_INTERVAL == 0 {
                    progress((i + 1) as f64 / cfg.hands as f64 * 100.0);
                }
            }
            Err(e) => {
                end = RunEnd::Failed(e);
                break;
            }
        }
    }
    progress(100.0);

    let hands_played = hands_won + hands_lost + hands_pushed;
    let net_profit = bankroll - cfg.initial_bankroll;
    let result = SimulationResult {
        hands_played,
        hands_won,
        hands_lost,
        hands_pushed,
        total_wagered,
        total_returned,
        net_profit,
        win_rate: if hands_played > 0 {
            hands_won as f64 / hands_played as f64
        } else {
            0.0
        },
        roi: net_profit / cfg.initial_bankroll * 100.0,
        max_drawdown,
        final_bankroll: bankroll,
    };

    SimReport {
        result,
        recent_hands: history.into(),
        end,
    }
}
