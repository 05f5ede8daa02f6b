use serde::{Deserialize, Serialize};

use crate::cards::{Action, Rank};

/// Result tag for a resolved hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

/// Full trace of one resolved hand. Immutable once produced; serialized
/// to JSONL by [`crate::history::HistoryWriter`] for later inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// 1-based position of this hand within its run.
    pub hand_number: u64,
    pub player_cards: Vec<Rank>,
    pub dealer_cards: Vec<Rank>,
    pub player_total: u32,
    pub dealer_total: u32,
    /// The single action chosen at decision time.
    pub action: Action,
    pub bet: f64,
    pub outcome: Outcome,
    /// Signed profit: positive on a win, negative on a loss, 0 on a push.
    pub profit: f64,
    /// Bankroll after this hand settled.
    pub bankroll: f64,
    /// True count at decision time (after the deal, before the action).
    pub true_count: f64,
    /// Timestamp when the record was persisted (RFC3339).
    #[serde(default)]
    pub ts: Option<String>,
}
