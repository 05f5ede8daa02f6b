//! # hilo-ai: Playing and Betting Strategy
//!
//! Decision logic layered over `hilo-engine`: the basic-strategy table,
//! the count-deviation overlay, bet-sizing policies, and the one-shot
//! advisor used for interactive recommendations.
//!
//! ## Core Components
//!
//! - [`basic`] - Table-driven basic strategy (soft and hard hands)
//! - [`deviations`] - Count-triggered overrides and [`recommend`]
//! - [`betting`] - Flat, fractional-Kelly, and progressive bet sizing
//! - [`advisor`] - Single-decision advice (action, win probability, bet)
//!
//! Everything here is deterministic: the same inputs always produce the
//! same recommendation, which keeps simulations reproducible.

use serde::{Deserialize, Serialize};

pub mod advisor;
pub mod basic;
pub mod betting;
pub mod deviations;

pub use deviations::recommend;

/// Which playing policy drives decisions. `Basic` follows the table
/// alone; `Ai` and `Advanced` additionally apply count deviations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayStrategy {
    Basic,
    #[default]
    Ai,
    Advanced,
}

impl PlayStrategy {
    /// Whether the count-deviation overlay applies for this policy.
    pub fn uses_deviations(self) -> bool {
        !matches!(self, PlayStrategy::Basic)
    }
}

/// Bet-sizing policy for a run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BetStrategy {
    Flat,
    #[default]
    Kelly,
    Progressive,
}
