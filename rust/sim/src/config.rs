use serde::{Deserialize, Serialize};
use thiserror::Error;

use hilo_ai::betting::BetConfig;
use hilo_ai::{BetStrategy, PlayStrategy};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Everything needed to describe one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of 52-card decks in the shoe.
    pub decks: u32,
    /// Hands to simulate. Zero is a valid (empty) run.
    pub hands: u64,
    pub initial_bankroll: f64,
    pub min_bet: f64,
    pub max_bet: f64,
    pub play_strategy: PlayStrategy,
    pub bet_strategy: BetStrategy,
    /// RNG seed; `None` picks a random seed at run time.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            decks: 6,
            hands: 1000,
            initial_bankroll: 1000.0,
            min_bet: 5.0,
            max_bet: 100.0,
            play_strategy: PlayStrategy::Ai,
            bet_strategy: BetStrategy::Kelly,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks < 1 {
            return Err(ConfigError::Invalid("decks must be >= 1".into()));
        }
        if self.initial_bankroll <= 0.0 {
            return Err(ConfigError::Invalid("initial_bankroll must be > 0".into()));
        }
        if self.min_bet <= 0.0 {
            return Err(ConfigError::Invalid("min_bet must be > 0".into()));
        }
        if self.max_bet < self.min_bet {
            return Err(ConfigError::Invalid("max_bet must be >= min_bet".into()));
        }
        Ok(())
    }

    /// The bet-sizing view of this configuration.
    pub fn bet_config(&self) -> BetConfig {
        BetConfig {
            min_bet: self.min_bet,
            max_bet: self.max_bet,
            initial_bankroll: self.initial_bankroll,
        }
    }
}
