use thiserror::Error;

use crate::cards::Rank;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("not enough cards to deal a hand: {available} remaining, {needed} needed")]
    InsufficientCards { available: u32, needed: u32 },
    #[error("invalid shoe state for rank {rank}")]
    InvalidState { rank: Rank },
}
