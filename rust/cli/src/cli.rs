//! Command-line surface: the clap parser types for the `hilo` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use hilo_ai::{BetStrategy, PlayStrategy};

#[derive(Debug, Parser)]
#[command(
    name = "hilo",
    version,
    about = "Blackjack strategy advisor and bankroll simulator"
)]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate many hands and report the bankroll outcome
    Sim(SimArgs),
    /// Recommend an action and bet for one table situation
    Advise(AdviseArgs),
    /// Display the resolved configuration and where each value came from
    Cfg,
}

/// Overrides for the `sim` command. Anything left unset falls back to
/// the configuration file, environment, or built-in defaults.
#[derive(Debug, Args)]
pub struct SimArgs {
    /// Number of hands to simulate
    #[arg(long)]
    pub hands: Option<u64>,

    /// Number of 52-card decks in the shoe
    #[arg(long)]
    pub decks: Option<u32>,

    /// Starting bankroll
    #[arg(long)]
    pub bankroll: Option<f64>,

    /// Table minimum bet
    #[arg(long = "min-bet")]
    pub min_bet: Option<f64>,

    /// Table maximum bet
    #[arg(long = "max-bet")]
    pub max_bet: Option<f64>,

    /// Playing policy
    #[arg(long, value_enum)]
    pub play: Option<PlayArg>,

    /// Bet-sizing policy
    #[arg(long, value_enum)]
    pub bet: Option<BetArg>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append the retained hand history to FILE as JSONL
    #[arg(long)]
    pub output: Option<String>,

    /// Print the result as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AdviseArgs {
    /// Player cards, comma separated (e.g. "A,9" or "10,6,2")
    #[arg(long)]
    pub player: String,

    /// Dealer up-card (e.g. "6", "K")
    #[arg(long)]
    pub dealer: String,

    /// Number of 52-card decks in the shoe
    #[arg(long, default_value_t = 6)]
    pub decks: u32,

    /// Running count from cards seen before this hand
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub running: i32,

    /// Current bankroll, used for the bet recommendation
    #[arg(long, default_value_t = 1000.0)]
    pub bankroll: f64,

    /// Playing policy
    #[arg(long, value_enum)]
    pub play: Option<PlayArg>,

    /// Print the advice as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Playing policy as exposed on the command line.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum PlayArg {
    Basic,
    Ai,
    Advanced,
}

impl From<PlayArg> for PlayStrategy {
    fn from(arg: PlayArg) -> Self {
        match arg {
            PlayArg::Basic => PlayStrategy::Basic,
            PlayArg::Ai => PlayStrategy::Ai,
            PlayArg::Advanced => PlayStrategy::Advanced,
        }
    }
}

/// Bet-sizing policy as exposed on the command line.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum BetArg {
    Flat,
    Kelly,
    Progressive,
}

impl From<BetArg> for BetStrategy {
    fn from(arg: BetArg) -> Self {
        match arg {
            BetArg::Flat => BetStrategy::Flat,
            BetArg::Kelly => BetStrategy::Kelly,
            BetArg::Progressive => BetStrategy::Progressive,
        }
    }
}
