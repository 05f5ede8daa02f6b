//! # hilo-sim: Bankroll Simulation Orchestration
//!
//! Runs many blackjack hands against a counted shoe and aggregates the
//! bankroll outcome. Built from three pieces:
//!
//! - [`config`] - [`config::SimConfig`] describing a run
//! - [`resolver`] - plays exactly one hand over a copied table state
//! - [`simulation`] - the run loop: shoe lifecycle, bankroll, tallies,
//!   drawdown, early termination, and progress reporting
//!
//! The orchestrator exclusively owns its mutable state for the duration
//! of a run; the resolver works on value copies and hands back the next
//! state, so no hand ever aliases live interactive state.
//!
//! ```rust
//! use hilo_sim::config::SimConfig;
//! use hilo_sim::simulation::run;
//!
//! let cfg = SimConfig {
//!     hands: 200,
//!     seed: Some(42),
//!     ..SimConfig::default()
//! };
//! let report = run(&cfg);
//! assert_eq!(report.result.hands_played, 200);
//! ```

pub mod config;
pub mod resolver;
pub mod simulation;
