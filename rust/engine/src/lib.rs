//! # hilo-engine: Blackjack Card-Counting Engine Core
//!
//! A deterministic blackjack engine built around a per-rank shoe
//! composition and the Hi-Lo counting system. Provides the card and hand
//! model, weighted shoe draws with reproducible RNG, running/true count
//! derivation, table rules, and hand-record serialization.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank representation, point values, and Hi-Lo tags
//! - [`hand`] - Hand total evaluation with ace softness
//! - [`shoe`] - Per-rank card composition with seeded weighted draws
//! - [`count`] - Running-count accumulation and true-count derivation
//! - [`rules`] - Dealer automaton predicate and hand settlement
//! - [`record`] - Resolved-hand records for history and aggregation
//! - [`history`] - JSONL hand-record persistence
//! - [`errors`] - Error types for shoe operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::cards::Rank;
//! use hilo_engine::hand::evaluate;
//!
//! let value = evaluate(&[Rank::Ace, Rank::Nine]);
//! assert_eq!(value.total, 20);
//! assert!(value.is_soft);
//! ```
//!
//! ## Deterministic Draws
//!
//! All randomness flows through a caller-supplied RNG, so the same seed
//! reproduces the same sequence of cards:
//!
//! ```rust
//! use hilo_engine::shoe::Shoe;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut shoe_a = Shoe::new(6);
//! let mut shoe_b = Shoe::new(6);
//! let mut rng_a = ChaCha20Rng::seed_from_u64(42);
//! let mut rng_b = ChaCha20Rng::seed_from_u64(42);
//! assert_eq!(shoe_a.deal(&mut rng_a), shoe_b.deal(&mut rng_b));
//! ```

pub mod cards;
pub mod count;
pub mod errors;
pub mod hand;
pub mod history;
pub mod record;
pub mod rules;
pub mod shoe;
