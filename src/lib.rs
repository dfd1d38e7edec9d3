//! An information-set Monte Carlo tree search engine for a single-player,
//! imperfect-information card game.
//!
//! [`engine`] holds the rulebook (cards, deck, hand, field, scoring, legal
//! moves, state transition). [`search`] holds the IS-MCTS tree and the
//! [`search::ISMCTSStrategy`] façade that recommends a move from an
//! [`engine::ObservableGameState`]. [`players`] and [`runner`] are a small
//! harness used by tests, benchmarks, and the `recommend` demo binary; they
//! are not part of the engine's public contract.

pub mod engine;
pub mod players;
pub mod runner;
pub mod search;
