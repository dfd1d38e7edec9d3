//! Strategies used by the game driver, tests, and benchmarks.

pub mod mcts;
pub mod random;

use crate::engine::observable::ObservableGameState;
use crate::engine::Move;

/// A move-picking strategy for the single-player game. Implementations own
/// their randomness, so a driver never has to thread an `rng` through
/// trait-object calls.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Recommends a move, or `None` if `observable` is terminal.
    fn recommend_move(&mut self, observable: &ObservableGameState) -> Option<Move>;
}
