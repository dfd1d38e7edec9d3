//! A move-recommendation façade over [`ISMCTSEngine`].

use log::info;
use rand::Rng;

use crate::engine::observable::ObservableGameState;
use crate::engine::Move;

use super::engine::{ISMCTSEngine, SearchConfig};

/// Wraps [`ISMCTSEngine`] behind the same shape a caller would reach for
/// from a driver loop or a CLI: hand it an observable state and a source of
/// randomness, get a move back. A fresh engine (and thus an empty tree) is
/// used for every call, so recommendations never carry bias from a
/// previous, unrelated game.
pub struct ISMCTSStrategy {
    config: SearchConfig,
}

impl ISMCTSStrategy {
    pub fn new(config: SearchConfig) -> Self {
        ISMCTSStrategy { config }
    }

    pub fn recommend_move(
        &self,
        observable: &ObservableGameState,
        rng: &mut impl Rng,
    ) -> Option<Move> {
        let mut engine = ISMCTSEngine::new(self.config);
        let (best_move, stats) = engine.search(observable, rng);

        if self.config.verbose {
            info!(
                "IS-MCTS: {} root visits, {} children, cache size {}, best move {:?} ({} visits, {:.2} avg reward)",
                stats.total_visits,
                stats.num_children,
                stats.info_set_cache_size,
                stats.best_move,
                stats.best_move_visits,
                stats.best_move_reward,
            );
        }

        best_move
    }
}
