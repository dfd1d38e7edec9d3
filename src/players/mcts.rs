//! The IS-MCTS strategy, adapted to the [`Strategy`] trait.

use rand_mt::Mt64;

use crate::engine::observable::ObservableGameState;
use crate::engine::Move;
use crate::search::{ISMCTSStrategy, SearchConfig};

use super::Strategy;

pub struct MctsStrategy {
    inner: ISMCTSStrategy,
    rng: Mt64,
}

impl MctsStrategy {
    pub fn new(config: SearchConfig, seed: u64) -> Self {
        MctsStrategy {
            inner: ISMCTSStrategy::new(config),
            rng: Mt64::new(seed),
        }
    }
}

impl Strategy for MctsStrategy {
    fn name(&self) -> &str {
        "ismcts"
    }

    fn recommend_move(&mut self, observable: &ObservableGameState) -> Option<Move> {
        self.inner.recommend_move(observable, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::deck::Deck;
    use crate::engine::state::GameState;

    #[test]
    fn recommends_a_legal_move() {
        let mut rng = Mt64::new(51);
        let deck = Deck::new_random(&mut rng);
        let state = GameState::new(deck);
        let observable = ObservableGameState::from_game_state(&state, vec![]);

        let mut strategy = MctsStrategy::new(
            SearchConfig {
                iterations: 25,
                ..SearchConfig::default()
            },
            52,
        );
        let mv = strategy.recommend_move(&observable).unwrap();
        assert!(observable.hand().contains(mv.0));
    }
}
