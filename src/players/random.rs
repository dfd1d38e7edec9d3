//! A uniformly-random opponent, used as the IS-MCTS baseline.

use log::debug;
use rand::Rng;
use rand_mt::Mt64;

use crate::engine::observable::ObservableGameState;
use crate::engine::rules::MoveValidator;
use crate::engine::Move;

use super::Strategy;

pub struct RandomStrategy {
    rng: Mt64,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        RandomStrategy { rng: Mt64::new(seed) }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn recommend_move(&mut self, observable: &ObservableGameState) -> Option<Move> {
        let legal = MoveValidator::legal_moves(observable.hand(), observable.field());
        debug!("{} legal moves", legal.len());
        if legal.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..legal.len());
        Some(legal[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::card::{Card, Suit};
    use crate::engine::deck::Deck;
    use crate::engine::state::GameState;

    #[test]
    fn picks_a_move_from_the_legal_set() {
        let mut rng = Mt64::new(41);
        let deck = Deck::new_random(&mut rng);
        let state = GameState::new(deck);
        let observable = ObservableGameState::from_game_state(&state, vec![]);

        let mut strategy = RandomStrategy::new(42);
        let mv = strategy.recommend_move(&observable).unwrap();
        let legal = MoveValidator::legal_moves(observable.hand(), observable.field());
        assert!(legal.contains(&mv));
    }

    #[test]
    fn returns_none_when_terminal() {
        use crate::engine::field::{Field, Slot};
        use crate::engine::hand::Hand;

        let mut hand = Hand::new();
        hand.add(Card::new(Suit::C, 3));
        let mut field = Field::new();
        field.place(Slot::One, Card::new(Suit::A, 1));
        field.place(Slot::Two, Card::new(Suit::B, 2));
        let deck =
            Deck::from_parts(vec![], crate::engine::card::universe()[70..80].to_vec()).unwrap();
        let state = GameState::from_parts(deck, hand, field, 0);
        let observable = ObservableGameState::from_game_state(&state, vec![]);

        let mut strategy = RandomStrategy::new(1);
        assert_eq!(strategy.recommend_move(&observable), None);
    }
}
