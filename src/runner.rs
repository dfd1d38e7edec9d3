//! Drives one game to completion against a [`players::Strategy`].

use log::debug;

use crate::engine::card::Card;
use crate::engine::deck::Deck;
use crate::engine::observable::ObservableGameState;
use crate::engine::state::GameState;
use crate::players::Strategy;

/// The outcome of one complete game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub cards_played: u32,
    pub total_points: i32,
}

/// Plays a single-player game to completion: deal, then repeatedly ask
/// `strategy` for a move against the observable view of the state until no
/// legal move remains.
pub struct GameDriver;

impl GameDriver {
    pub fn play_game(deck: Deck, strategy: &mut impl Strategy) -> GameResult {
        let mut state = GameState::new(deck);
        let mut played_cards: Vec<Card> = Vec::new();

        loop {
            let observable = ObservableGameState::from_game_state(&state, played_cards.clone());
            let Some(mv) = strategy.recommend_move(&observable) else {
                break;
            };
            debug!("{} plays {:?}", strategy.name(), mv);
            played_cards.push(mv.0);
            let played = state.play(mv);
            debug_assert!(played, "strategy recommended a move illegal for its own observable state");
        }

        GameResult {
            cards_played: state.cards_played_count(),
            total_points: state.total_points(),
        }
    }
}
