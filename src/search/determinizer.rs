//! Sampling a concrete [`GameState`] consistent with an observed state.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::card::Card;
use crate::engine::deck::Deck;
use crate::engine::observable::ObservableGameState;
use crate::engine::state::GameState;

/// Resolves hidden information by sampling: the unknown cards (deck
/// candidates plus the 10 excluded cards) are shuffled once, the first 10
/// become the excluded set, and the rest become the deck order.
pub struct Determinizer;

impl Determinizer {
    /// Draws one determinization of `observable` using `rng`.
    pub fn create_determinization(
        observable: &ObservableGameState,
        rng: &mut impl Rng,
    ) -> GameState {
        let mut unknown = observable.unknown_cards();
        unknown.shuffle(rng);

        let excluded: Vec<Card> = unknown.split_off(unknown.len() - 10);
        let deck_cards = unknown;

        trace!(
            "determinized {} deck cards, {} excluded",
            deck_cards.len(),
            excluded.len()
        );

        let deck = Deck::from_parts(deck_cards, excluded)
            .expect("determinizer always partitions unknown cards into 70 + 10");
        GameState::from_parts(
            deck,
            observable.hand().clone(),
            observable.field().clone(),
            observable.cards_played_count(),
        )
    }

    /// Draws `count` independent determinizations.
    pub fn create_multiple(
        observable: &ObservableGameState,
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GameState> {
        (0..count)
            .map(|_| Self::create_determinization(observable, rng))
            .collect()
    }
}
