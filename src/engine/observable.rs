//! What a player actually knows: hand, field, and running totals, with the
//! deck order and excluded cards hidden.

use std::fmt::{self, Display, Formatter};

use super::card::Card;
use super::field::Field;
use super::hand::Hand;
use super::state::GameState;

/// The imperfect-information view of a [`GameState`]: everything a player
/// has actually observed, with the deck's exact order and the 10 excluded
/// cards held back. This is what the search is handed; it resolves
/// [determinizations](crate::search::Determinizer) from it internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableGameState {
    hand: Hand,
    field: Field,
    played_cards: Vec<Card>,
    bonus_points: i32,
    turn_count: u32,
    remaining_deck_size: usize,
}

impl ObservableGameState {
    /// Builds the observable view of a concrete state, given the cards
    /// played onto the field so far (their identities are known even
    /// though the deck behind them is not).
    pub fn from_game_state(state: &GameState, played_cards: Vec<Card>) -> Self {
        ObservableGameState {
            hand: state.hand().clone(),
            field: state.field().clone(),
            turn_count: played_cards.len() as u32,
            played_cards,
            bonus_points: state.bonus_points(),
            remaining_deck_size: state.deck().remaining_count(),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    pub fn bonus_points(&self) -> i32 {
        self.bonus_points
    }

    /// Number of cards played so far; equal to `cards_played_count`, kept as
    /// its own accessor because the rulebook names it `turn_count`.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn total_points(&self) -> i32 {
        self.turn_count as i32 * 10 + self.bonus_points
    }

    pub fn remaining_deck_size(&self) -> usize {
        self.remaining_deck_size
    }

    pub fn cards_played_count(&self) -> u32 {
        self.played_cards.len() as u32
    }

    /// The 80-card universe minus the hand and whatever has already been
    /// played: every card that could still be in the deck or the excluded
    /// set. A determinization samples 10 of these as excluded and shuffles
    /// the rest into a deck order.
    pub fn unknown_cards(&self) -> Vec<Card> {
        let known: std::collections::HashSet<Card> = self
            .hand
            .cards()
            .iter()
            .chain(self.played_cards.iter())
            .copied()
            .collect();
        super::card::universe()
            .iter()
            .copied()
            .filter(|c| !known.contains(c))
            .collect()
    }
}

impl Display for ObservableGameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ObservableGameState(hand={}, played={}, deck_remaining={}, points={})",
            self.hand.len(),
            self.played_cards.len(),
            self.remaining_deck_size,
            self.total_points()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::deck::Deck;
    use rand_mt::Mt64;

    #[test]
    fn unknown_cards_excludes_hand_and_played() {
        let mut rng = Mt64::new(21);
        let deck = Deck::new_random(&mut rng);
        let state = GameState::new(deck);
        let obs = ObservableGameState::from_game_state(&state, vec![]);

        assert_eq!(
            obs.unknown_cards().len(),
            80 - obs.hand().len() - obs.played_cards().len()
        );
        for card in obs.hand().cards() {
            assert!(!obs.unknown_cards().contains(card));
        }
    }

    #[test]
    fn played_cards_are_removed_from_unknown() {
        let mut rng = Mt64::new(22);
        let deck = Deck::new_random(&mut rng);
        let state = GameState::new(deck);
        let played = vec![state.hand().cards()[0]];
        let obs = ObservableGameState::from_game_state(&state, played.clone());
        assert!(!obs.unknown_cards().contains(&played[0]));
    }
}
