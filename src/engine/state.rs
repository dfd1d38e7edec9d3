//! The fully-specified game state: deck, hand, field and running score.

use std::fmt::{self, Display, Formatter};

use log::debug;

use super::card::Card;
use super::deck::Deck;
use super::field::{Field, Slot};
use super::hand::Hand;
use super::rules::{MoveValidator, PointCalculator};
use super::{Move, HAND_SIZE};

/// A fully-specified game state: one exact deck order, one exact hand, and
/// the field. This is what a determinization resolves to and what the
/// search actually simulates against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    deck: Deck,
    hand: Hand,
    field: Field,
    cards_played: u32,
    bonus_points: i32,
}

impl GameState {
    /// Deals an initial hand of [`HAND_SIZE`] cards from `deck` and returns
    /// the starting state.
    pub fn new(mut deck: Deck) -> Self {
        let mut hand = Hand::new();
        for _ in 0..HAND_SIZE {
            if let Some(card) = deck.draw() {
                hand.add(card);
            }
        }
        let bonus_points = PointCalculator::calculate_points(hand.cards());
        GameState {
            deck,
            hand,
            field: Field::new(),
            cards_played: 0,
            bonus_points,
        }
    }

    /// Reconstructs a state directly from its parts, used by the
    /// determinizer to resolve an [`super::observable::ObservableGameState`]
    /// into a concrete one.
    pub fn from_parts(deck: Deck, hand: Hand, field: Field, cards_played: u32) -> Self {
        let bonus_points = PointCalculator::calculate_points(hand.cards());
        GameState {
            deck,
            hand,
            field,
            cards_played,
            bonus_points,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards_played_count(&self) -> u32 {
        self.cards_played
    }

    /// The current hand's pattern bonus. Recomputed from the hand's present
    /// contents each time it changes, not accumulated across turns.
    pub fn bonus_points(&self) -> i32 {
        self.bonus_points
    }

    pub fn total_points(&self) -> i32 {
        self.cards_played as i32 * 10 + self.bonus_points
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        MoveValidator::legal_moves(&self.hand, &self.field)
    }

    pub fn is_terminal(&self) -> bool {
        !MoveValidator::has_legal(&self.hand, &self.field)
    }

    /// Plays `card` onto `slot`, draws a replacement if the deck has one,
    /// and refreshes the bonus score from the hand's new contents.
    ///
    /// Fails (returns `false`, no mutation) unless `card` is in hand AND the
    /// move is legal on `slot`. Not every caller holds a move freshly drawn
    /// from [`GameState::legal_moves`] against this exact state — the search
    /// engine plays moves across determinizations that may have dealt a
    /// different hand — so this is a normal, expected outcome, not an
    /// invariant violation.
    pub fn play(&mut self, mv: Move) -> bool {
        let (card, slot) = mv;
        if !self.hand.contains(card) {
            return false;
        }
        if !MoveValidator::can_play(card, self.field.top(slot)) {
            return false;
        }

        let removed = self.hand.remove(card);
        debug_assert!(removed, "card {card} was in hand and then vanished");

        self.field.place(slot, card);
        self.cards_played += 1;

        if let Some(drawn) = self.deck.draw() {
            self.hand.add(drawn);
        }

        self.bonus_points = PointCalculator::calculate_points(self.hand.cards());
        debug!(
            "played {card} on {slot}: cards_played={}, bonus={}",
            self.cards_played, self.bonus_points
        );
        true
    }

    /// Moves `card` from the deck's playable pile into the hand and
    /// refreshes the bonus score. Fails (returns `false`, no mutation)
    /// unless `card` is currently in the deck and not already in hand.
    pub fn deal_to_hand(&mut self, card: Card) -> bool {
        if self.hand.contains(card) {
            return false;
        }
        let Some(card) = self.deck.take(card) else {
            return false;
        };
        self.hand.add(card);
        self.bonus_points = PointCalculator::calculate_points(self.hand.cards());
        true
    }

    pub fn top(&self, slot: Slot) -> Option<Card> {
        self.field.top(slot)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameState(hand: {}, field: {}, played: {}, points: {})",
            self.hand,
            self.field,
            self.cards_played,
            self.total_points()
        )
    }
}
