//! The player's hand.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::card::Card;

/// An ordered multiset of up to 5 cards. Duplicates cannot occur because the
/// universe itself is a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first occurrence of `card`. Returns `false` if not found.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The hand's cards sorted by `(suit, rank)`, used to build a canonical
    /// [`crate::search::InformationSet`] key.
    pub fn sorted(&self) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .sorted_by(|a, b| a.cmp(b))
            .collect()
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::card::Suit;

    #[test]
    fn add_and_remove() {
        let mut hand = Hand::new();
        let card = Card::new(Suit::A, 5);
        hand.add(card);
        assert!(hand.contains(card));
        assert_eq!(hand.len(), 1);
        assert!(hand.remove(card));
        assert!(hand.is_empty());
        assert!(!hand.remove(card));
    }

    #[test]
    fn sorted_ignores_insertion_order() {
        let mut hand = Hand::new();
        hand.add(Card::new(Suit::B, 1));
        hand.add(Card::new(Suit::A, 5));
        assert_eq!(
            hand.sorted(),
            vec![Card::new(Suit::A, 5), Card::new(Suit::B, 1)]
        );
    }
}
