//! The playable pile and the excluded set.

use anyhow::{ensure, Result};
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{self, Card};
use super::EXCLUDED_COUNT;

/// Two disjoint piles drawn from the [universe](card::universe): `playable`
/// (an ordered stack, drawn from the end) and `excluded` (the 10 cards
/// hidden from play for this game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    playable: Vec<Card>,
    excluded: Vec<Card>,
}

impl Deck {
    /// Shuffles the universe, sets aside 10 cards as excluded, and leaves the
    /// rest shuffled as the playable pile.
    pub fn new_random(rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = card::universe().to_vec();
        cards.shuffle(rng);
        let excluded = cards.split_off(cards.len() - EXCLUDED_COUNT);
        Deck {
            playable: cards,
            excluded,
        }
    }

    /// Builds a deck from explicit playable and excluded piles.
    ///
    /// Fails (`InvalidConfiguration`) unless `excluded` has exactly 10 cards
    /// and no card appears in both piles (or twice within one). Note this
    /// does NOT require `playable.len() + excluded.len() == 80`: once a hand
    /// has been dealt, those cards have left the deck, so a reconstructed
    /// deck (the determinizer's job) is legitimately smaller than the full
    /// universe.
    pub fn from_parts(playable: Vec<Card>, excluded: Vec<Card>) -> Result<Self> {
        ensure!(
            excluded.len() == EXCLUDED_COUNT,
            "excluded set must have exactly {EXCLUDED_COUNT} cards, got {}",
            excluded.len()
        );
        let total = playable.len() + excluded.len();
        let mut seen: Vec<Card> = playable.iter().chain(excluded.iter()).copied().collect();
        seen.sort();
        seen.dedup();
        ensure!(
            seen.len() == total,
            "playable and excluded must be disjoint, with no duplicate cards"
        );
        Ok(Deck { playable, excluded })
    }

    /// Removes and returns the last card in the playable pile, or `None` if
    /// it's empty. No error: an empty-deck draw is a normal outcome (spec
    /// `EmptyDeckDraw`).
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.playable.pop();
        trace!("drew {:?}, {} remaining", card, self.playable.len());
        card
    }

    /// Removes a specific card from the playable pile if present, for
    /// `GameState::deal_to_hand`. Not part of normal draw discipline.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let pos = self.playable.iter().position(|&c| c == card)?;
        Some(self.playable.remove(pos))
    }

    pub fn remaining_count(&self) -> usize {
        self.playable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playable.is_empty()
    }

    pub fn playable(&self) -> &[Card] {
        &self.playable
    }

    pub fn excluded(&self) -> &[Card] {
        &self.excluded
    }
}
