//! The canonical key that groups indistinguishable states for tree sharing.

use std::fmt::{self, Display, Formatter};

use crate::engine::card::Card;
use crate::engine::field::{Field, Slot};
use crate::engine::hand::Hand;

/// Identifies the set of states a player cannot tell apart: the hand
/// (order-independent), the two field-slot tops, and the *count* of cards
/// played so far (not their identities). Two determinizations that agree on
/// all four fields share one [`super::ISMCTSNode`]'s statistics.
///
/// Deriving `Ord` (rather than relying on `Hash`/`HashMap`) keeps tree
/// iteration deterministic across runs with the same seed: `HashMap`'s
/// default hasher is randomly seeded per process, which would make
/// tie-breaking among equally-visited children vary from run to run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InformationSet {
    hand_cards: Vec<Card>,
    field_top_slot1: Option<Card>,
    field_top_slot2: Option<Card>,
    cards_played_count: u32,
}

impl InformationSet {
    pub fn new(hand: &Hand, field: &Field, cards_played_count: u32) -> Self {
        InformationSet {
            hand_cards: hand.sorted(),
            field_top_slot1: field.top(Slot::One),
            field_top_slot2: field.top(Slot::Two),
            cards_played_count,
        }
    }

    pub fn hand_cards(&self) -> &[Card] {
        &self.hand_cards
    }

    pub fn cards_played_count(&self) -> u32 {
        self.cards_played_count
    }
}

impl Display for InformationSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InformationSet(hand_size={}, slot1={:?}, slot2={:?}, played={})",
            self.hand_cards.len(),
            self.field_top_slot1,
            self.field_top_slot2,
            self.cards_played_count
        )
    }
}
