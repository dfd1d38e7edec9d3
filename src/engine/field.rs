//! The two-slot field.

use std::fmt::{self, Display, Formatter};

use super::card::Card;

/// One of the field's two slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::One, Slot::Two];
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::One => write!(f, "1"),
            Slot::Two => write!(f, "2"),
        }
    }
}

/// A stack of cards. Only `top()` constrains legality; the rest of the
/// stack is kept for diagnostics and replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSlot {
    cards: Vec<Card>,
}

impl FieldSlot {
    pub fn new() -> Self {
        FieldSlot::default()
    }

    pub fn place(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The field: two independent stacks, indexed by [`Slot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    slot1: FieldSlot,
    slot2: FieldSlot,
}

impl Field {
    pub fn new() -> Self {
        Field::default()
    }

    pub fn get(&self, slot: Slot) -> &FieldSlot {
        match slot {
            Slot::One => &self.slot1,
            Slot::Two => &self.slot2,
        }
    }

    pub fn place(&mut self, slot: Slot, card: Card) {
        match slot {
            Slot::One => self.slot1.place(card),
            Slot::Two => self.slot2.place(card),
        }
    }

    pub fn top(&self, slot: Slot) -> Option<Card> {
        self.get(slot).top()
    }

    pub fn total_cards_count(&self) -> usize {
        self.slot1.len() + self.slot2.len()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field(slot1: {:?}, slot2: {:?})",
            self.slot1.top(),
            self.slot2.top()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::card::Suit;

    #[test]
    fn empty_slot_has_no_top() {
        let field = Field::new();
        assert_eq!(field.top(Slot::One), None);
        assert_eq!(field.top(Slot::Two), None);
    }

    #[test]
    fn place_updates_top_only() {
        let mut field = Field::new();
        let a = Card::new(Suit::A, 1);
        let b = Card::new(Suit::B, 2);
        field.place(Slot::One, a);
        field.place(Slot::One, b);
        assert_eq!(field.top(Slot::One), Some(b));
        assert_eq!(field.get(Slot::One).len(), 2);
        assert_eq!(field.total_cards_count(), 2);
    }
}
