//! Pure functions over hand/field: scoring and legal-move enumeration.

use log::trace;

use super::card::Card;
use super::field::{Field, Slot};
use super::hand::Hand;
use super::Move;

/// Scores a hand's pattern. Patterns are checked in strict descending
/// priority and the first match wins — this is not additive, except for
/// the quadruple bonus which only applies when no higher pattern matched.
pub struct PointCalculator;

impl PointCalculator {
    const FLUSH_RUN: i32 = 50;
    const QUINTUPLE: i32 = 5;
    const RUN: i32 = 2;
    const QUADRUPLE: i32 = 1;

    pub fn calculate_points(hand: &[Card]) -> i32 {
        if hand.len() < 4 {
            return 0;
        }

        if hand.len() == 5 {
            if Self::is_flush_run(hand) {
                return Self::FLUSH_RUN;
            }
            if Self::is_quintuple(hand) {
                return Self::QUINTUPLE;
            }
            if Self::is_run(hand) {
                return Self::RUN;
            }
        }

        if Self::has_quadruple(hand) {
            return Self::QUADRUPLE;
        }

        0
    }

    fn sorted_ranks(hand: &[Card]) -> Vec<u8> {
        let mut ranks: Vec<u8> = hand.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();
        ranks
    }

    fn is_run(hand: &[Card]) -> bool {
        if hand.len() != 5 {
            return false;
        }
        let ranks = Self::sorted_ranks(hand);
        ranks.windows(2).all(|w| w[1] - w[0] == 1)
    }

    fn is_quintuple(hand: &[Card]) -> bool {
        hand.len() == 5 && hand.iter().all(|c| c.rank == hand[0].rank)
    }

    fn is_flush_run(hand: &[Card]) -> bool {
        hand.len() == 5 && hand.iter().all(|c| c.suit == hand[0].suit) && Self::is_run(hand)
    }

    fn has_quadruple(hand: &[Card]) -> bool {
        for &rank in &Self::sorted_ranks(hand) {
            if hand.iter().filter(|c| c.rank == rank).count() >= 4 {
                return true;
            }
        }
        false
    }
}

/// Enumerates legal `(card, slot)` moves for a hand against a field.
pub struct MoveValidator;

impl MoveValidator {
    /// A card is playable on a slot iff the slot is empty, or shares the
    /// top card's suit, or shares its rank.
    pub fn can_play(card: Card, top: Option<Card>) -> bool {
        match top {
            None => true,
            Some(top) => card.suit == top.suit || card.rank == top.rank,
        }
    }

    /// All legal `(card, slot)` pairs. If a card is legal on both slots,
    /// both pairs are returned — the slot is a real decision, not a
    /// tie-break.
    pub fn legal_moves(hand: &Hand, field: &Field) -> Vec<Move> {
        let mut moves = Vec::new();
        for &card in hand.cards() {
            for slot in Slot::ALL {
                if Self::can_play(card, field.top(slot)) {
                    moves.push((card, slot));
                }
            }
        }
        trace!("{} legal moves", moves.len());
        moves
    }

    pub fn has_legal(hand: &Hand, field: &Field) -> bool {
        hand.cards()
            .iter()
            .any(|&card| Slot::ALL.iter().any(|&slot| Self::can_play(card, field.top(slot))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::card::Suit;

    fn hand_of(cards: &[(Suit, u8)]) -> Vec<Card> {
        cards.iter().map(|&(s, r)| Card::new(s, r)).collect()
    }

    #[test]
    fn flush_run_scores_50() {
        let hand = hand_of(&[
            (Suit::A, 1),
            (Suit::A, 2),
            (Suit::A, 3),
            (Suit::A, 4),
            (Suit::A, 5),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 50);
    }

    #[test]
    fn mixed_suit_run_scores_2() {
        let hand = hand_of(&[
            (Suit::A, 2),
            (Suit::B, 3),
            (Suit::C, 4),
            (Suit::D, 5),
            (Suit::E, 6),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 2);
    }

    #[test]
    fn quintuple_scores_5() {
        let hand = hand_of(&[
            (Suit::A, 5),
            (Suit::B, 5),
            (Suit::C, 5),
            (Suit::D, 5),
            (Suit::E, 5),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 5);
    }

    #[test]
    fn quadruple_scores_1() {
        let hand = hand_of(&[
            (Suit::A, 5),
            (Suit::B, 5),
            (Suit::C, 5),
            (Suit::D, 5),
            (Suit::E, 9),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 1);
    }

    #[test]
    fn no_pattern_scores_0() {
        let hand = hand_of(&[
            (Suit::A, 1),
            (Suit::B, 3),
            (Suit::C, 5),
            (Suit::D, 7),
            (Suit::E, 9),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 0);
    }

    #[test]
    fn same_suit_non_run_scores_0() {
        let hand = hand_of(&[
            (Suit::A, 1),
            (Suit::A, 3),
            (Suit::A, 5),
            (Suit::A, 7),
            (Suit::A, 9),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 0);
    }

    #[test]
    fn rank_10_does_not_wrap() {
        let hand = hand_of(&[
            (Suit::A, 8),
            (Suit::B, 9),
            (Suit::C, 10),
            (Suit::D, 1),
            (Suit::E, 2),
        ]);
        assert_eq!(PointCalculator::calculate_points(&hand), 0);
    }

    #[test]
    fn empty_field_any_card_legal_on_both_slots() {
        let mut hand = Hand::new();
        hand.add(Card::new(Suit::A, 5));
        hand.add(Card::new(Suit::B, 3));
        let field = Field::new();
        let mut moves = MoveValidator::legal_moves(&hand, &field);
        moves.sort();
        let mut expected = vec![
            (Card::new(Suit::A, 5), Slot::One),
            (Card::new(Suit::A, 5), Slot::Two),
            (Card::new(Suit::B, 3), Slot::One),
            (Card::new(Suit::B, 3), Slot::Two),
        ];
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn suit_or_rank_match_required_when_slot_occupied() {
        let mut hand = Hand::new();
        hand.add(Card::new(Suit::A, 3));
        hand.add(Card::new(Suit::C, 5));
        hand.add(Card::new(Suit::D, 7));
        let mut field = Field::new();
        field.place(Slot::One, Card::new(Suit::A, 5));

        assert!(MoveValidator::can_play(
            Card::new(Suit::A, 3),
            field.top(Slot::One)
        ));
        assert!(MoveValidator::can_play(
            Card::new(Suit::C, 5),
            field.top(Slot::One)
        ));
        assert!(!MoveValidator::can_play(
            Card::new(Suit::D, 7),
            field.top(Slot::One)
        ));
        // All three are legal on the still-empty slot 2.
        for &card in hand.cards() {
            assert!(MoveValidator::can_play(card, field.top(Slot::Two)));
        }
    }

    #[test]
    fn no_legal_move_is_terminal() {
        let mut hand = Hand::new();
        hand.add(Card::new(Suit::C, 3));
        hand.add(Card::new(Suit::D, 4));
        let mut field = Field::new();
        field.place(Slot::One, Card::new(Suit::A, 1));
        field.place(Slot::Two, Card::new(Suit::B, 2));

        assert!(!MoveValidator::has_legal(&hand, &field));
        assert!(MoveValidator::legal_moves(&hand, &field).is_empty());
    }

    #[test]
    fn has_legal_matches_non_empty_legal_moves() {
        let mut hand = Hand::new();
        hand.add(Card::new(Suit::A, 5));
        let field = Field::new();
        assert_eq!(
            MoveValidator::has_legal(&hand, &field),
            !MoveValidator::legal_moves(&hand, &field).is_empty()
        );
    }
}
