//! Turns a finished game into the scalar reward IS-MCTS backpropagates.

use crate::engine::state::GameState;

/// Scores a terminal (or cut-off) [`GameState`]. Cards played dominates;
/// bonus points are a tiebreaker, matching the rulebook's `10*cards + 1*
/// bonus` reward.
pub struct Evaluator;

impl Evaluator {
    const CARDS_WEIGHT: f64 = 10.0;
    const POINTS_WEIGHT: f64 = 1.0;

    pub fn evaluate(state: &GameState) -> f64 {
        state.cards_played_count() as f64 * Self::CARDS_WEIGHT
            + state.bonus_points() as f64 * Self::POINTS_WEIGHT
    }

    /// Orders two states the same way [`Evaluator::evaluate`] would:
    /// `Greater` if `a` is better, `Less` if `b` is better, `Equal` if tied.
    pub fn compare(a: &GameState, b: &GameState) -> std::cmp::Ordering {
        Self::evaluate(a)
            .partial_cmp(&Self::evaluate(b))
            .expect("evaluate() never produces NaN")
    }

    /// Maps a raw `(cards_played, total_points)` pair onto `[0, 1]`, for
    /// reporting and comparisons across games of different lengths. Not
    /// used inside the search itself, which works with unnormalized reward.
    pub fn normalize_score(cards_played: u32, total_points: i32, max_cards: u32) -> f64 {
        let cards_score = cards_played as f64 / max_cards as f64;
        let points_score = (total_points as f64 / 50.0).min(1.0);
        cards_score * 0.8 + points_score * 0.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::card::{Card, Suit};
    use crate::engine::deck::Deck;
    use crate::engine::field::Field;
    use crate::engine::hand::Hand;

    #[test]
    fn evaluate_weighs_cards_over_points() {
        let deck = Deck::from_parts(vec![], crate::engine::card::universe()[70..80].to_vec())
            .unwrap();
        let hand = Hand::new();
        let field = Field::new();
        let state = GameState::from_parts(deck, hand, field, 7);
        assert_eq!(Evaluator::evaluate(&state), 70.0);
    }

    #[test]
    fn normalize_score_is_bounded() {
        let score = Evaluator::normalize_score(70, 50, 70);
        assert!((score - 1.0).abs() < 1e-9);
        let zero = Evaluator::normalize_score(0, 0, 70);
        assert_eq!(zero, 0.0);
    }

    #[test]
    fn compare_orders_by_evaluate() {
        let deck_a =
            Deck::from_parts(vec![], crate::engine::card::universe()[70..80].to_vec()).unwrap();
        let mut hand_a = Hand::new();
        hand_a.add(Card::new(Suit::A, 1));
        let a = GameState::from_parts(deck_a, hand_a, Field::new(), 3);

        let deck_b =
            Deck::from_parts(vec![], crate::engine::card::universe()[70..80].to_vec()).unwrap();
        let b = GameState::from_parts(deck_b, Hand::new(), Field::new(), 1);

        assert_eq!(Evaluator::compare(&a, &b), std::cmp::Ordering::Greater);
    }
}
