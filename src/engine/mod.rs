pub mod card;
pub mod deck;
pub mod field;
pub mod hand;
pub mod observable;
pub mod rules;
pub mod state;

pub use card::{Card, Suit};
pub use deck::Deck;
pub use field::{Field, Slot};
pub use hand::Hand;
pub use observable::ObservableGameState;
pub use rules::{MoveValidator, PointCalculator};
pub use state::GameState;

/// A player's choice: the card to play and the slot to play it into.
pub type Move = (Card, Slot);

pub const HAND_SIZE: usize = 5;
pub const EXCLUDED_COUNT: usize = 10;
pub const UNIVERSE_SIZE: usize = 80;
pub const INITIAL_DECK_SIZE: usize = UNIVERSE_SIZE - EXCLUDED_COUNT;
