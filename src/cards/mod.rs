//! Card and deck primitives.
//!
//! - `Card`: immutable suit + rank value
//! - `Deck`: the 52 distinct cards, shuffled uniformly, drawn from the front

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
