//! The 52-card deck.
//!
//! `Deck::new()` yields cards in canonical order (suit by suit, Ace to King).
//! Drawing takes from the front; an empty deck yields `None`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of the 52 distinct cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create a deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Reorder into a uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
