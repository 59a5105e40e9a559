//! Foundation piles: one suit each, built Ace to King.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Cards in a complete foundation.
pub const FOUNDATION_SIZE: usize = 13;

/// One foundation pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationPile {
    cards: Vector<Card>,
}

impl FoundationPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Suit of the pile, once it has an Ace.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.cards.front().map(|c| c.suit())
    }

    /// True if `card` may be placed next.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        card.follows_on_foundation(self.top())
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// One suit, ranks Ace upward with no gaps.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let suit = self.suit();
        self.cards.len() <= FOUNDATION_SIZE
            && self
                .cards
                .iter()
                .zip(Rank::ALL)
                .all(|(card, rank)| card.rank() == rank && Some(card.suit()) == suit)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == FOUNDATION_SIZE
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for FoundationPile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
