//! Tableau piles: columns of face-down cards under a face-up run.
//!
//! Index 0 is the bottom of the column, the last index is the top.
//! Cards are only ever added to or removed from the top, so the face-up
//! cards always form a contiguous run at the end.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A card on the tableau with its face-up flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableauCard {
    pub card: Card,
    pub face_up: bool,
}

impl TableauCard {
    #[must_use]
    pub const fn face_up(card: Card) -> Self {
        Self { card, face_up: true }
    }

    #[must_use]
    pub const fn face_down(card: Card) -> Self {
        Self { card, face_up: false }
    }
}

/// One tableau column.
///
/// Backed by `im::Vector` so cloning a pile for a snapshot is O(1) and
/// later mutation of either copy leaves the other untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauPile {
    cards: Vector<TableauCard>,
}

impl TableauPile {
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

    /// Top (last) card.
    #[must_use]
    pub fn top(&self) -> Option<TableauCard> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<TableauCard> {
        self.cards.get(index).copied()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &TableauCard> {
        self.cards.iter()
    }

    pub fn push(&mut self, card: TableauCard) {
        self.cards.push_back(card);
    }

    pub fn pop(&mut self) -> Option<TableauCard> {
        self.cards.pop_back()
    }

    /// Remove and return every card from `index` to the top.
    ///
    /// Returns an empty run if `index` is past the end.
    pub fn split_off(&mut self, index: usize) -> Vector<TableauCard> {
        if index >= self.cards.len() {
            return Vector::new();
        }
        self.cards.split_off(index)
    }

    /// Place a run on top, preserving its order.
    pub fn append(&mut self, run: Vector<TableauCard>) {
        self.cards.append(run);
    }

    /// Turn the top card face up.
    ///
    /// Returns true only if a face-down card was flipped.
    pub fn flip_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(top) if !top.face_up => {
                top.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// True if the card at `index` and everything above it is face up.
    #[must_use]
    pub fn is_face_up_run_from(&self, index: usize) -> bool {
        index < self.cards.len() && self.cards.iter().skip(index).all(|c| c.face_up)
    }

    /// Index of the lowest face-up card, if any.
    #[must_use]
    pub fn face_up_start(&self) -> Option<usize> {
        let face_down = self.cards.iter().take_while(|c| !c.face_up).count();
        (face_down < self.cards.len()).then_some(face_down)
    }

    /// Plain cards, bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|c| c.card)
    }
}

impl FromIterator<TableauCard> for TableauPile {
    fn from_iter<I: IntoIterator<Item = TableauCard>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
