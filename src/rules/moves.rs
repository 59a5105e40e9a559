//! Move representation.
//!
//! A `Move` names one card-changing command together with its pile indices.
//! Indices are 0-based and are not range-checked here; legality checks treat
//! out-of-range indices as illegal.

use serde::{Deserialize, Serialize};

/// A single player move.
///
/// ```
/// use rust_solitaire::rules::Move;
///
/// let mv = Move::TableauToTableau { from: 2, card_index: 1, to: 5 };
/// assert_eq!(mv.to_string(), "tableau 2[1] -> tableau 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Turn up to `draw_count` cards from stock onto waste.
    DrawFromStock,
    /// Turn the waste back over into an empty stock.
    RecycleWaste,
    /// Top card of a tableau pile onto a foundation.
    TableauToFoundation { pile: usize, foundation: usize },
    /// Face-up run starting at `card_index` onto another tableau pile.
    TableauToTableau { from: usize, card_index: usize, to: usize },
    /// Top waste card onto a tableau pile.
    WasteToTableau { pile: usize },
    /// Top waste card onto a foundation.
    WasteToFoundation { foundation: usize },
}

impl Move {
    /// True for moves that put a card on a foundation.
    #[must_use]
    pub const fn targets_foundation(self) -> bool {
        matches!(
            self,
            Move::TableauToFoundation { .. } | Move::WasteToFoundation { .. }
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Move::DrawFromStock => write!(f, "draw"),
            Move::RecycleWaste => write!(f, "recycle"),
            Move::TableauToFoundation { pile, foundation } => {
                write!(f, "tableau {pile} -> foundation {foundation}")
            }
            Move::TableauToTableau { from, card_index, to } => {
                write!(f, "tableau {from}[{card_index}] -> tableau {to}")
            }
            Move::WasteToTableau { pile } => write!(f, "waste -> tableau {pile}"),
            Move::WasteToFoundation { foundation } => write!(f, "waste -> foundation {foundation}"),
        }
    }
}
