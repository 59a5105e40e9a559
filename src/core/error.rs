//! Engine errors.
//!
//! Illegal moves are not errors; they are silent no-ops. `EngineError` only
//! covers rule configuration at the host boundary and snapshot restore.

use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("draw count must be 1 or 3, got {0}")]
    InvalidDrawCount(u8),

    #[error("tableau pile count must be between 1 and {max}, got {found}")]
    InvalidTableauPileCount { found: usize, max: usize },

    #[error("layout holds {found} cards, expected {expected}")]
    CardCount { expected: usize, found: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("layout has {0} foundations, expected 4")]
    FoundationCount(usize),

    #[error("layout declares {declared} tableau piles but holds {found}")]
    TableauPileMismatch { declared: usize, found: usize },

    #[error("tableau pile {pile} has a face-down card above a face-up one")]
    FaceDownInRun { pile: usize },

    #[error("tableau pile {pile} has a face-down top card")]
    CoveredTop { pile: usize },

    #[error("foundation {foundation} is not one suit built up from Ace")]
    FoundationOrder { foundation: usize },

    #[error("win flag is {flagged} but the layout disagrees")]
    WinFlagMismatch { flagged: bool },

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
