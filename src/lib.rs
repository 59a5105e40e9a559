//! # rust-solitaire
//!
//! A Klondike solitaire rule engine.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pure**: Every legality check is a function of the layout
//!    (and, for recycling, the rules in force). Commands are gated on those
//!    same predicates, so a query and a command never disagree.
//!
//! 2. **Rejection Is Silent**: An illegal command leaves the game exactly as
//!    it was. No history entry, no score change, no notification.
//!
//! 3. **Snapshots Are Cheap**: Piles use `im-rs` persistent vectors, so undo
//!    snapshots share structure with the live layout.
//!
//! ## Modules
//!
//! - `core`: Rules configuration, game state, score, timer, RNG, errors
//! - `cards`: Card values and the 52-card deck
//! - `zones`: Tableau and foundation piles
//! - `rules`: Move legality, application, and the legal-move oracle
//! - `history`: Snapshots and undo/redo stacks
//! - `events`: Change notification
//! - `game`: The `Solitaire` engine façade

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod history;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    DrawCount, EngineError, GameRng, GameRngState, GameState, Layout, RulesConfig, ScoringRules,
};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::zones::{FoundationPile, TableauCard, TableauPile};

pub use crate::rules::{Move, MoveOutcome};

pub use crate::history::{History, Snapshot};

pub use crate::events::SubscriptionId;

pub use crate::game::{SharedSolitaire, Solitaire, SolitaireBuilder, Ticker};
