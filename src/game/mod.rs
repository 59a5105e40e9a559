//! Public engine surface.
//!
//! - `Solitaire`: commands, queries and undo/redo over one game
//! - `SolitaireBuilder`: rules and seed configuration
//! - `SharedSolitaire` / `Ticker`: lock-protected handle with a clock thread

pub mod shared;
pub mod solitaire;

pub use shared::{SharedSolitaire, Ticker};
pub use solitaire::{Solitaire, SolitaireBuilder, WasteDisplay};
