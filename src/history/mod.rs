//! Undo/redo history built on full layout snapshots.
//!
//! ## Key Types
//!
//! - `Snapshot`: independent copy of piles and flags (bincode-encodable)
//! - `HistoryEntry`: a snapshot plus the score and recycle count it pairs with
//! - `History`: the undo and redo stacks

pub mod snapshot;
pub mod undo;

pub use snapshot::Snapshot;
pub use undo::{History, HistoryEntry};
