//! Undo/redo stacks.
//!
//! Each entry is the state *before* a move: the layout snapshot plus the
//! score and recycle count at that point. Recording a new entry clears
//! the redo stack.

use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use crate::core::{GameState, Score};

/// One undo/redo step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub snapshot: Snapshot,
    pub score: Score,
    pub stock_recycle_count: u32,
}

impl HistoryEntry {
    /// Capture the restorable parts of `state`.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            snapshot: Snapshot::capture(&state.layout),
            score: state.score,
            stock_recycle_count: state.stock_recycle_count,
        }
    }

    /// Write this entry back into `state`.
    ///
    /// Move count and timer are left alone.
    pub fn restore_into(self, state: &mut GameState) {
        state.layout = self.snapshot.into_layout();
        state.score = self.score;
        state.stock_recycle_count = self.stock_recycle_count;
    }
}

/// Undo and redo stacks.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a pre-move entry. Invalidates redo.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.undo.push(entry);
        self.redo.clear();
    }

    /// Pop the latest undo entry, saving `current` for redo.
    ///
    /// Returns `None` (and keeps `current` out of redo) if there is nothing to undo.
    pub fn undo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.undo.pop()?;
        self.redo.push(current);
        Some(entry)
    }

    /// Pop the latest redo entry, saving `current` for undo.
    pub fn redo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.redo.pop()?;
        self.undo.push(current);
        Some(entry)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
