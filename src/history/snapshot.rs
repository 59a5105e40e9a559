//! Layout snapshots.
//!
//! A `Snapshot` is an independent copy of the pile layout and flags:
//! tableau, foundations, stock, waste, `game_started`,
//! `tableau_pile_count`, `is_win`. Score, move count and elapsed time are
//! not part of it.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Layout};

/// Captured pile layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    layout: Layout,
}

impl Snapshot {
    /// Capture `layout`.
    #[must_use]
    pub fn capture(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn into_layout(self) -> Layout {
        self.layout
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate card conservation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        snapshot.layout.validate()?;
        Ok(snapshot)
    }
}
