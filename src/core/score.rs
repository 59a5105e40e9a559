//! Floor-clamped score.

use serde::{Deserialize, Serialize};

/// Non-negative score. Deductions stop at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(pub u32);

impl Score {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    pub fn add(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }

    pub fn deduct(&mut self, points: u32) {
        self.0 = self.0.saturating_sub(points);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
