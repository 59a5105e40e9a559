//! Elapsed-time counter advanced by host ticks.
//!
//! The engine never schedules anything itself. The host (or a
//! [`Ticker`](crate::game::Ticker)) calls `tick()` once per second.

use serde::{Deserialize, Serialize};

/// Game clock in whole seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    elapsed_seconds: u64,
    running: bool,
}

impl GameTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reset to zero and start counting.
    pub fn start(&mut self) {
        self.elapsed_seconds = 0;
        self.running = true;
    }

    /// Continue counting from the current elapsed time.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stop counting; elapsed time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and clear.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.running = false;
    }

    /// Advance by one second if running. Returns whether time advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_seconds += 1;
        }
        self.running
    }
}
