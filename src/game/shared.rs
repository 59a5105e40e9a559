//! Thread-safe handle and wall-clock ticker.
//!
//! The engine itself is single-threaded. Hosts that drive the clock from a
//! background thread wrap it in [`SharedSolitaire`] and start a [`Ticker`].
//! Change callbacks run while the lock is held, so a callback must not lock
//! the same handle.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use super::solitaire::Solitaire;

/// Cloneable, lock-protected engine handle.
#[derive(Clone, Debug)]
pub struct SharedSolitaire {
    inner: Arc<Mutex<Solitaire>>,
}

impl SharedSolitaire {
    pub fn new(game: Solitaire) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Solitaire> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Solitaire) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Tick the engine every `interval` until the ticker is stopped or dropped.
    pub fn start_ticker(&self, interval: Duration) -> Ticker {
        Ticker::spawn(self.clone(), interval)
    }
}

/// Background thread calling [`Solitaire::tick`] at a fixed interval.
#[derive(Debug)]
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    fn spawn(game: SharedSolitaire, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    game.lock().tick();
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        debug!(?interval, "ticker started");

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
