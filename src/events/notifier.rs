//! Change notification registry.
//!
//! Subscribers register a zero-argument callback and re-read engine state
//! whenever it fires. Delivery is synchronous, on the caller's thread, in
//! subscription order.

use serde::{Deserialize, Serialize};

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Callback = Box<dyn FnMut() + Send>;

/// Broadcasts "state changed" to every subscriber.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use rust_solitaire::events::ChangeNotifier;
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let mut notifier = ChangeNotifier::new();
///
/// let counter = Arc::clone(&hits);
/// let id = notifier.subscribe(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// notifier.notify();
/// notifier.unsubscribe(id);
/// notifier.notify();
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u32,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&mut self, callback: impl FnMut() + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Invoke every callback once.
    pub fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback();
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
