//! Change notification.
//!
//! The engine fires a zero-argument signal after every successful mutating
//! command and every timer tick. Hosts subscribe once and re-read state.

pub mod notifier;

pub use notifier::{ChangeNotifier, SubscriptionId};
