//! Pile types for card locations.
//!
//! ## Key Types
//!
//! - `TableauPile`: a column of face-down cards topped by a face-up run
//! - `FoundationPile`: a single-suit pile built Ace to King
//!
//! Stock and waste are plain `im::Vector<Card>` sequences held by
//! [`Layout`](crate::core::Layout).

pub mod foundation;
pub mod tableau;

pub use foundation::{FoundationPile, FOUNDATION_SIZE};
pub use tableau::{TableauCard, TableauPile};
