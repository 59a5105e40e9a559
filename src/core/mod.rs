//! Core engine types: rules, state, score, timer, RNG, errors.
//!
//! This module holds the game-state aggregate and the configuration it is
//! built from. Move legality and application live in `rules`.

pub mod config;
pub mod error;
pub mod rng;
pub mod score;
pub mod state;
pub mod timer;

pub use config::{DrawCount, RulesConfig, ScoringRules, FOUNDATION_COUNT, MAX_TABLEAU_PILES};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use score::Score;
pub use state::{GameState, Layout};
pub use timer::GameTimer;
