//! Rule configuration.
//!
//! Hosts configure a game with:
//! - `DrawCount`: cards turned per stock draw (1 or 3)
//! - `max_stock_recycles`: how often the waste may be turned back (`None` = unlimited)
//! - `tableau_piles`: number of tableau columns dealt
//! - `ScoringRules`: points awarded or deducted per move type

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Largest tableau that still fits in one deck (9 piles deal 45 cards).
pub const MAX_TABLEAU_PILES: usize = 9;

/// Number of foundation piles, one per suit.
pub const FOUNDATION_COUNT: usize = 4;

/// Cards turned from stock to waste per draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawCount {
    #[default]
    One,
    Three,
}

impl DrawCount {
    /// Number of cards as a count.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for DrawCount {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawCount::One),
            3 => Ok(DrawCount::Three),
            other => Err(EngineError::InvalidDrawCount(other)),
        }
    }
}

/// Points awarded (or deducted) per move type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Any card onto a foundation.
    pub foundation: u32,
    /// Turning up a face-down tableau card after a tableau-to-tableau move.
    pub tableau_flip: u32,
    /// Waste card onto a tableau pile.
    pub waste_to_tableau: u32,
    /// Deducted per stock draw.
    pub draw_penalty: u32,
    /// Deducted per waste recycle.
    pub recycle_penalty: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            foundation: 10,
            tableau_flip: 5,
            waste_to_tableau: 5,
            draw_penalty: 1,
            recycle_penalty: 5,
        }
    }
}

/// Complete rule configuration.
///
/// ```
/// use rust_solitaire::core::{DrawCount, RulesConfig};
///
/// let rules = RulesConfig::default()
///     .with_draw_count(DrawCount::Three)
///     .with_max_stock_recycles(2);
///
/// assert_eq!(rules.draw_count.get(), 3);
/// assert_eq!(rules.max_stock_recycles, Some(2));
/// assert_eq!(rules.tableau_piles, 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub draw_count: DrawCount,

    /// `None` for unlimited recycles, `Some(0)` for none at all.
    pub max_stock_recycles: Option<u32>,

    /// Takes effect on the next deal.
    pub tableau_piles: usize,

    pub scoring: ScoringRules,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            draw_count: DrawCount::One,
            max_stock_recycles: None,
            tableau_piles: 7,
            scoring: ScoringRules::default(),
        }
    }
}

impl RulesConfig {
    /// Build rules from raw host values.
    ///
    /// Any negative `max_stock_recycles` means unlimited.
    pub fn from_raw(draw_count: u8, max_stock_recycles: i32) -> Result<Self, EngineError> {
        Ok(Self::default()
            .with_draw_count(DrawCount::try_from(draw_count)?)
            .with_recycle_limit(u32::try_from(max_stock_recycles).ok()))
    }

    #[must_use]
    pub fn with_draw_count(mut self, draw_count: DrawCount) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Limit recycles to `max`.
    #[must_use]
    pub fn with_max_stock_recycles(mut self, max: u32) -> Self {
        self.max_stock_recycles = Some(max);
        self
    }

    #[must_use]
    pub fn with_recycle_limit(mut self, limit: Option<u32>) -> Self {
        self.max_stock_recycles = limit;
        self
    }

    #[must_use]
    pub fn with_tableau_piles(mut self, piles: usize) -> Self {
        self.tableau_piles = piles;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// True if another recycle is allowed after `used` recycles.
    #[must_use]
    pub fn recycle_allowed(&self, used: u32) -> bool {
        self.max_stock_recycles.map_or(true, |max| used < max)
    }

    /// Check the pile count fits in one deck.
    pub fn validate(&self) -> Result<(), EngineError> {
        if (1..=MAX_TABLEAU_PILES).contains(&self.tableau_piles) {
            Ok(())
        } else {
            Err(EngineError::InvalidTableauPileCount {
                found: self.tableau_piles,
                max: MAX_TABLEAU_PILES,
            })
        }
    }
}
