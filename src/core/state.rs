//! Game state: card layout and counters.
//!
//! ## Layout
//!
//! Everything a snapshot captures:
//! - Tableau, foundations, stock, waste
//! - `game_started`, `tableau_pile_count`, `is_win`
//!
//! ## GameState
//!
//! The full aggregate:
//! - Layout
//! - Rules in force
//! - Recycle count, move count, score, timer

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{RulesConfig, FOUNDATION_COUNT};
use super::error::EngineError;
use super::score::Score;
use super::timer::GameTimer;
use crate::cards::{Card, Deck, DECK_SIZE};
use crate::zones::{FoundationPile, TableauCard, TableauPile};

/// Pile layout and flags.
///
/// Uses `im` persistent vectors, so `clone()` is cheap and yields a fully
/// independent value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub tableau: Vec<TableauPile>,
    pub foundations: Vec<FoundationPile>,
    /// Top of stock = end of vector.
    pub stock: Vector<Card>,
    /// Top of waste = end of vector.
    pub waste: Vector<Card>,
    pub game_started: bool,
    pub tableau_pile_count: usize,
    pub is_win: bool,
}

impl Layout {
    /// An empty, unstarted layout.
    #[must_use]
    pub fn empty(tableau_piles: usize) -> Self {
        Self {
            tableau: vec![TableauPile::new(); tableau_piles],
            foundations: vec![FoundationPile::new(); FOUNDATION_COUNT],
            stock: Vector::new(),
            waste: Vector::new(),
            game_started: false,
            tableau_pile_count: tableau_piles,
            is_win: false,
        }
    }

    /// Deal a fresh game from `deck`.
    ///
    /// Pile `i` gets `i + 1` cards with only the last face up; every
    /// remaining card goes to stock face down, in draw order.
    #[must_use]
    pub fn deal(mut deck: Deck, tableau_piles: usize) -> Self {
        let mut layout = Self::empty(tableau_piles);

        for (i, pile) in layout.tableau.iter_mut().enumerate() {
            for j in 0..=i {
                if let Some(card) = deck.draw() {
                    pile.push(TableauCard { card, face_up: j == i });
                }
            }
        }

        while let Some(card) = deck.draw() {
            layout.stock.push_back(card);
        }

        layout.game_started = true;
        layout
    }

    /// Total cards across every pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(TableauPile::len).sum::<usize>()
            + self.foundations.iter().map(FoundationPile::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// Every card in the layout, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.tableau
            .iter()
            .flat_map(TableauPile::cards)
            .chain(self.foundations.iter().flat_map(|f| f.iter().copied()))
            .chain(self.stock.iter().copied())
            .chain(self.waste.iter().copied())
    }

    /// Check that the layout is one normal play can reach.
    ///
    /// - four foundations, tableau matching its declared pile count
    /// - 52 distinct cards
    /// - each tableau pile is face-down cards under a face-up run, with a
    ///   face-up top
    /// - each foundation is one suit built up from Ace
    /// - `is_win` agrees with [`Layout::is_complete`]
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.foundations.len() != FOUNDATION_COUNT {
            return Err(EngineError::FoundationCount(self.foundations.len()));
        }
        if self.tableau.len() != self.tableau_pile_count {
            return Err(EngineError::TableauPileMismatch {
                declared: self.tableau_pile_count,
                found: self.tableau.len(),
            });
        }

        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(EngineError::CardCount {
                expected: DECK_SIZE,
                found,
            });
        }

        let mut seen = FxHashSet::default();
        for card in self.all_cards() {
            if !seen.insert(card) {
                return Err(EngineError::DuplicateCard(card));
            }
        }

        for (pile, cards) in self.tableau.iter().enumerate() {
            if let Some(start) = cards.face_up_start() {
                if !cards.is_face_up_run_from(start) {
                    return Err(EngineError::FaceDownInRun { pile });
                }
            }
            if cards.top().is_some_and(|top| !top.face_up) {
                return Err(EngineError::CoveredTop { pile });
            }
        }

        if let Some(foundation) = self.foundations.iter().position(|f| !f.is_ordered()) {
            return Err(EngineError::FoundationOrder { foundation });
        }

        if self.is_win != self.is_complete() {
            return Err(EngineError::WinFlagMismatch { flagged: self.is_win });
        }
        Ok(())
    }

    /// Win condition: no tableau cards and every foundation complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tableau.iter().all(TableauPile::is_empty)
            && self.foundations.iter().all(FoundationPile::is_complete)
    }
}

/// Full game state: layout plus rules and counters.
#[derive(Clone, Debug)]
pub struct GameState {
    pub layout: Layout,
    pub rules: RulesConfig,
    pub stock_recycle_count: u32,
    pub move_count: u32,
    pub score: Score,
    pub timer: GameTimer,
}

impl GameState {
    /// Unstarted state with the given rules.
    #[must_use]
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            layout: Layout::empty(rules.tableau_piles),
            rules,
            stock_recycle_count: 0,
            move_count: 0,
            score: Score::default(),
            timer: GameTimer::new(),
        }
    }

    /// Replace everything with a fresh deal and start the clock.
    pub fn reset_with(&mut self, deck: Deck) {
        self.layout = Layout::deal(deck, self.rules.tableau_piles);
        self.stock_recycle_count = 0;
        self.move_count = 0;
        self.score.reset();
        self.timer.start();
    }

    /// Mark the game won and stop the clock if the layout is complete.
    ///
    /// Returns the win flag after the check.
    pub fn check_win(&mut self) -> bool {
        if !self.layout.is_win && self.layout.is_complete() {
            self.layout.is_win = true;
            self.timer.stop();
        }
        self.layout.is_win
    }
}
