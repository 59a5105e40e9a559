//! The solitaire engine: commands, queries, undo/redo, notifications.

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::cards::{Card, Deck};
use crate::core::{DrawCount, EngineError, GameRng, GameRngState, GameState, Layout, RulesConfig};
use crate::events::{ChangeNotifier, SubscriptionId};
use crate::history::{History, HistoryEntry, Snapshot};
use crate::rules::{self, Move, MoveOutcome};

/// Visible waste cards: at most three.
pub type WasteDisplay = SmallVec<[Card; 3]>;

/// Klondike solitaire engine.
///
/// Commands return `true` when they changed the game and `false` when they
/// were rejected; a rejected command changes nothing and fires no
/// notification.
///
/// ```
/// use rust_solitaire::game::SolitaireBuilder;
///
/// let mut game = SolitaireBuilder::new().build(42).unwrap();
/// game.start_game();
///
/// assert_eq!(game.layout().stock.len(), 24);
/// assert!(game.draw_from_stock());
/// assert_eq!(game.move_count(), 1);
/// assert!(game.undo());
/// assert_eq!(game.layout().stock.len(), 24);
/// ```
#[derive(Debug)]
pub struct Solitaire {
    state: GameState,
    history: History,
    notifier: ChangeNotifier,
    rng: GameRng,
}

/// Builder for creating a `Solitaire` engine.
#[derive(Clone, Debug, Default)]
pub struct SolitaireBuilder {
    rules: RulesConfig,
}

impl SolitaireBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn draw_count(mut self, draw_count: DrawCount) -> Self {
        self.rules.draw_count = draw_count;
        self
    }

    /// `None` for unlimited recycles.
    pub fn max_stock_recycles(mut self, limit: Option<u32>) -> Self {
        self.rules.max_stock_recycles = limit;
        self
    }

    pub fn tableau_piles(mut self, piles: usize) -> Self {
        self.rules.tableau_piles = piles;
        self
    }

    /// Build an engine whose deals are fixed by `seed`.
    ///
    /// The game is not started; call [`Solitaire::start_game`].
    pub fn build(self, seed: u64) -> Result<Solitaire, EngineError> {
        Solitaire::with_rng(self.rules, GameRng::new(seed))
    }

    /// Build an engine whose RNG resumes from a saved state.
    ///
    /// Its next deal matches the next deal of the engine the state was
    /// taken from.
    pub fn build_from_state(self, state: &GameRngState) -> Result<Solitaire, EngineError> {
        Solitaire::with_rng(self.rules, GameRng::from_state(state))
    }

    /// Build an engine seeded from the operating system.
    pub fn build_random(self) -> Result<Solitaire, EngineError> {
        Solitaire::with_rng(self.rules, GameRng::from_entropy())
    }
}

impl Solitaire {
    /// Engine with default rules and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(RulesConfig::default()),
            history: History::new(),
            notifier: ChangeNotifier::new(),
            rng: GameRng::from_entropy(),
        }
    }

    fn with_rng(rules: RulesConfig, rng: GameRng) -> Result<Self, EngineError> {
        rules.validate()?;
        Ok(Self {
            state: GameState::new(rules),
            history: History::new(),
            notifier: ChangeNotifier::new(),
            rng,
        })
    }

    // === Lifecycle ===

    /// Shuffle a fresh deck and deal a new game.
    ///
    /// Resets score, move count, recycle count and both history stacks,
    /// then restarts the clock.
    pub fn start_game(&mut self) {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.state.reset_with(deck);
        self.history.clear();
        info!(
            piles = self.state.layout.tableau_pile_count,
            draw = self.state.rules.draw_count.get(),
            "new game dealt"
        );
        self.notifier.notify();
    }

    /// Change the rules in force.
    ///
    /// Draw count and recycle limit apply immediately; the tableau pile
    /// count applies from the next deal.
    pub fn set_rules(&mut self, rules: RulesConfig) -> Result<(), EngineError> {
        rules.validate()?;
        debug!(?rules, "rules changed");
        self.state.rules = rules;
        self.notifier.notify();
        Ok(())
    }

    // === Commands ===

    pub fn draw_from_stock(&mut self) -> bool {
        self.apply(Move::DrawFromStock)
    }

    pub fn reset_stock_from_waste(&mut self) -> bool {
        self.apply(Move::RecycleWaste)
    }

    pub fn move_to_foundation(&mut self, pile: usize, foundation: usize) -> bool {
        self.apply(Move::TableauToFoundation { pile, foundation })
    }

    pub fn move_tableau_to_tableau(&mut self, from: usize, card_index: usize, to: usize) -> bool {
        self.apply(Move::TableauToTableau { from, card_index, to })
    }

    pub fn move_waste_to_tableau(&mut self, pile: usize) -> bool {
        self.apply(Move::WasteToTableau { pile })
    }

    pub fn move_waste_to_foundation(&mut self, foundation: usize) -> bool {
        self.apply(Move::WasteToFoundation { foundation })
    }

    /// Apply any move.
    ///
    /// The pre-move state is pushed onto the undo stack only if the move
    /// is legal, so rejected attempts never deepen the history.
    pub fn apply(&mut self, mv: Move) -> bool {
        let before = HistoryEntry::capture(&self.state);
        let Some(outcome) = rules::apply_move(&mut self.state, mv) else {
            trace!(%mv, "move rejected");
            return false;
        };

        self.history.record(before);
        self.log_outcome(outcome);
        self.notifier.notify();
        true
    }

    fn log_outcome(&self, outcome: MoveOutcome) {
        debug!(
            mv = %outcome.mv,
            flipped = outcome.flipped,
            score = self.state.score.value(),
            moves = self.state.move_count,
            "move applied"
        );
        if outcome.won && outcome.mv.targets_foundation() {
            info!(
                score = self.state.score.value(),
                moves = self.state.move_count,
                seconds = self.state.timer.elapsed_seconds(),
                "game won"
            );
        }
    }

    /// Restore the state before the last move.
    pub fn undo(&mut self) -> bool {
        let current = HistoryEntry::capture(&self.state);
        let Some(entry) = self.history.undo(current) else {
            return false;
        };
        let was_won = self.state.layout.is_win;
        entry.restore_into(&mut self.state);
        self.sync_clock(was_won);
        self.state.move_count = self.state.move_count.saturating_sub(1);
        debug!(moves = self.state.move_count, "undo");
        self.notifier.notify();
        true
    }

    /// Re-apply the last undone move.
    pub fn redo(&mut self) -> bool {
        let current = HistoryEntry::capture(&self.state);
        let Some(entry) = self.history.redo(current) else {
            return false;
        };
        let was_won = self.state.layout.is_win;
        entry.restore_into(&mut self.state);
        self.sync_clock(was_won);
        self.state.move_count += 1;
        debug!(moves = self.state.move_count, "redo");
        self.notifier.notify();
        true
    }

    /// Keep the clock in step with a win flag changed by undo/redo.
    fn sync_clock(&mut self, was_won: bool) {
        match (was_won, self.state.layout.is_win) {
            (false, true) => self.state.timer.stop(),
            (true, false) => self.state.timer.resume(),
            _ => {}
        }
    }

    // === Timer ===

    /// Advance the clock by one second if it is running.
    pub fn tick(&mut self) -> bool {
        if !self.state.timer.tick() {
            return false;
        }
        self.notifier.notify();
        true
    }

    pub fn stop_timer(&mut self) {
        self.state.timer.stop();
        self.notifier.notify();
    }

    pub fn reset_timer(&mut self) {
        self.state.timer.reset();
        self.notifier.notify();
    }

    // === Queries ===

    #[must_use]
    pub fn can_move_to_foundation(&self, pile: usize, foundation: usize) -> bool {
        rules::can_move_to_foundation(&self.state.layout, pile, foundation)
    }

    #[must_use]
    pub fn can_move_tableau_to_tableau(&self, from: usize, card_index: usize, to: usize) -> bool {
        rules::can_move_tableau_to_tableau(&self.state.layout, from, card_index, to)
    }

    #[must_use]
    pub fn can_move_waste_to_tableau(&self, pile: usize) -> bool {
        rules::can_move_waste_to_tableau(&self.state.layout, pile)
    }

    #[must_use]
    pub fn can_move_waste_to_foundation(&self, foundation: usize) -> bool {
        rules::can_move_waste_to_foundation(&self.state.layout, foundation)
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        rules::is_legal(&self.state, mv)
    }

    #[must_use]
    pub fn has_any_legal_move(&self) -> bool {
        rules::has_any_legal_move(&self.state)
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.state)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Up to `draw_count` cards from the top of waste, most recent last.
    #[must_use]
    pub fn waste_display(&self) -> WasteDisplay {
        let waste = &self.state.layout.waste;
        let shown = self.state.rules.draw_count.get().min(waste.len());
        waste.iter().skip(waste.len() - shown).copied().collect()
    }

    // === State access ===

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.state.layout
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.state.rules
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score.value()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.state.timer.elapsed_seconds()
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.state.timer.is_running()
    }

    #[must_use]
    pub fn stock_recycle_count(&self) -> u32 {
        self.state.stock_recycle_count
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.state.layout.game_started
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.state.layout.is_win
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Where the shuffle RNG stands, for [`SolitaireBuilder::build_from_state`].
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Snapshots ===

    /// Capture the current layout.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state.layout)
    }

    /// Replace the layout with a saved one.
    ///
    /// The snapshot is validated first. Counters and history are cleared;
    /// the clock runs if the restored game is in progress.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Result<(), EngineError> {
        snapshot.layout().validate()?;

        self.state.layout = snapshot.into_layout();
        self.state.stock_recycle_count = 0;
        self.state.move_count = 0;
        self.state.score.reset();
        if self.state.layout.game_started && !self.state.layout.is_win {
            self.state.timer.start();
        } else {
            self.state.timer.reset();
        }
        self.history.clear();
        info!("snapshot loaded");
        self.notifier.notify();
        Ok(())
    }

    // === Notifications ===

    /// Register a change callback.
    pub fn subscribe(&mut self, callback: impl FnMut() + Send + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl Default for Solitaire {
    fn default() -> Self {
        Self::new()
    }
}
