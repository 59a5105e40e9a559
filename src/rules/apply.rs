//! Move application.
//!
//! Every applier is gated on its legality predicate and leaves the state
//! untouched when the move is illegal. On success the applier transfers
//! cards, adjusts the score, bumps the move counter, and re-checks the
//! win condition for foundation moves.

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::zones::TableauCard;

use super::legality::is_legal;
use super::moves::Move;

/// What a successful move did beyond moving cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub mv: Move,
    /// A face-down tableau card was turned up.
    pub flipped: bool,
    /// The game is won after this move.
    pub won: bool,
}

/// Apply `mv` if legal.
///
/// Returns `None` (state unchanged) when the move is illegal.
pub fn apply_move(state: &mut GameState, mv: Move) -> Option<MoveOutcome> {
    if !is_legal(state, mv) {
        return None;
    }

    let flipped = match mv {
        Move::DrawFromStock => {
            draw_from_stock(state);
            false
        }
        Move::RecycleWaste => {
            recycle_waste(state);
            false
        }
        Move::TableauToFoundation { pile, foundation } => {
            tableau_to_foundation(state, pile, foundation)
        }
        Move::TableauToTableau { from, card_index, to } => {
            tableau_to_tableau(state, from, card_index, to)
        }
        Move::WasteToTableau { pile } => {
            waste_to_tableau(state, pile);
            false
        }
        Move::WasteToFoundation { foundation } => {
            waste_to_foundation(state, foundation);
            false
        }
    };

    state.move_count += 1;
    let won = if mv.targets_foundation() {
        state.check_win()
    } else {
        state.layout.is_win
    };

    Some(MoveOutcome { mv, flipped, won })
}

fn draw_from_stock(state: &mut GameState) {
    let layout = &mut state.layout;
    let count = state.rules.draw_count.get().min(layout.stock.len());
    for _ in 0..count {
        if let Some(card) = layout.stock.pop_back() {
            layout.waste.push_back(card);
        }
    }
    state.score.deduct(state.rules.scoring.draw_penalty);
}

fn recycle_waste(state: &mut GameState) {
    let layout = &mut state.layout;
    layout.stock = layout.waste.iter().rev().copied().collect();
    layout.waste.clear();
    state.stock_recycle_count += 1;
    state.score.deduct(state.rules.scoring.recycle_penalty);
}

/// Returns whether the new top card was turned up.
fn tableau_to_foundation(state: &mut GameState, pile: usize, foundation: usize) -> bool {
    let source = &mut state.layout.tableau[pile];
    let Some(top) = source.pop() else {
        return false;
    };
    let flipped = source.flip_top();
    state.layout.foundations[foundation].push(top.card);
    state.score.add(state.rules.scoring.foundation);
    flipped
}

/// Returns whether the new top card was turned up (which scores).
fn tableau_to_tableau(state: &mut GameState, from: usize, card_index: usize, to: usize) -> bool {
    let run = state.layout.tableau[from].split_off(card_index);
    state.layout.tableau[to].append(run);

    let flipped = state.layout.tableau[from].flip_top();
    if flipped {
        state.score.add(state.rules.scoring.tableau_flip);
    }
    flipped
}

fn waste_to_tableau(state: &mut GameState, pile: usize) {
    if let Some(card) = state.layout.waste.pop_back() {
        state.layout.tableau[pile].push(TableauCard::face_up(card));
        state.score.add(state.rules.scoring.waste_to_tableau);
    }
}

fn waste_to_foundation(state: &mut GameState, foundation: usize) {
    if let Some(card) = state.layout.waste.pop_back() {
        state.layout.foundations[foundation].push(card);
        state.score.add(state.rules.scoring.foundation);
    }
}
