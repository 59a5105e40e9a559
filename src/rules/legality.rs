//! Move legality predicates.
//!
//! All predicates are pure reads of the layout. Out-of-range pile or
//! foundation indices make a move illegal rather than panicking.

use crate::cards::Card;
use crate::core::{GameState, Layout};
use crate::zones::TableauPile;

use super::moves::Move;

/// True if `card` may be placed on `pile`: a King on an empty pile, or
/// opposite colour and one rank lower than a face-up top card.
fn fits_on_tableau(card: Card, pile: &TableauPile) -> bool {
    match pile.top() {
        None => card.is_king(),
        Some(top) => top.face_up && card.can_build_on(top.card),
    }
}

/// Tableau top card onto a foundation.
#[must_use]
pub fn can_move_to_foundation(layout: &Layout, pile: usize, foundation: usize) -> bool {
    let (Some(pile), Some(foundation)) = (layout.tableau.get(pile), layout.foundations.get(foundation))
    else {
        return false;
    };
    match pile.top() {
        Some(top) => top.face_up && foundation.accepts(top.card),
        None => false,
    }
}

/// Face-up run from `card_index` upward onto another tableau pile.
#[must_use]
pub fn can_move_tableau_to_tableau(layout: &Layout, from: usize, card_index: usize, to: usize) -> bool {
    if from == to {
        return false;
    }
    let (Some(source), Some(dest)) = (layout.tableau.get(from), layout.tableau.get(to)) else {
        return false;
    };
    if !source.is_face_up_run_from(card_index) {
        return false;
    }
    source
        .get(card_index)
        .is_some_and(|moving| fits_on_tableau(moving.card, dest))
}

/// Top waste card onto a tableau pile.
#[must_use]
pub fn can_move_waste_to_tableau(layout: &Layout, pile: usize) -> bool {
    match (layout.waste.back(), layout.tableau.get(pile)) {
        (Some(&card), Some(dest)) => fits_on_tableau(card, dest),
        _ => false,
    }
}

/// Top waste card onto a foundation.
#[must_use]
pub fn can_move_waste_to_foundation(layout: &Layout, foundation: usize) -> bool {
    match (layout.waste.back(), layout.foundations.get(foundation)) {
        (Some(&card), Some(dest)) => dest.accepts(card),
        _ => false,
    }
}

#[must_use]
pub fn can_draw_from_stock(layout: &Layout) -> bool {
    !layout.stock.is_empty()
}

/// Stock empty, waste non-empty, and the recycle limit not yet reached.
#[must_use]
pub fn can_recycle_waste(state: &GameState) -> bool {
    let layout = &state.layout;
    layout.stock.is_empty()
        && !layout.waste.is_empty()
        && state.rules.recycle_allowed(state.stock_recycle_count)
}

/// Legality of any move against the full state.
#[must_use]
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    let layout = &state.layout;
    match mv {
        Move::DrawFromStock => can_draw_from_stock(layout),
        Move::RecycleWaste => can_recycle_waste(state),
        Move::TableauToFoundation { pile, foundation } => {
            can_move_to_foundation(layout, pile, foundation)
        }
        Move::TableauToTableau { from, card_index, to } => {
            can_move_tableau_to_tableau(layout, from, card_index, to)
        }
        Move::WasteToTableau { pile } => can_move_waste_to_tableau(layout, pile),
        Move::WasteToFoundation { foundation } => can_move_waste_to_foundation(layout, foundation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::RulesConfig;
    use crate::zones::{FoundationPile, TableauCard};

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn layout_with(tableau: Vec<Vec<TableauCard>>) -> Layout {
        let mut layout = Layout::empty(tableau.len());
        layout.tableau = tableau.into_iter().map(|p| p.into_iter().collect()).collect();
        layout
    }

    #[test]
    fn test_tableau_to_foundation_requires_face_up_ace_first() {
        let mut layout = layout_with(vec![
            vec![TableauCard::face_up(c(Suit::Hearts, Rank::Ace))],
            vec![TableauCard::face_down(c(Suit::Spades, Rank::Ace))],
            vec![TableauCard::face_up(c(Suit::Hearts, Rank::Two))],
        ]);

        assert!(can_move_to_foundation(&layout, 0, 0));
        assert!(!can_move_to_foundation(&layout, 1, 0));
        assert!(!can_move_to_foundation(&layout, 2, 0));

        layout.foundations[0] = FoundationPile::from_iter([c(Suit::Hearts, Rank::Ace)]);
        assert!(can_move_to_foundation(&layout, 2, 0));
    }

    #[test]
    fn test_out_of_range_is_illegal() {
        let layout = layout_with(vec![vec![TableauCard::face_up(c(Suit::Hearts, Rank::Ace))]]);

        assert!(!can_move_to_foundation(&layout, 5, 0));
        assert!(!can_move_to_foundation(&layout, 0, 4));
        assert!(!can_move_tableau_to_tableau(&layout, 0, 0, 7));
        assert!(!can_move_tableau_to_tableau(&layout, 0, 3, 0));
        assert!(!can_move_waste_to_tableau(&layout, 9));
        assert!(!can_move_waste_to_foundation(&layout, 9));
    }

    #[test]
    fn test_king_only_on_empty() {
        let layout = layout_with(vec![
            vec![TableauCard::face_up(c(Suit::Clubs, Rank::King))],
            vec![TableauCard::face_up(c(Suit::Clubs, Rank::Queen))],
            vec![],
        ]);

        assert!(can_move_tableau_to_tableau(&layout, 0, 0, 2));
        assert!(!can_move_tableau_to_tableau(&layout, 1, 0, 2));
    }

    #[test]
    fn test_run_must_be_face_up_and_alternate() {
        let layout = layout_with(vec![
            vec![
                TableauCard::face_down(c(Suit::Hearts, Rank::Nine)),
                TableauCard::face_up(c(Suit::Hearts, Rank::Seven)),
                TableauCard::face_up(c(Suit::Clubs, Rank::Six)),
            ],
            vec![TableauCard::face_up(c(Suit::Spades, Rank::Eight))],
            vec![TableauCard::face_up(c(Suit::Diamonds, Rank::Eight))],
            vec![TableauCard::face_down(c(Suit::Spades, Rank::Ten))],
        ]);

        assert!(can_move_tableau_to_tableau(&layout, 0, 1, 1));
        assert!(!can_move_tableau_to_tableau(&layout, 0, 1, 2));
        assert!(!can_move_tableau_to_tableau(&layout, 0, 0, 3));
        assert!(!can_move_tableau_to_tableau(&layout, 0, 1, 0));
    }

    #[test]
    fn test_destination_top_must_be_face_up() {
        let layout = layout_with(vec![
            vec![TableauCard::face_up(c(Suit::Hearts, Rank::Nine))],
            vec![TableauCard::face_down(c(Suit::Spades, Rank::Ten))],
        ]);
        assert!(!can_move_tableau_to_tableau(&layout, 0, 0, 1));
    }

    #[test]
    fn test_waste_moves() {
        let mut layout = layout_with(vec![
            vec![TableauCard::face_up(c(Suit::Clubs, Rank::Four))],
            vec![],
        ]);
        assert!(!can_move_waste_to_tableau(&layout, 0));
        assert!(!can_move_waste_to_foundation(&layout, 0));

        layout.waste.push_back(c(Suit::Diamonds, Rank::Three));
        assert!(can_move_waste_to_tableau(&layout, 0));
        assert!(!can_move_waste_to_tableau(&layout, 1));
        assert!(!can_move_waste_to_foundation(&layout, 0));

        layout.waste.push_back(c(Suit::Diamonds, Rank::Ace));
        assert!(can_move_waste_to_foundation(&layout, 3));
    }

    #[test]
    fn test_recycle_respects_limit() {
        let mut state = GameState::new(RulesConfig::default().with_max_stock_recycles(1));
        assert!(!can_recycle_waste(&state));

        state.layout.waste.push_back(c(Suit::Hearts, Rank::Five));
        assert!(can_recycle_waste(&state));

        state.stock_recycle_count = 1;
        assert!(!can_recycle_waste(&state));

        state.stock_recycle_count = 0;
        state.layout.stock.push_back(c(Suit::Hearts, Rank::Six));
        assert!(!can_recycle_waste(&state));
        assert!(is_legal(&state, Move::DrawFromStock));
    }
}
