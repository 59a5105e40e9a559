//! Legal-move oracle: stalemate detection and move enumeration.
//!
//! `has_any_legal_move` short-circuits in a fixed order (stock, recycle,
//! waste to foundation, waste to tableau, tableau to foundation, tableau to
//! tableau). Cost is O(piles x cards per pile) per call.

use crate::core::GameState;

use super::legality::{
    can_draw_from_stock, can_move_tableau_to_tableau, can_move_to_foundation,
    can_move_waste_to_foundation, can_move_waste_to_tableau, can_recycle_waste,
};
use super::moves::Move;

/// True if at least one move is legal.
///
/// Recycling only counts while the recycle limit allows another pass.
#[must_use]
pub fn has_any_legal_move(state: &GameState) -> bool {
    let layout = &state.layout;
    let piles = layout.tableau.len();
    let foundations = layout.foundations.len();

    if can_draw_from_stock(layout) || can_recycle_waste(state) {
        return true;
    }

    if (0..foundations).any(|f| can_move_waste_to_foundation(layout, f))
        || (0..piles).any(|t| can_move_waste_to_tableau(layout, t))
    {
        return true;
    }

    if (0..piles).any(|p| (0..foundations).any(|f| can_move_to_foundation(layout, p, f))) {
        return true;
    }

    layout.tableau.iter().enumerate().any(|(from, pile)| {
        let start = pile.face_up_start().unwrap_or(pile.len());
        (start..pile.len()).any(|card_index| {
            (0..piles).any(|to| can_move_tableau_to_tableau(layout, from, card_index, to))
        })
    })
}

/// Every legal move, in the same order the oracle checks them.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let layout = &state.layout;
    let piles = layout.tableau.len();
    let foundations = layout.foundations.len();
    let mut moves = Vec::new();

    if can_draw_from_stock(layout) {
        moves.push(Move::DrawFromStock);
    }
    if can_recycle_waste(state) {
        moves.push(Move::RecycleWaste);
    }

    moves.extend(
        (0..foundations)
            .filter(|&f| can_move_waste_to_foundation(layout, f))
            .map(|foundation| Move::WasteToFoundation { foundation }),
    );
    moves.extend(
        (0..piles)
            .filter(|&t| can_move_waste_to_tableau(layout, t))
            .map(|pile| Move::WasteToTableau { pile }),
    );

    for pile in 0..piles {
        moves.extend(
            (0..foundations)
                .filter(|&f| can_move_to_foundation(layout, pile, f))
                .map(|foundation| Move::TableauToFoundation { pile, foundation }),
        );
    }

    for (from, pile) in layout.tableau.iter().enumerate() {
        let start = pile.face_up_start().unwrap_or(pile.len());
        for card_index in start..pile.len() {
            moves.extend(
                (0..piles)
                    .filter(|&to| can_move_tableau_to_tableau(layout, from, card_index, to))
                    .map(|to| Move::TableauToTableau { from, card_index, to }),
            );
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Rank, Suit};
    use crate::core::{GameRng, RulesConfig};
    use crate::rules::legality::is_legal;
    use crate::zones::TableauCard;

    #[test]
    fn test_fresh_deal_has_moves() {
        let mut state = GameState::new(RulesConfig::default());
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(11));
        state.reset_with(deck);

        assert!(has_any_legal_move(&state));
        assert!(legal_moves(&state).contains(&Move::DrawFromStock));
    }

    #[test]
    fn test_unstarted_state_has_no_moves() {
        let state = GameState::new(RulesConfig::default());
        assert!(!has_any_legal_move(&state));
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_recycle_limit_exhausted_blocks() {
        let mut state = GameState::new(RulesConfig::default().with_max_stock_recycles(0));
        state.layout.waste.push_back(Card::new(Suit::Clubs, Rank::Five));
        assert!(!has_any_legal_move(&state));

        state.rules = state.rules.with_recycle_limit(None);
        assert!(has_any_legal_move(&state));
        assert_eq!(legal_moves(&state), vec![Move::RecycleWaste]);
    }

    #[test]
    fn test_enumeration_agrees_with_oracle() {
        let mut state = GameState::new(RulesConfig::default());
        state.layout.tableau[0] = [
            TableauCard::face_down(Card::new(Suit::Spades, Rank::Two)),
            TableauCard::face_up(Card::new(Suit::Hearts, Rank::Seven)),
        ]
        .into_iter()
        .collect();
        state.layout.tableau[1] = [TableauCard::face_up(Card::new(Suit::Clubs, Rank::Eight))]
            .into_iter()
            .collect();

        let moves = legal_moves(&state);
        assert_eq!(moves, vec![Move::TableauToTableau { from: 0, card_index: 1, to: 1 }]);
        assert!(has_any_legal_move(&state));
        assert!(moves.iter().all(|&mv| is_legal(&state, mv)));
    }
}
