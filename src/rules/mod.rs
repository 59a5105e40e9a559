//! Solitaire rules: move legality, application, and the legal-move oracle.
//!
//! - `legality`: pure predicates, one per move type
//! - `apply`: appliers gated on those predicates
//! - `oracle`: stalemate detection and legal-move enumeration

pub mod apply;
pub mod legality;
pub mod moves;
pub mod oracle;

pub use apply::{apply_move, MoveOutcome};
pub use legality::{
    can_draw_from_stock, can_move_tableau_to_tableau, can_move_to_foundation,
    can_move_waste_to_foundation, can_move_waste_to_tableau, can_recycle_waste, is_legal,
};
pub use moves::Move;
pub use oracle::{has_any_legal_move, legal_moves};
