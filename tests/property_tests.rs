//! Property tests over random command sequences.
//!
//! Whatever the player does, the layout keeps all 52 cards, every
//! non-empty pile shows its top card, and rejected commands change nothing.

mod common;

use proptest::prelude::*;

use rust_solitaire::core::{DrawCount, RulesConfig};
use rust_solitaire::game::{Solitaire, SolitaireBuilder};
use rust_solitaire::rules::Move;

#[derive(Clone, Copy, Debug)]
enum Command {
    Draw,
    Recycle,
    ToFoundation(usize, usize),
    TableauToTableau(usize, usize, usize),
    WasteToTableau(usize),
    WasteToFoundation(usize),
    Undo,
    Redo,
    /// Play the n-th currently legal move, if any.
    Legal(usize),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        1 => Just(Command::Draw),
        1 => Just(Command::Recycle),
        1 => (0usize..9, 0usize..5).prop_map(|(p, f)| Command::ToFoundation(p, f)),
        1 => (0usize..9, 0usize..20, 0usize..9).prop_map(|(a, i, b)| Command::TableauToTableau(a, i, b)),
        1 => (0usize..9).prop_map(Command::WasteToTableau),
        1 => (0usize..5).prop_map(Command::WasteToFoundation),
        1 => Just(Command::Undo),
        1 => Just(Command::Redo),
        3 => any::<usize>().prop_map(Command::Legal),
    ]
}

fn run(game: &mut Solitaire, cmd: Command) -> bool {
    match cmd {
        Command::Draw => game.draw_from_stock(),
        Command::Recycle => game.reset_stock_from_waste(),
        Command::ToFoundation(p, f) => game.move_to_foundation(p, f),
        Command::TableauToTableau(a, i, b) => game.move_tableau_to_tableau(a, i, b),
        Command::WasteToTableau(p) => game.move_waste_to_tableau(p),
        Command::WasteToFoundation(f) => game.move_waste_to_foundation(f),
        Command::Undo => game.undo(),
        Command::Redo => game.redo(),
        Command::Legal(n) => {
            let moves = game.legal_moves();
            if moves.is_empty() {
                return false;
            }
            let mv: Move = moves[n % moves.len()];
            game.apply(mv)
        }
    }
}

fn check_invariants(game: &Solitaire) {
    let layout = game.layout();
    layout.validate().expect("52 distinct cards");

    for pile in &layout.tableau {
        if let Some(top) = pile.top() {
            assert!(top.face_up, "covered top card in {pile:?}");
        }
        if let Some(start) = pile.face_up_start() {
            assert!(pile.is_face_up_run_from(start), "face-down card inside run in {pile:?}");
        }
    }

    for foundation in &layout.foundations {
        for (i, card) in foundation.iter().enumerate() {
            assert_eq!(card.rank().value() as usize, i + 1);
            assert_eq!(Some(card.suit()), foundation.suit());
        }
    }

    assert_eq!(game.is_win(), layout.is_complete());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_commands_preserve_layout(
        seed in any::<u64>(),
        three in any::<bool>(),
        commands in prop::collection::vec(command(), 0..150),
    ) {
        common::init_logging();
        let draw = if three { DrawCount::Three } else { DrawCount::One };
        let rules = RulesConfig::default().with_draw_count(draw);
        let mut game = SolitaireBuilder::new().rules(rules).build(seed).unwrap();
        game.start_game();

        for cmd in commands {
            let before = game.layout().clone();
            let score = game.score();
            let moves = game.move_count();
            let depth = (game.undo_depth(), game.redo_depth());

            if !run(&mut game, cmd) {
                prop_assert_eq!(game.layout(), &before);
                prop_assert_eq!(game.score(), score);
                prop_assert_eq!(game.move_count(), moves);
                prop_assert_eq!((game.undo_depth(), game.redo_depth()), depth);
            }
            check_invariants(&game);
        }
    }

    #[test]
    fn prop_undo_all_returns_to_deal(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..60),
    ) {
        let mut game = SolitaireBuilder::new().build(seed).unwrap();
        game.start_game();
        let dealt = game.layout().clone();

        for n in picks {
            run(&mut game, Command::Legal(n));
        }
        while game.undo() {}

        prop_assert_eq!(game.layout(), &dealt);
        prop_assert_eq!(game.score(), 0);
        prop_assert_eq!(game.move_count(), 0);
        prop_assert_eq!(game.stock_recycle_count(), 0);
    }
}
