//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_solitaire::cards::{Card, Deck, Rank, Suit};
use rust_solitaire::core::{Layout, RulesConfig};
use rust_solitaire::game::{Solitaire, SolitaireBuilder};
use rust_solitaire::history::Snapshot;
use rust_solitaire::zones::{FoundationPile, TableauCard, TableauPile};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

pub fn up(suit: Suit, rank: Rank) -> TableauCard {
    TableauCard::face_up(card(suit, rank))
}

pub fn down(suit: Suit, rank: Rank) -> TableauCard {
    TableauCard::face_down(card(suit, rank))
}

/// A started layout with the given piles.
///
/// `stock_top` ends up on top of stock (last element drawn first). Every
/// card not placed anywhere goes underneath it, so the layout always holds
/// all 52 cards.
pub fn fixture(
    tableau: Vec<Vec<TableauCard>>,
    foundations: [Vec<Card>; 4],
    waste: Vec<Card>,
    stock_top: Vec<Card>,
) -> Layout {
    let mut layout = Layout::empty(tableau.len());

    layout.tableau = tableau
        .into_iter()
        .map(|pile| pile.into_iter().collect::<TableauPile>())
        .collect();
    layout.foundations = foundations
        .into_iter()
        .map(|pile| pile.into_iter().collect::<FoundationPile>())
        .collect();
    layout.waste = waste.into_iter().collect();

    let placed: Vec<Card> = layout.all_cards().chain(stock_top.iter().copied()).collect();
    for c in Deck::new().iter() {
        if !placed.contains(c) {
            layout.stock.push_back(*c);
        }
    }
    for c in stock_top {
        layout.stock.push_back(c);
    }

    layout.game_started = true;
    layout
}

/// A fresh engine holding `layout`, with default rules.
pub fn game_with(layout: Layout) -> Solitaire {
    game_with_rules(RulesConfig::default(), layout)
}

pub fn game_with_rules(rules: RulesConfig, layout: Layout) -> Solitaire {
    init_logging();
    let mut game = SolitaireBuilder::new()
        .rules(rules)
        .build(0)
        .expect("valid rules");
    game.load_snapshot(Snapshot::capture(&layout))
        .expect("fixture holds 52 distinct cards");
    game
}

/// A dealt game from `seed`.
pub fn dealt(seed: u64) -> Solitaire {
    init_logging();
    let mut game = SolitaireBuilder::new().build(seed).expect("valid rules");
    game.start_game();
    game
}

/// A game won except for the King of Hearts on pile 0.
pub fn one_move_from_win() -> Layout {
    let hearts_to_queen: Vec<Card> = Rank::ALL[..12].iter().map(|&r| card(Suit::Hearts, r)).collect();
    let full = |suit: Suit| -> Vec<Card> { Rank::ALL.iter().map(|&r| card(suit, r)).collect() };

    let mut tableau = vec![Vec::new(); 7];
    tableau[0].push(up(Suit::Hearts, Rank::King));

    fixture(
        tableau,
        [hearts_to_queen, full(Suit::Diamonds), full(Suit::Clubs), full(Suit::Spades)],
        Vec::new(),
        Vec::new(),
    )
}

/// No legal move: stock and waste empty, every pile topped by a red
/// face-up card from King down to Seven, with no Ace reachable.
pub fn stalemate() -> Layout {
    let tops = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven];
    let buried: Vec<Card> = Deck::new()
        .iter()
        .copied()
        .filter(|c| !(c.suit() == Suit::Hearts && tops.contains(&c.rank())))
        .collect();

    let mut tableau = vec![Vec::new(); 7];
    for (i, c) in buried.into_iter().enumerate() {
        tableau[i % 7].push(TableauCard::face_down(c));
    }
    for (pile, rank) in tableau.iter_mut().zip(tops) {
        pile.push(up(Suit::Hearts, rank));
    }

    fixture(tableau, Default::default(), Vec::new(), Vec::new())
}
