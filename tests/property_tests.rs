//! Property tests: deck shape and engine invariants under arbitrary input.

use std::collections::HashSet;

use memory_match::cards::{build_deck, Catalog};
use memory_match::core::{GameConfig, GameRng, Phase, UidAllocator};
use memory_match::engine::{MemoryGame, HISTORY_LIMIT};
use memory_match::timing::{MATCH_REWARD, TIME_LIMIT_SECS};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Op {
    Start,
    Flip(usize),
    Advance(u64),
    Restart,
    Expire,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        6 => (0usize..14).prop_map(Op::Flip),
        4 => (0u64..2500).prop_map(Op::Advance),
        1 => Just(Op::Restart),
        1 => Just(Op::Expire),
    ]
}

fn check_invariants(game: &MemoryGame) -> Result<(), TestCaseError> {
    let cards = game.cards();
    for card in cards.iter() {
        prop_assert!(!card.is_matched() || card.is_flipped(), "{} matched face-down", card);
    }

    prop_assert_eq!(game.matched_count(), cards.matched_count());
    prop_assert_eq!(game.matched_count() % 2, 0);
    prop_assert_eq!(game.score(), MATCH_REWARD * (game.matched_count() / 2) as u32);
    prop_assert!(game.time_remaining() <= TIME_LIMIT_SECS);

    prop_assert!(game.selection().len() <= 2);
    for &index in game.selection() {
        prop_assert!(cards[index].is_flipped());
        prop_assert!(!cards[index].is_matched());
    }

    match game.phase() {
        Phase::Revealing | Phase::Playing => {
            prop_assert!(game.is_timer_running());
            prop_assert!(game.outcome().is_none());
            prop_assert!(game.matched_count() < cards.len());
        }
        Phase::GameOver => {
            prop_assert!(!game.is_timer_running());
            prop_assert!(game.outcome().is_some());
        }
        Phase::NotStarted => prop_assert!(!game.is_timer_running()),
    }
    Ok(())
}

proptest! {
    #[test]
    fn deck_has_one_pair_per_name(
        names in prop::collection::hash_set("[a-z]{1,8}", 1..20),
        seed in any::<u64>(),
    ) {
        let catalog = Catalog::new(names.iter().cloned()).unwrap();
        let deck = build_deck(&catalog, &mut GameRng::new(seed), &mut UidAllocator::new());

        prop_assert_eq!(deck.len(), names.len() * 2);
        let counts = deck.pair_counts();
        prop_assert_eq!(counts.len(), names.len());
        prop_assert!(counts.values().all(|&count| count == 2));

        let uids: HashSet<_> = deck.iter().map(|card| card.id()).collect();
        prop_assert_eq!(uids.len(), deck.len());
    }

    #[test]
    fn engine_invariants_hold(
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 1..200),
    ) {
        let config = GameConfig::new()
            .with_catalog(["bear", "fox", "rabbit", "lion", "elephant", "giraffe"])
            .with_seed(seed);
        let mut game = MemoryGame::new(config).unwrap();

        for op in ops {
            let history_len = game.history().len();
            let started = match op {
                Op::Start => game.start_game().is_applied(),
                Op::Flip(index) => { game.flip_card(index); false }
                Op::Advance(ms) => { game.advance(ms); false }
                Op::Restart => { game.restart(); false }
                Op::Expire => { game.on_timer_expire(); false }
            };
            if started {
                prop_assert_eq!(game.history().len(), 1);
            } else if !matches!(op, Op::Advance(_)) {
                prop_assert_eq!(game.history().len(), history_len + 1);
            }
            prop_assert!(game.history().len() <= HISTORY_LIMIT);
            check_invariants(&game)?;
        }
    }

    #[test]
    fn generation_never_decreases(
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 1..100),
    ) {
        let mut game = MemoryGame::new(GameConfig::new().with_catalog(["bear", "fox"]).with_seed(seed)).unwrap();
        let mut last = game.generation();

        for op in ops {
            match op {
                Op::Start => { game.start_game(); }
                Op::Flip(index) => { game.flip_card(index); }
                Op::Advance(ms) => game.advance(ms),
                Op::Restart => { game.restart(); }
                Op::Expire => { game.on_timer_expire(); }
            }
            prop_assert!(game.generation() >= last);
            last = game.generation();
        }
    }
}
