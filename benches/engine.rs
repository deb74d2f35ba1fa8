use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::cards::{build_deck, Catalog};
use memory_match::core::{GameConfig, GameRng, UidAllocator};
use memory_match::engine::MemoryGame;
use memory_match::timing::{PREVIEW_DELAY_MS, RESOLVE_DELAY_MS};

fn bench_build_deck(c: &mut Criterion) {
    let catalog = Catalog::animals();
    let mut rng = GameRng::new(12345);
    let mut uids = UidAllocator::new();

    c.bench_function("build_deck_12", |b| {
        b.iter(|| build_deck(black_box(&catalog), &mut rng, &mut uids))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(12345)).unwrap();
    game.start_game();

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_scripted", |b| {
        b.iter(|| {
            let mut game = MemoryGame::new(GameConfig::default().with_seed(12345)).unwrap();
            game.start_game();
            game.advance(PREVIEW_DELAY_MS);

            let names: Vec<String> = game.catalog().iter().map(str::to_string).collect();
            for name in &names {
                let first = game.cards().position_of(name, None).unwrap();
                let second = game.cards().position_of(name, Some(first)).unwrap();
                game.flip_card(first);
                game.flip_card(second);
                game.advance(RESOLVE_DELAY_MS);
            }
            black_box(game.score())
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut game = MemoryGame::new(GameConfig::default().with_seed(12345)).unwrap();
    game.start_game();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| game.advance(black_box(16)))
    });
}

criterion_group!(
    benches,
    bench_build_deck,
    bench_snapshot,
    bench_full_game,
    bench_advance
);
criterion_main!(benches);
