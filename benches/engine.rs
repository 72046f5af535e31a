//! Benchmarks for the rules engine hot paths: move generation, move
//! application over whole games, and state encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ultimate_ttt::{
    FlatEncoder, PlayoutConfig, RandomPlayout, RulesEngine, StateEncoder, UltimateTicTacToe,
};

fn bench_legal_moves(c: &mut Criterion) {
    let rules = UltimateTicTacToe::new();
    let mut group = c.benchmark_group("legal_moves");

    // Initial position (any board) and a mid-game position (usually forced).
    let mid_game = RandomPlayout::new(PlayoutConfig::new().with_seed(7).with_max_moves(20))
        .play(0)
        .final_state;

    for (name, state) in [("initial", rules.initial()), ("mid_game", mid_game)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, state| {
            b.iter(|| rules.legal_moves(black_box(state)))
        });
    }
    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let runner = RandomPlayout::new(PlayoutConfig::new().with_seed(42));
    let mut game_index = 0;

    c.bench_function("random_playout", |b| {
        b.iter(|| {
            game_index += 1;
            runner.play(black_box(game_index))
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let encoder = FlatEncoder::new();
    let state = RandomPlayout::new(PlayoutConfig::new().with_seed(3).with_max_moves(30))
        .play(0)
        .final_state;

    c.bench_function("flat_encode", |b| b.iter(|| encoder.encode(black_box(&state))));
}

criterion_group!(benches, bench_legal_moves, bench_random_playout, bench_encode);
criterion_main!(benches);
