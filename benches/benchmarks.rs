use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spooky_gomoku::ai::{self, SearchParams, Strategy};
use spooky_gomoku::config::GameConfig;
use spooky_gomoku::game::GameState;
use spooky_gomoku::position::{AddressingMode, Coordinate};
use spooky_gomoku::win::{has_win, is_win_at};
use std::hint::black_box;

/// Play random moves on a fresh game to create a realistic mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame(config: GameConfig, moves: usize) -> GameState {
    let mut game = GameState::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..moves {
        if game.is_over() {
            break;
        }
        let legal = game.legal_moves();
        let coord = legal.choose(&mut rng).unwrap();
        game.play(coord).unwrap();
    }
    game
}

fn bounded(width: usize, height: usize, k: usize) -> GameConfig {
    GameConfig::new(width, height, k, AddressingMode::Bounded)
}

fn toroidal(width: usize, height: usize, k: usize) -> GameConfig {
    GameConfig::new(width, height, k, AddressingMode::Toroidal)
}

// ---------------------------------------------------------------------------
// Win detection
// ---------------------------------------------------------------------------

fn bench_is_win_at_19x19(c: &mut Criterion) {
    let game = setup_midgame(bounded(19, 19, 5), 60);
    let coord = game.last_move().unwrap();
    let mark = game.get_mark(&coord);
    c.bench_function("is_win_at_19x19", |b| {
        b.iter(|| black_box(is_win_at(game.board(), &coord, mark, 5)))
    });
}

fn bench_is_win_at_toroidal(c: &mut Criterion) {
    let game = setup_midgame(toroidal(19, 19, 5), 60);
    let coord = game.last_move().unwrap();
    let mark = game.get_mark(&coord);
    c.bench_function("is_win_at_toroidal_19x19", |b| {
        b.iter(|| black_box(is_win_at(game.board(), &coord, mark, 5)))
    });
}

fn bench_has_win_19x19(c: &mut Criterion) {
    let game = setup_midgame(bounded(19, 19, 5), 60);
    let mark = game.turn().opposite();
    c.bench_function("has_win_19x19", |b| {
        b.iter(|| black_box(has_win(game.board(), mark, 5)))
    });
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn bench_strategy(c: &mut Criterion, name: &str, config: GameConfig, strategy: Strategy) {
    let game = setup_midgame(config, 40);
    let params = SearchParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function(name, |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| black_box(ai::compute_move(&mut g, strategy, &params, &mut rng).unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_random_19x19(c: &mut Criterion) {
    bench_strategy(c, "random_19x19", bounded(19, 19, 5), Strategy::Random);
}

fn bench_proximity_19x19(c: &mut Criterion) {
    bench_strategy(c, "proximity_19x19", bounded(19, 19, 5), Strategy::Proximity);
}

fn bench_threat_19x19(c: &mut Criterion) {
    bench_strategy(c, "threat_19x19", bounded(19, 19, 5), Strategy::ThreatBlocking);
}

fn bench_threat_1000x1000(c: &mut Criterion) {
    bench_strategy(
        c,
        "threat_1000x1000",
        bounded(1000, 1000, 5),
        Strategy::ThreatBlocking,
    );
}

fn bench_minimax_3x3(c: &mut Criterion) {
    let mut game = GameState::new(bounded(3, 3, 3)).unwrap();
    game.play(&Coordinate::new(1, 1)).unwrap();
    let params = SearchParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("minimax_3x3", |b| {
        b.iter(|| black_box(ai::compute_move(&mut game, Strategy::Minimax, &params, &mut rng).unwrap()))
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout_15x15(c: &mut Criterion) {
    c.bench_function("random_playout_15x15", |b| {
        b.iter(|| {
            let mut game = GameState::standard();
            let mut rng = StdRng::seed_from_u64(123);
            while !game.is_over() {
                let moves = game.legal_moves();
                let coord = moves.choose(&mut rng).unwrap();
                game.play(coord).unwrap();
            }
            black_box(game.status())
        })
    });
}

fn bench_threat_self_play_toroidal(c: &mut Criterion) {
    let params = SearchParams::default();
    c.bench_function("threat_self_play_toroidal_19x19", |b| {
        b.iter(|| {
            let mut game = GameState::new(toroidal(19, 19, 5)).unwrap();
            let mut rng = StdRng::seed_from_u64(123);
            while !game.is_over() {
                let coord =
                    ai::compute_move(&mut game, Strategy::ThreatBlocking, &params, &mut rng).unwrap();
                game.play(&coord).unwrap();
            }
            black_box(game.status())
        })
    });
}

criterion_group!(
    benches,
    bench_is_win_at_19x19,
    bench_is_win_at_toroidal,
    bench_has_win_19x19,
    bench_random_19x19,
    bench_proximity_19x19,
    bench_threat_19x19,
    bench_threat_1000x1000,
    bench_minimax_3x3,
    bench_random_playout_15x15,
    bench_threat_self_play_toroidal,
);
criterion_main!(benches);
