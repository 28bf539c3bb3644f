//! Self-play workload for profiling.
//!
//! Run with `cargo run --release --bin profile --features hotpath` to get a
//! timing report, and `RUST_LOG=spooky_gomoku=debug` to see per-move logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spooky_gomoku::ai::{self, SearchParams, Strategy};
use spooky_gomoku::config::GameConfig;
use spooky_gomoku::game::GameState;
use spooky_gomoku::outcome::GameStatus;
use spooky_gomoku::position::AddressingMode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const GAMES_PER_CONFIG: u64 = 8;

#[hotpath::measure]
fn self_play(
    config: GameConfig,
    strategy: Strategy,
    params: &SearchParams,
    rng: &mut StdRng,
) -> Result<GameStatus, spooky_gomoku::GameError> {
    let mut state = GameState::new(config)?;
    while !state.is_over() {
        let coord = ai::compute_move(&mut state, strategy, params, rng)?;
        state.play(&coord)?;
    }
    Ok(state.status())
}

fn run(
    label: &str,
    config: GameConfig,
    strategy: Strategy,
    params: SearchParams,
) -> Result<(), spooky_gomoku::GameError> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let (mut x, mut o, mut draws) = (0, 0, 0);
    for _ in 0..GAMES_PER_CONFIG {
        match self_play(config, strategy, &params, &mut rng)? {
            GameStatus::Won(spooky_gomoku::Mark::X) => x += 1,
            GameStatus::Won(_) => o += 1,
            _ => draws += 1,
        }
    }
    info!(label, %strategy, x, o, draws, "self-play finished");
    Ok(())
}

#[hotpath::main]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run_all() {
        error!(%err, "profile run failed");
    }
}

fn run_all() -> Result<(), spooky_gomoku::GameError> {
    let budget = SearchParams {
        max_nodes: 200_000,
        ..SearchParams::default()
    };

    for strategy in [Strategy::Random, Strategy::Proximity, Strategy::ThreatBlocking] {
        run(
            "15x15 bounded",
            GameConfig::standard(),
            strategy,
            SearchParams::default(),
        )?;
        run(
            "19x19 toroidal",
            GameConfig::new(19, 19, 5, AddressingMode::Toroidal),
            strategy,
            SearchParams::default(),
        )?;
        run(
            "64x48 bounded",
            GameConfig::new(64, 48, 6, AddressingMode::Bounded),
            strategy,
            SearchParams::default(),
        )?;
    }

    run(
        "3x3 bounded",
        GameConfig::new(3, 3, 3, AddressingMode::Bounded),
        Strategy::Minimax,
        budget,
    )?;
    run(
        "4x4 toroidal",
        GameConfig::new(4, 4, 3, AddressingMode::Toroidal),
        Strategy::Minimax,
        budget,
    )?;

    Ok(())
}
