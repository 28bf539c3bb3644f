//! Move selection for the automated player.
//!
//! Every strategy reads the board of a live game and returns an empty cell.
//! Strategies that look ahead write speculative marks through
//! [`Speculation`](crate::speculate::Speculation) guards, so the board is
//! identical before and after a call.

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::AiError;
use crate::game::GameState;
use crate::position::Coordinate;

pub mod minimax;
pub mod proximity;
pub mod random;
pub mod threat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Uniform over the empty cells.
    Random,
    /// Greedy: the empty cell touching the most opponent marks.
    Proximity,
    /// Block an immediate opponent win near their last move.
    #[default]
    ThreatBlocking,
    /// Exhaustive adversarial search, bounded by depth and node budgets.
    Minimax,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Proximity => "proximity",
            Strategy::ThreatBlocking => "threat-blocking",
            Strategy::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

pub const DEFAULT_SEARCH_RADIUS: usize = 2;
pub const DEFAULT_MAX_DEPTH: usize = 9;
pub const DEFAULT_MAX_NODES: u64 = 2_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Half-width of the square scanned around the opponent's last move.
    pub search_radius: usize,
    /// Plies searched below the candidate move.
    pub max_depth: usize,
    /// Positions visited before the search stops expanding.
    pub max_nodes: u64,
    /// Seed for random choices; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            search_radius: DEFAULT_SEARCH_RADIUS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Choose a move for the player whose turn it is.
///
/// The board may be written speculatively while searching but is always
/// restored before this returns.
#[instrument(level = "debug", skip(state, params, rng), fields(player = %state.turn()))]
pub fn compute_move(
    state: &mut GameState,
    strategy: Strategy,
    params: &SearchParams,
    rng: &mut StdRng,
) -> Result<Coordinate, AiError> {
    if state.is_over() {
        return Err(AiError::GameAlreadyOver);
    }

    let mark = state.turn();
    let run_length = state.run_length();
    let last_move = state.last_move();
    let board = state.board_mut();

    let choice = match strategy {
        Strategy::Random => random::random_move(board, rng),
        Strategy::Proximity => proximity::proximity_move(board, mark, rng),
        Strategy::ThreatBlocking => threat::threat_move(
            board,
            last_move,
            mark,
            run_length,
            params.search_radius,
            rng,
        ),
        Strategy::Minimax => minimax::minimax_move(board, mark, run_length, params),
    }
    .ok_or(AiError::NoEmptyCells)?;

    debug!(%strategy, coord = %choice, "ai move selected");
    Ok(choice)
}

/// Like [`compute_move`] but leaves `state` untouched by working on a copy.
pub fn compute_ai_move(
    state: &GameState,
    strategy: Strategy,
    params: &SearchParams,
) -> Result<Coordinate, AiError> {
    let mut scratch = state.clone();
    let mut rng = params.rng();
    compute_move(&mut scratch, strategy, params, &mut rng)
}
