//! Depth- and node-bounded minimax.
//!
//! Scores are from the searching player's point of view: `10 - depth` for a
//! win, `depth - 10` for a loss, `0` for a draw or for any position cut off by
//! a budget. Without cut-offs the search is only practical up to about 4x4
//! boards with a run length of 3.

use tracing::trace;

use crate::ai::SearchParams;
use crate::board::Board;
use crate::player::Mark;
use crate::position::Coordinate;
use crate::speculate::Speculation;
use crate::win::is_win_at;

const WIN_SCORE: i32 = 10;

/// Result of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub coordinate: Coordinate,
    pub score: i32,
    pub nodes: u64,
    /// Whether some line was cut short by the depth or node budget.
    pub budget_exhausted: bool,
}

struct Minimax {
    player: Mark,
    run_length: usize,
    max_depth: usize,
    max_nodes: u64,
    nodes: u64,
    budget_exhausted: bool,
}

impl Minimax {
    /// Value of the position after `mover` placed at `last`, `depth` plies below the root move.
    fn search(&mut self, board: &mut Board, last: usize, mover: Mark, depth: usize) -> i32 {
        self.nodes += 1;

        let last_coord = Coordinate::from_index(last, board.width());
        if is_win_at(board, &last_coord, mover, self.run_length) {
            return if mover == self.player {
                WIN_SCORE - depth as i32
            } else {
                depth as i32 - WIN_SCORE
            };
        }
        if board.is_full() {
            return 0;
        }
        if depth >= self.max_depth || self.nodes >= self.max_nodes {
            self.budget_exhausted = true;
            return 0;
        }

        let next = mover.opposite();
        let maximizing = next == self.player;
        let candidates: Vec<usize> = board.cells_with(Mark::Empty).collect();

        let mut best: Option<i32> = None;
        for idx in candidates {
            if self.nodes >= self.max_nodes {
                self.budget_exhausted = true;
                break;
            }
            let mut guard = Speculation::place_index(board, idx, next);
            let score = self.search(&mut guard, idx, next, depth + 1);
            best = Some(match best {
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
                None => score,
            });
        }
        best.unwrap_or(0)
    }
}

/// Search every empty cell for `player` and report the best one.
///
/// Ties go to the first cell in row-major order.
#[hotpath::measure]
pub fn analyze(
    board: &mut Board,
    player: Mark,
    run_length: usize,
    params: &SearchParams,
) -> Option<Analysis> {
    let mut search = Minimax {
        player,
        run_length,
        max_depth: params.max_depth,
        max_nodes: params.max_nodes,
        nodes: 0,
        budget_exhausted: false,
    };

    let candidates: Vec<usize> = board.cells_with(Mark::Empty).collect();
    let mut best: Option<(i32, usize)> = None;
    for idx in candidates {
        let mut guard = Speculation::place_index(board, idx, player);
        let score = search.search(&mut guard, idx, player, 0);
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, idx));
        }
    }

    trace!(
        nodes = search.nodes,
        budget_exhausted = search.budget_exhausted,
        "minimax finished"
    );

    best.map(|(score, idx)| Analysis {
        coordinate: Coordinate::from_index(idx, board.width()),
        score,
        nodes: search.nodes,
        budget_exhausted: search.budget_exhausted,
    })
}

pub fn minimax_move(
    board: &mut Board,
    player: Mark,
    run_length: usize,
    params: &SearchParams,
) -> Option<Coordinate> {
    analyze(board, player, run_length, params).map(|analysis| analysis.coordinate)
}
