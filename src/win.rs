//! Run detection.
//!
//! [`is_win_at`] looks only at the lines through one cell and is what the game
//! uses after every move. [`has_win`] scans the whole board and serves as the
//! reference the incremental check is tested against.

use crate::board::Board;
use crate::player::Mark;
use crate::position::{AddressingMode, Coordinate};

/// Horizontal, vertical, and both diagonals.
pub const AXES: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Number of distinct cells on a line along `axis` before it repeats.
///
/// Bounded lines never repeat; on a torus the line closes on itself.
fn axis_period(board: &Board, axis: (i64, i64)) -> usize {
    match board.addressing() {
        AddressingMode::Bounded => usize::MAX,
        AddressingMode::Toroidal => match axis {
            (_, 0) => board.width(),
            (0, _) => board.height(),
            _ => {
                let (w, h) = (board.width(), board.height());
                w / gcd(w, h) * h
            }
        },
    }
}

fn count_direction(
    board: &Board,
    origin: &Coordinate,
    (dc, dr): (i64, i64),
    mark: Mark,
    max_steps: usize,
) -> usize {
    let mut count = 0;
    let mut current = *origin;
    while count < max_steps {
        current = current.offset(dc, dr);
        if board.cell(&current) != Some(mark) {
            break;
        }
        count += 1;
    }
    count
}

/// Length of the run of `mark` through `coord` along `axis`, capped at `run_length`.
pub fn run_length_at(
    board: &Board,
    coord: &Coordinate,
    axis: (i64, i64),
    mark: Mark,
    run_length: usize,
) -> usize {
    if mark.is_empty() || board.cell(coord) != Some(mark) {
        return 0;
    }

    let limit = run_length.min(axis_period(board, axis));
    let forward = count_direction(board, coord, axis, mark, limit.saturating_sub(1));
    let backward = count_direction(
        board,
        coord,
        (-axis.0, -axis.1),
        mark,
        limit.saturating_sub(1 + forward),
    );
    1 + forward + backward
}

/// Whether the `mark` at `coord` completes a run of at least `run_length`.
///
/// Costs O(`run_length`) per axis regardless of board size.
#[hotpath::measure]
pub fn is_win_at(board: &Board, coord: &Coordinate, mark: Mark, run_length: usize) -> bool {
    AXES.iter()
        .any(|&axis| run_length_at(board, coord, axis, mark, run_length) >= run_length)
}

/// Exhaustive check: does any run of `run_length` cells hold `mark`?
pub fn has_win(board: &Board, mark: Mark, run_length: usize) -> bool {
    if mark.is_empty() || run_length == 0 {
        return false;
    }

    let width = board.width();
    board.cells_with(mark).any(|idx| {
        let origin = Coordinate::from_index(idx, width);
        AXES.iter().any(|&(dc, dr)| {
            if run_length > axis_period(board, (dc, dr)) {
                return false;
            }
            (1..run_length as i64)
                .all(|step| board.cell(&origin.offset(dc * step, dr * step)) == Some(mark))
        })
    })
}

/// The mark holding a winning run, if any. X is reported first should both.
pub fn winner(board: &Board, run_length: usize) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_win(board, mark, run_length))
}

/// Board exhausted with no winning run for either mark.
pub fn is_draw(board: &Board, run_length: usize) -> bool {
    board.empty_count() == 0 && winner(board, run_length).is_none()
}
