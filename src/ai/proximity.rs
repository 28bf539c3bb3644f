use rand::rngs::StdRng;

use crate::ai::random::random_move;
use crate::board::Board;
use crate::player::Mark;
use crate::position::Coordinate;

/// Opponent and own marks among the existing 8 neighbours of `coord`.
fn neighbor_counts(board: &Board, coord: &Coordinate, mark: Mark) -> (usize, usize) {
    let opponent = mark.opposite();
    board
        .neighbors(coord)
        .fold((0, 0), |(opp, own), n| match board.get(&n) {
            m if m == opponent => (opp + 1, own),
            m if m == mark => (opp, own + 1),
            _ => (opp, own),
        })
}

/// Greedy blocking: the empty cell with the most adjacent opponent marks,
/// ties going to more adjacent own marks and then to row-major order.
///
/// Falls back to a random cell when no empty cell touches any mark.
pub fn proximity_move(board: &Board, mark: Mark, rng: &mut StdRng) -> Option<Coordinate> {
    let width = board.width();
    let best = board
        .cells_with(Mark::Empty)
        .map(|idx| {
            let coord = Coordinate::from_index(idx, width);
            (neighbor_counts(board, &coord, mark), coord)
        })
        .filter(|((opp, own), _)| opp + own > 0)
        .fold(None, |best: Option<((usize, usize), Coordinate)>, candidate| match best {
            Some(current) if current.0 >= candidate.0 => Some(current),
            _ => Some(candidate),
        });

    match best {
        Some((_, coord)) => Some(coord),
        None => random_move(board, rng),
    }
}
