use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::position::Coordinate;

/// Uniform choice among the empty cells.
///
/// Draws from the board's empty-cell index, so it terminates in constant time
/// no matter how large or sparse the board is.
pub fn random_move(board: &Board, rng: &mut StdRng) -> Option<Coordinate> {
    board
        .empty_cells()
        .choose(rng)
        .map(|&idx| Coordinate::from_index(idx, board.width()))
}
