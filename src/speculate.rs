use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::player::Mark;
use crate::position::Coordinate;

/// A hypothetical mark on a board, removed again when the guard is dropped.
///
/// The previous contents of the cell are restored on every exit path,
/// including early returns and unwinding.
pub struct Speculation<'a> {
    board: &'a mut Board,
    idx: usize,
    previous: Mark,
}

impl<'a> Speculation<'a> {
    /// Place `mark` at `coord`. Returns `None` if `coord` names no cell.
    pub fn place(board: &'a mut Board, coord: &Coordinate, mark: Mark) -> Option<Self> {
        let idx = board.resolve(coord)?;
        Some(Self::place_index(board, idx, mark))
    }

    pub(crate) fn place_index(board: &'a mut Board, idx: usize, mark: Mark) -> Self {
        let previous = board.set_index(idx, mark);
        Speculation {
            board,
            idx,
            previous,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::from_index(self.idx, self.board.width())
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.set_index(self.idx, self.previous);
    }
}
