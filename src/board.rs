use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MoveError;
use crate::player::Mark;
use crate::position::{AddressingMode, Coordinate};

const OCCUPIED: usize = usize::MAX;

/// The 8-neighbourhood, in the order threat fallbacks scan it.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular grid of marks plus an index of the cells that are still empty.
///
/// The empty index is a dense list with a reverse lookup table, so inserting,
/// removing and sampling an empty cell are all O(1).
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    addressing: AddressingMode,
    cells: Vec<Mark>,
    empty: Vec<usize>,
    slot: Vec<usize>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.addressing == other.addressing
            && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.width.hash(state);
        self.height.hash(state);
        self.addressing.hash(state);
    }
}

impl Board {
    pub fn new(width: usize, height: usize, addressing: AddressingMode) -> Self {
        let size = width * height;
        Board {
            width,
            height,
            addressing,
            cells: vec![Mark::Empty; size],
            empty: (0..size).collect(),
            slot: (0..size).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn addressing(&self) -> AddressingMode {
        self.addressing
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of `coord`, or `None` if it names no cell.
    #[inline]
    pub fn resolve(&self, coord: &Coordinate) -> Option<usize> {
        match self.addressing {
            AddressingMode::Bounded => coord
                .is_valid(self.width, self.height)
                .then(|| coord.to_index(self.width)),
            AddressingMode::Toroidal => Some(coord.wrap(self.width, self.height).to_index(self.width)),
        }
    }

    /// The in-range coordinate that `coord` refers to.
    pub fn canonical(&self, coord: &Coordinate) -> Option<Coordinate> {
        self.resolve(coord)
            .map(|idx| Coordinate::from_index(idx, self.width))
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.resolve(coord).is_some()
    }

    /// Mark at `coord`, or `None` when a bounded board has no such cell.
    #[inline]
    pub fn cell(&self, coord: &Coordinate) -> Option<Mark> {
        self.resolve(coord).map(|idx| self.cells[idx])
    }

    /// Mark at `coord`. Off-board coordinates of a bounded board read as `Empty`;
    /// callers that care must check [`Board::contains`] first.
    #[inline]
    pub fn get(&self, coord: &Coordinate) -> Mark {
        self.cell(coord).unwrap_or(Mark::Empty)
    }

    #[inline]
    pub fn get_index(&self, idx: usize) -> Mark {
        self.cells[idx]
    }

    /// Write `mark` at `coord` and return what was there before.
    ///
    /// Occupancy is not checked here; that is the move validator's job.
    pub fn set(&mut self, coord: &Coordinate, mark: Mark) -> Result<Mark, MoveError> {
        let idx = self.resolve(coord).ok_or(MoveError::OutOfBounds(*coord))?;
        Ok(self.set_index(idx, mark))
    }

    pub(crate) fn set_index(&mut self, idx: usize, mark: Mark) -> Mark {
        let previous = self.cells[idx];
        match (previous.is_empty(), mark.is_empty()) {
            (true, false) => self.remove_empty(idx),
            (false, true) => self.insert_empty(idx),
            _ => {}
        }
        self.cells[idx] = mark;
        previous
    }

    fn remove_empty(&mut self, idx: usize) {
        let pos = self.slot[idx];
        debug_assert_ne!(pos, OCCUPIED);
        self.empty.swap_remove(pos);
        if let Some(&moved) = self.empty.get(pos) {
            self.slot[moved] = pos;
        }
        self.slot[idx] = OCCUPIED;
    }

    fn insert_empty(&mut self, idx: usize) {
        debug_assert_eq!(self.slot[idx], OCCUPIED);
        self.slot[idx] = self.empty.len();
        self.empty.push(idx);
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty.len()
    }

    /// Indices of the empty cells, in no particular order.
    pub fn empty_cells(&self) -> &[usize] {
        &self.empty
    }

    pub fn is_full(&self) -> bool {
        self.empty.is_empty()
    }

    /// Indices of every cell holding `mark`, in row-major order.
    pub fn cells_with(&self, mark: Mark) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, m)| **m == mark)
            .map(|(idx, _)| idx)
    }

    /// Existing neighbours of `coord` in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(&self, coord: &Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        let origin = *coord;
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dc, dr)| origin.offset(dc, dr))
            .filter(|c| self.contains(c))
    }

    pub fn clear(&mut self) {
        let size = self.cells.len();
        self.cells.iter_mut().for_each(|c| *c = Mark::Empty);
        self.empty.clear();
        self.empty.extend(0..size);
        self.slot.clear();
        self.slot.extend(0..size);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                write!(f, "{}|", self.cells[row * self.width + col].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 3, AddressingMode::Bounded);
        assert_eq!(board.empty_count(), 12);
        assert_eq!(board.get(&Coordinate::new(3, 2)), Mark::Empty);
    }

    #[test]
    fn test_set_maintains_empty_count() {
        let mut board = Board::new(3, 3, AddressingMode::Bounded);
        assert_eq!(board.set(&Coordinate::new(1, 1), Mark::X), Ok(Mark::Empty));
        assert_eq!(board.empty_count(), 8);

        // Overwriting one mark with another leaves the count alone
        assert_eq!(board.set(&Coordinate::new(1, 1), Mark::O), Ok(Mark::X));
        assert_eq!(board.empty_count(), 8);

        assert_eq!(board.set(&Coordinate::new(1, 1), Mark::Empty), Ok(Mark::O));
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_empty_index_matches_cells() {
        let mut board = Board::new(5, 5, AddressingMode::Bounded);
        for idx in [0, 24, 12, 3, 7] {
            board.set_index(idx, Mark::X);
        }
        board.set_index(12, Mark::Empty);

        let mut listed: Vec<usize> = board.empty_cells().to_vec();
        listed.sort_unstable();
        let expected: Vec<usize> = board.cells_with(Mark::Empty).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_bounded_rejects_out_of_range() {
        let mut board = Board::new(3, 3, AddressingMode::Bounded);
        let outside = Coordinate::new(3, 0);
        assert_eq!(
            board.set(&outside, Mark::X),
            Err(MoveError::OutOfBounds(outside))
        );
        assert_eq!(board.cell(&outside), None);
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_toroidal_wraps() {
        let mut board = Board::new(6, 4, AddressingMode::Toroidal);
        board.set(&Coordinate::new(-1, 5), Mark::O).unwrap();
        assert_eq!(board.get(&Coordinate::new(5, 1)), Mark::O);
        assert_eq!(board.get(&Coordinate::new(11, -3)), Mark::O);
    }

    #[test]
    fn test_neighbors_bounded_corner() {
        let board = Board::new(3, 3, AddressingMode::Bounded);
        assert_eq!(board.neighbors(&Coordinate::new(0, 0)).count(), 3);
    }

    #[test]
    fn test_neighbors_toroidal_corner() {
        let board = Board::new(3, 3, AddressingMode::Toroidal);
        assert_eq!(board.neighbors(&Coordinate::new(0, 0)).count(), 8);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(2, 2, AddressingMode::Bounded);
        board.set_index(0, Mark::X);
        board.set_index(3, Mark::O);
        board.clear();
        assert_eq!(board.empty_count(), 4);
        assert_eq!(board, Board::new(2, 2, AddressingMode::Bounded));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 2, AddressingMode::Bounded);
        board.set(&Coordinate::new(1, 0), Mark::X).unwrap();
        assert_eq!(board.to_string(), "|.|X|\n|.|.|\n");
    }
}
