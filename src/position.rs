#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How coordinates outside the grid extents are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressingMode {
    /// Coordinates outside `[0, width) x [0, height)` do not exist.
    #[default]
    Bounded,
    /// Coordinates are reduced modulo the extents, so the grid has no edge.
    Toroidal,
}

/// A (column, row) pair. Columns grow to the right, rows grow downward.
///
/// Signed so that callers may address cells left of or above the origin;
/// whether such a coordinate exists depends on the board's [`AddressingMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub col: i64,
    pub row: i64,
}

impl Coordinate {
    pub fn new(col: i64, row: i64) -> Self {
        Coordinate { col, row }
    }

    pub fn offset(&self, dc: i64, dr: i64) -> Self {
        Coordinate {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Reduce both axes into `[0, width) x [0, height)`.
    pub fn wrap(&self, width: usize, height: usize) -> Self {
        Coordinate {
            col: self.col.rem_euclid(width as i64),
            row: self.row.rem_euclid(height as i64),
        }
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Coordinate {
            col: (index % width) as i64,
            row: (index / width) as i64,
        }
    }

    /// Row-major index. Only meaningful for a coordinate already inside the extents.
    pub fn to_index(&self, width: usize) -> usize {
        self.row as usize * width + self.col as usize
    }

    pub fn is_valid(&self, width: usize, height: usize) -> bool {
        self.col >= 0 && self.row >= 0 && (self.col as u64) < width as u64 && (self.row as u64) < height as u64
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((col, row): (i64, i64)) -> Self {
        Coordinate::new(col, row)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_negative() {
        let c = Coordinate::new(-1, -7).wrap(6, 5);
        assert_eq!(c, Coordinate::new(5, 3));
    }

    #[test]
    fn test_wrap_large() {
        let c = Coordinate::new(13, 5).wrap(6, 5);
        assert_eq!(c, Coordinate::new(1, 0));
    }

    #[test]
    fn test_index_round_trip() {
        let c = Coordinate::new(3, 2);
        assert_eq!(c.to_index(10), 23);
        assert_eq!(Coordinate::from_index(23, 10), c);
    }

    #[test]
    fn test_is_valid() {
        assert!(Coordinate::new(0, 0).is_valid(1, 1));
        assert!(!Coordinate::new(1, 0).is_valid(1, 1));
        assert!(!Coordinate::new(-1, 0).is_valid(5, 5));
    }
}
