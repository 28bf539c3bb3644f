#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contents of a single cell. `X` always moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum Mark {
    #[default]
    Empty = 0,
    X = 1,
    O = -1,
}

impl Mark {
    /// The other player. `Empty` has no opponent and maps to itself.
    pub fn opposite(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' => Some(Mark::Empty),
            _ => None,
        }
    }

    pub fn from_int(i: i8) -> Option<Mark> {
        match i {
            1 => Some(Mark::X),
            -1 => Some(Mark::O),
            0 => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark_str = match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "Empty",
        };
        write!(f, "{}", mark_str)
    }
}
