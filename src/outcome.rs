#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::player::Mark;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    /// +1 for an X win, -1 for an O win, 0 otherwise.
    pub fn encode_winner_absolute(&self) -> f32 {
        match self {
            GameStatus::Won(Mark::X) => 1.0,
            GameStatus::Won(Mark::O) => -1.0,
            _ => 0.0,
        }
    }

    pub fn encode_winner_from_perspective(&self, perspective: Mark) -> f32 {
        match perspective {
            Mark::O => -self.encode_winner_absolute(),
            _ => self.encode_winner_absolute(),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
