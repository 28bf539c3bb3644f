use thiserror::Error;

use crate::position::Coordinate;

/// Why a move was rejected. The board is untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),
    #[error("cell {0} is already occupied")]
    CellOccupied(Coordinate),
    #[error("the game is already over")]
    GameAlreadyOver,
    #[error("a move must place X or O")]
    EmptyMark,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AiError {
    #[error("no empty cell left to play")]
    NoEmptyCells,
    #[error("the game is already over")]
    GameAlreadyOver,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ai(#[from] AiError),
}
