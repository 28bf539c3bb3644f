use tracing::{debug, instrument};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::outcome::GameStatus;
use crate::player::Mark;
use crate::position::Coordinate;
use crate::win;

/// Board, turn, status and last move of one game.
///
/// The board is only written through [`GameState::apply_move`] (and its
/// callers), so `status` and `last_move` always describe its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_player: Mark,
    status: GameStatus,
    last_move: Option<Coordinate>,
    history: Vec<Coordinate>,
}

impl GameState {
    #[instrument(level = "debug")]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameState {
            board: Board::new(config.width, config.height, config.addressing),
            config,
            current_player: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::new(),
        })
    }

    pub fn standard() -> Self {
        let config = GameConfig::standard();
        GameState {
            board: Board::new(config.width, config.height, config.addressing),
            config,
            current_player: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn run_length(&self) -> usize {
        self.config.run_length
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn get_mark(&self, coord: &Coordinate) -> Mark {
        self.board.get(coord)
    }

    pub fn turn(&self) -> Mark {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }

    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Empty cells in row-major order. Linear in the board size.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        if self.is_over() {
            return Vec::new();
        }
        self.board
            .cells_with(Mark::Empty)
            .map(|idx| Coordinate::from_index(idx, self.board.width()))
            .collect()
    }

    pub fn is_legal_move(&self, coord: &Coordinate) -> bool {
        !self.is_over() && self.board.cell(coord) == Some(Mark::Empty)
    }

    /// Write `player` at `coord` after checking the game is live, `player` is a
    /// real mark, the cell exists and the cell is empty. Status and turn are
    /// left for the caller to classify.
    pub fn apply_move(&mut self, coord: &Coordinate, player: Mark) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if player.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        let canonical = self
            .board
            .canonical(coord)
            .ok_or(MoveError::OutOfBounds(*coord))?;
        if !self.board.get(&canonical).is_empty() {
            return Err(MoveError::CellOccupied(*coord));
        }

        self.board.set(&canonical, player)?;
        self.last_move = Some(canonical);
        self.history.push(canonical);
        Ok(())
    }

    /// Status implied by the last move: a win beats a full board.
    pub fn classify(&self) -> GameStatus {
        let Some(last) = self.last_move else {
            return GameStatus::InProgress;
        };
        let mark = self.board.get(&last);
        if win::is_win_at(&self.board, &last, mark, self.config.run_length) {
            GameStatus::Won(mark)
        } else if self.board.empty_count() == 0 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Place the current player's mark, classify the result and pass the turn.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, coord: &Coordinate) -> Result<GameStatus, MoveError> {
        self.apply_move(coord, self.current_player)?;
        self.status = self.classify();
        match self.status {
            GameStatus::InProgress => self.current_player = self.current_player.opposite(),
            status => debug!(%status, moves = self.history.len(), "game finished"),
        }
        Ok(self.status)
    }

    /// Take back the last move. Returns `false` if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(coord) = self.history.pop() else {
            return false;
        };
        let mark = self.board.get(&coord);
        // Moves are recorded in canonical form, so this cannot miss.
        let _ = self.board.set(&coord, Mark::Empty);
        self.current_player = mark;
        self.last_move = self.history.last().copied();
        self.status = GameStatus::InProgress;
        true
    }

    pub fn is_draw(&self) -> bool {
        win::is_draw(&self.board, self.config.run_length)
    }

    /// Fresh board with the same configuration; X to move.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, status: {}, k: {})\n{}",
            self.current_player, self.status, self.config.run_length, self.board
        )
    }
}
