pub mod ai;
pub mod board;
pub mod config;
pub mod controller;
pub mod encode;
pub mod error;
pub mod game;
pub mod outcome;
pub mod player;
pub mod position;
pub mod speculate;
pub mod win;

pub use crate::ai::{compute_ai_move, SearchParams, Strategy};
pub use crate::board::Board;
pub use crate::config::GameConfig;
pub use crate::controller::{new_game, GameController, Opponent, Phase};
pub use crate::error::{AiError, ConfigError, GameError, MoveError};
pub use crate::game::GameState;
pub use crate::outcome::GameStatus;
pub use crate::player::Mark;
pub use crate::position::{AddressingMode, Coordinate};

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn spooky_gomoku(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add("X", Mark::X as i8)?;
    m.add("O", Mark::O as i8)?;
    m.add("EMPTY", Mark::Empty as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::exceptions::PyValueError;

    fn value_error(err: impl std::fmt::Display) -> PyErr {
        PyErr::new::<PyValueError, _>(err.to_string())
    }

    fn parse_strategy(name: &str) -> PyResult<Strategy> {
        match name {
            "random" => Ok(Strategy::Random),
            "proximity" => Ok(Strategy::Proximity),
            "threat" | "threat-blocking" => Ok(Strategy::ThreatBlocking),
            "minimax" => Ok(Strategy::Minimax),
            other => Err(value_error(format!("unknown strategy: {}", other))),
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        controller: GameController,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (width, height, run_length, toroidal = false, strategy = None, seed = None, strict = true))]
        pub fn new(
            width: usize,
            height: usize,
            run_length: usize,
            toroidal: bool,
            strategy: Option<&str>,
            seed: Option<u64>,
            strict: bool,
        ) -> PyResult<Self> {
            let addressing = if toroidal {
                AddressingMode::Toroidal
            } else {
                AddressingMode::Bounded
            };
            let config = GameConfig::new(width, height, run_length, addressing)
                .with_strict_winnability(strict);
            let opponent = strategy
                .map(|name| {
                    let params = SearchParams {
                        seed,
                        ..SearchParams::default()
                    };
                    parse_strategy(name).map(|s| Opponent::new(s, params))
                })
                .transpose()?;
            let controller = GameController::with_opponent(config, opponent).map_err(value_error)?;
            Ok(PyGame { controller })
        }

        pub fn width(&self) -> usize {
            self.controller.state().width()
        }

        pub fn height(&self) -> usize {
            self.controller.state().height()
        }

        pub fn run_length(&self) -> usize {
            self.controller.state().run_length()
        }

        pub fn get_mark(&self, col: i64, row: i64) -> i8 {
            self.controller.state().get_mark(&Coordinate::new(col, row)) as i8
        }

        pub fn turn(&self) -> i8 {
            self.controller.state().turn() as i8
        }

        pub fn is_over(&self) -> bool {
            self.controller.state().is_over()
        }

        /// `None` while in progress, `0` for a draw, otherwise the winning mark.
        pub fn winner(&self) -> Option<i8> {
            match self.controller.state().status() {
                GameStatus::InProgress => None,
                GameStatus::Draw => Some(0),
                GameStatus::Won(mark) => Some(mark as i8),
            }
        }

        /// +1 for an X win, -1 for an O win, 0 otherwise. With `perspective`
        /// (1 for X, -1 for O) the value is from that side's point of view.
        #[pyo3(signature = (perspective = None))]
        pub fn outcome_value(&self, perspective: Option<i8>) -> PyResult<f32> {
            let status = self.controller.state().status();
            match perspective {
                None => Ok(status.encode_winner_absolute()),
                Some(value) => match Mark::from_int(value) {
                    Some(mark) if !mark.is_empty() => {
                        Ok(status.encode_winner_from_perspective(mark))
                    }
                    _ => Err(value_error(format!("invalid perspective: {}", value))),
                },
            }
        }

        pub fn status(&self) -> String {
            self.controller.state().status().to_string()
        }

        pub fn play(&mut self, col: i64, row: i64) -> PyResult<()> {
            self.controller
                .apply_player_move(&Coordinate::new(col, row))
                .map(|_| ())
                .map_err(value_error)
        }

        #[pyo3(signature = (strategy, seed = None))]
        pub fn ai_move(&mut self, strategy: &str, seed: Option<u64>) -> PyResult<(i64, i64)> {
            let params = SearchParams {
                seed,
                ..SearchParams::default()
            };
            let coord = compute_ai_move(self.controller.state(), parse_strategy(strategy)?, &params)
                .map_err(value_error)?;
            Ok((coord.col, coord.row))
        }

        pub fn undo_move(&mut self) -> PyResult<bool> {
            self.controller.undo_move().map_err(value_error)
        }

        pub fn reset(&mut self) -> PyResult<()> {
            self.controller.reset().map(|_| ()).map_err(value_error)
        }

        pub fn legal_action_indices(&self) -> Vec<usize> {
            encode::legal_action_indices(self.controller.state())
        }

        pub fn apply_action(&mut self, action: usize) -> PyResult<()> {
            let state = self.controller.state();
            let coord = encode::decode_action(action, state.width(), state.height())
                .ok_or_else(|| value_error("invalid action"))?;
            self.controller
                .apply_player_move(&coord)
                .map(|_| ())
                .map_err(value_error)
        }

        pub fn total_actions(&self) -> usize {
            let state = self.controller.state();
            encode::total_actions(state.width(), state.height())
        }

        pub fn __str__(&self) -> String {
            self.controller.state().to_string()
        }

        pub fn __repr__(&self) -> String {
            let state = self.controller.state();
            format!(
                "Game(width={}, height={}, run_length={}, turn={}, over={})",
                state.width(),
                state.height(),
                state.run_length(),
                state.turn(),
                state.is_over()
            )
        }
    }
}
