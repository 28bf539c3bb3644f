use rand::rngs::StdRng;
use tracing::{debug, instrument};

use crate::ai::{self, SearchParams, Strategy};
use crate::config::GameConfig;
use crate::error::{AiError, ConfigError, GameError};
use crate::game::GameState;
use crate::outcome::GameStatus;
use crate::player::Mark;
use crate::position::Coordinate;

/// Where the game stands from the caller's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    XTurn,
    OTurn,
    Won(Mark),
    Draw,
}

impl Phase {
    pub fn of(state: &GameState) -> Phase {
        match state.status() {
            GameStatus::Won(mark) => Phase::Won(mark),
            GameStatus::Draw => Phase::Draw,
            GameStatus::InProgress => match state.turn() {
                Mark::O => Phase::OTurn,
                _ => Phase::XTurn,
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

/// The automated side of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opponent {
    pub mark: Mark,
    pub strategy: Strategy,
    pub params: SearchParams,
}

impl Opponent {
    pub fn new(strategy: Strategy, params: SearchParams) -> Self {
        Opponent {
            mark: Mark::O,
            strategy,
            params,
        }
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Opponent::new(Strategy::default(), SearchParams::default())
    }
}

/// Owns one game and drives its turn order.
///
/// When a move hands the turn to the automated opponent, the opponent's reply
/// is chosen and played before control returns to the caller.
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    opponent: Option<Opponent>,
    rng: StdRng,
}

impl GameController {
    /// A game against the default opponent (O, threat blocking).
    pub fn new_game(config: GameConfig) -> Result<Self, GameError> {
        Self::with_opponent(config, Some(Opponent::default()))
    }

    /// `None` gives a two-player game with no automated side.
    #[instrument(level = "debug")]
    pub fn with_opponent(config: GameConfig, opponent: Option<Opponent>) -> Result<Self, GameError> {
        let state = GameState::new(config)?;
        let rng = opponent
            .map(|o| o.params)
            .unwrap_or_default()
            .rng();
        let mut controller = GameController {
            state,
            opponent,
            rng,
        };
        controller.run_opponent()?;
        Ok(controller)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn opponent(&self) -> Option<&Opponent> {
        self.opponent.as_ref()
    }

    pub fn phase(&self) -> Phase {
        Phase::of(&self.state)
    }

    /// Play the current player's mark at `coord`, then let the opponent reply.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_player_move(&mut self, coord: &Coordinate) -> Result<Phase, GameError> {
        let status = self.state.play(coord)?;
        debug!(%status, "player move applied");
        self.run_opponent()?;
        Ok(self.phase())
    }

    /// Suggest a move for the side to play without changing the game.
    ///
    /// A seed in `params` gives a reproducible choice; without one the
    /// controller's own generator is used.
    pub fn compute_ai_move(
        &mut self,
        strategy: Strategy,
        params: &SearchParams,
    ) -> Result<Coordinate, AiError> {
        match params.seed {
            Some(_) => ai::compute_move(&mut self.state, strategy, params, &mut params.rng()),
            None => ai::compute_move(&mut self.state, strategy, params, &mut self.rng),
        }
    }

    /// Clear the board and start again with X to move.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> Result<Phase, GameError> {
        self.state.reset();
        self.run_opponent()?;
        Ok(self.phase())
    }

    /// Take back moves until a human is to play again.
    ///
    /// Against an opponent this removes its reply together with the move it
    /// answered. If the opponent made the very first move it is played again.
    /// Returns `Ok(false)` if there was nothing to undo.
    #[instrument(level = "debug", skip(self))]
    pub fn undo_move(&mut self) -> Result<bool, GameError> {
        if !self.state.undo_move() {
            return Ok(false);
        }
        if let Some(opponent) = self.opponent {
            while self.state.turn() == opponent.mark && self.state.undo_move() {}
        }
        self.run_opponent()?;
        Ok(true)
    }

    fn run_opponent(&mut self) -> Result<(), GameError> {
        let Some(opponent) = self.opponent else {
            return Ok(());
        };
        if self.state.is_over() || self.state.turn() != opponent.mark {
            return Ok(());
        }

        let coord = ai::compute_move(
            &mut self.state,
            opponent.strategy,
            &opponent.params,
            &mut self.rng,
        )?;
        let status = self.state.play(&coord)?;
        debug!(%coord, %status, "opponent move applied");
        Ok(())
    }
}

/// Validate `config` and build a fresh game state.
pub fn new_game(config: GameConfig) -> Result<GameState, ConfigError> {
    GameState::new(config)
}
