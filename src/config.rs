#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::position::AddressingMode;

pub const STANDARD_SIZE: usize = 15;
pub const STANDARD_RUN_LENGTH: usize = 5;

/// Everything fixed at game creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Number of marks in a row needed to win (`k`).
    pub run_length: usize,
    pub addressing: AddressingMode,
    /// Reject run lengths longer than both board extents.
    #[cfg_attr(feature = "serde", serde(default = "default_strict"))]
    pub strict_winnability: bool,
}

#[cfg(feature = "serde")]
fn default_strict() -> bool {
    true
}

impl GameConfig {
    pub fn new(width: usize, height: usize, run_length: usize, addressing: AddressingMode) -> Self {
        GameConfig {
            width,
            height,
            run_length,
            addressing,
            strict_winnability: true,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_SIZE,
            STANDARD_SIZE,
            STANDARD_RUN_LENGTH,
            AddressingMode::Bounded,
        )
    }

    pub fn with_strict_winnability(mut self, strict: bool) -> Self {
        self.strict_winnability = strict;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() || self.width > i64::MAX as usize || self.height > i64::MAX as usize {
            return Err(ConfigError::InvalidConfiguration(format!(
                "board {}x{} is too large to address",
                self.width, self.height
            )));
        }
        if self.run_length < 1 {
            return Err(ConfigError::InvalidConfiguration(
                "run length must be at least 1".to_string(),
            ));
        }
        if i64::try_from(self.run_length).is_err() {
            return Err(ConfigError::InvalidConfiguration(format!(
                "run length {} is too large",
                self.run_length
            )));
        }
        if self.strict_winnability && self.run_length > self.width.max(self.height) {
            return Err(ConfigError::InvalidConfiguration(format!(
                "run length {} cannot fit on a {}x{} board",
                self.run_length, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
