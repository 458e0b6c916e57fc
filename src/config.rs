//! Game configuration.
//!
//! Everything is fixed at startup; there are no flags, files, or environment
//! variables. `GameConfig::default()` is what the binary plays.

use thiserror::Error;

use crate::core::{Game, Player, Players};
use crate::input::{InputController, Keymap};
use crate::types::Mark;

/// A player setup that cannot make a playable game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player {name} has no mark")]
    NoMark { name: String },
    #[error("both players use mark {0}")]
    SharedMark(Mark),
    #[error("both players are named {0}")]
    SharedName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    pub mark: Mark,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Moves first
    pub first: PlayerConfig,
    pub second: PlayerConfig,
    pub keymap: Keymap,
    /// Stop reading input once the result has been shown.
    pub exit_on_game_over: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: PlayerConfig::new("bittu", Mark::X),
            second: PlayerConfig::new("riya", Mark::O),
            keymap: Keymap::default(),
            exit_on_game_over: true,
        }
    }
}

impl GameConfig {
    pub fn with_players(mut self, first: PlayerConfig, second: PlayerConfig) -> Self {
        self.first = first;
        self.second = second;
        self
    }

    pub fn with_exit_on_game_over(mut self, exit: bool) -> Self {
        self.exit_on_game_over = exit;
        self
    }

    /// Check that the two players are distinct and both have a real mark.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in [&self.first, &self.second] {
            if player.mark == Mark::Empty {
                return Err(ConfigError::NoMark {
                    name: player.name.clone(),
                });
            }
        }
        if self.first.mark == self.second.mark {
            return Err(ConfigError::SharedMark(self.first.mark));
        }
        if self.first.name == self.second.name {
            return Err(ConfigError::SharedName(self.first.name.clone()));
        }
        Ok(())
    }

    pub fn build_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        Ok(Game::new(Players::new(
            Player::new(self.first.name.clone(), self.first.mark),
            Player::new(self.second.name.clone(), self.second.mark),
        )))
    }

    pub fn build_input(&self) -> InputController {
        InputController::new(self.keymap.clone())
    }
}
