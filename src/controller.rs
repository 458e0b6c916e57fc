//! Game controller: wires input events to the game and the game to a renderer.
//!
//! This is the boundary where rejected moves become on-screen notices. Only
//! renderer I/O errors leave `start`.

use anyhow::Result;
use tracing::warn;

use crate::config::{ConfigError, GameConfig};
use crate::core::Game;
use crate::input::{InputController, InputHandler, Token, TokenSource};
use crate::term::Renderer;
use crate::types::{CellIndex, Flow};

/// Notice shown for keys that are not bound to a cell
pub const ILLEGAL_MOVE_NOTICE: &str = "Illegal move entered!";

pub struct GameController<R> {
    input: InputController,
    session: Session<R>,
}

/// Handler half of the controller, split out so `input` can borrow it mutably.
struct Session<R> {
    game: Game,
    renderer: R,
    exit_on_game_over: bool,
}

impl<R: Renderer> GameController<R> {
    pub fn new(game: Game, input: InputController, renderer: R) -> Self {
        Self {
            input,
            session: Session {
                game,
                renderer,
                exit_on_game_over: true,
            },
        }
    }

    /// Build a controller from `config`. Fails if the players are invalid.
    pub fn from_config(config: &GameConfig, renderer: R) -> Result<Self, ConfigError> {
        let game = config.build_game()?;
        Ok(Self::new(game, config.build_input(), renderer)
            .with_exit_on_game_over(config.exit_on_game_over))
    }

    pub fn with_exit_on_game_over(mut self, exit: bool) -> Self {
        self.session.exit_on_game_over = exit;
        self
    }

    pub fn game(&self) -> &Game {
        &self.session.game
    }

    pub fn renderer(&self) -> &R {
        &self.session.renderer
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Draw the empty board, then handle input until quit, game over, or the
    /// source ends.
    pub fn start<S: TokenSource>(&mut self, source: &mut S) -> Result<()> {
        let status = self.session.game.status();
        self.session.renderer.render(&status)?;
        self.input.run(source, &mut self.session)
    }

    /// Feed a single token, as if it had come from the input source.
    pub fn handle_token(&mut self, token: Token) -> Result<Flow> {
        self.input.dispatch(token, &mut self.session)
    }
}

impl<R: Renderer> InputHandler for Session<R> {
    fn move_entered(&mut self, cell: CellIndex) -> Result<Flow> {
        if let Err(err) = self.game.make_move(cell) {
            warn!(%cell, %err, "move rejected");
            self.renderer.notice(&format!("Move rejected: {err}"))?;
            return Ok(Flow::Continue);
        }

        let status = self.game.status();
        self.renderer.render(&status)?;

        if status.is_game_over && self.exit_on_game_over {
            return Ok(Flow::Stop);
        }
        Ok(Flow::Continue)
    }

    fn illegal_move(&mut self, _token: Token) -> Result<Flow> {
        self.renderer.notice(ILLEGAL_MOVE_NOTICE)?;
        Ok(Flow::Continue)
    }
}
