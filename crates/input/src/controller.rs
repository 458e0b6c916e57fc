//! Input controller: decodes tokens through a keymap and dispatches events.
//!
//! Dispatch is synchronous. The handler is passed in by the caller for each
//! call, so the controller holds no reference to whoever consumes its events.

use anyhow::Result;
use tracing::debug;

use crate::map::{InputEvent, Keymap, Token};
use crate::source::TokenSource;
use crate::types::{CellIndex, Flow};

/// Consumer of input events.
pub trait InputHandler {
    fn move_entered(&mut self, cell: CellIndex) -> Result<Flow>;

    fn illegal_move(&mut self, token: Token) -> Result<Flow>;
}

#[derive(Debug, Clone)]
pub struct InputController {
    keymap: Keymap,
    listening: bool,
}

impl InputController {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            listening: true,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Stop emitting events. Every later token is ignored.
    pub fn stop(&mut self) {
        self.listening = false;
    }

    /// Decode one token and emit at most one event to `handler`.
    pub fn dispatch<H: InputHandler>(&mut self, token: Token, handler: &mut H) -> Result<Flow> {
        if !self.listening {
            return Ok(Flow::Stop);
        }
        if token == Token::Interrupt {
            debug!("interrupt received, input stopped");
            self.stop();
            return Ok(Flow::Stop);
        }

        let flow = match self.keymap.lookup(token) {
            Some(InputEvent::MoveEntered(cell)) => {
                debug!(?token, %cell, "move entered");
                handler.move_entered(cell)?
            }
            Some(InputEvent::IllegalMove) | None => {
                debug!(?token, "illegal move");
                handler.illegal_move(token)?
            }
        };

        if flow.is_stop() {
            self.stop();
        }
        Ok(flow)
    }

    /// Pump tokens from `source` until stopped or the source runs dry.
    pub fn run<S, H>(&mut self, source: &mut S, handler: &mut H) -> Result<()>
    where
        S: TokenSource,
        H: InputHandler,
    {
        while self.listening {
            let Some(token) = source.next_token()? else {
                break;
            };
            self.dispatch(token, handler)?;
        }
        Ok(())
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(Keymap::default())
    }
}
