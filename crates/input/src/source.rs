//! Token sources: where keystrokes come from.

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{token_from_key, Token};

/// A stream of input tokens. `Ok(None)` means the stream has ended.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Option<Token>>;
}

/// Blocking reader over crossterm key events.
///
/// Expects the terminal to already be in raw mode. Only key presses produce
/// tokens; releases, repeats, resizes and mouse events are skipped.
#[derive(Debug, Default)]
pub struct KeyboardSource;

impl KeyboardSource {
    pub fn new() -> Self {
        Self
    }
}

impl TokenSource for KeyboardSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(token_from_key(key)));
                }
            }
        }
    }
}

/// Replays a fixed sequence of tokens, then ends.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    tokens: VecDeque<Token>,
}

impl ScriptedSource {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// One `Token::Char` per character of `keys`
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Token::Char))
    }
}

impl TokenSource for ScriptedSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.tokens.pop_front())
    }
}
