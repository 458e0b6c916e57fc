//! Key mapping from terminal events to input tokens, and tokens to move events.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::CellIndex;

/// A raw keystroke, reduced to what the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A printable character
    Char(char),
    /// Ctrl-C: stop listening
    Interrupt,
    /// Any other key (arrows, function keys, ...)
    Other,
}

/// Event emitted for a decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A bound key was pressed; carries the target cell
    MoveEntered(CellIndex),
    /// The key is not bound to anything
    IllegalMove,
}

/// Convert a crossterm key event into a token.
///
/// Ctrl and Alt chords are never plain characters: Ctrl-C is the interrupt,
/// every other chord is `Token::Other`.
pub fn token_from_key(key: KeyEvent) -> Token {
    if should_quit(key) {
        return Token::Interrupt;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Token::Other;
    }
    match key.code {
        KeyCode::Char(c) => Token::Char(c),
        _ => Token::Other,
    }
}

/// Check if key should stop the input loop.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Table of key bindings.
///
/// The default layout mirrors the board on the left side of a QWERTY keyboard:
///
/// ```text
///  q | w | e        0 | 1 | 2
///  a | s | d   ->   3 | 4 | 5
///  z | x | c        6 | 7 | 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<char, InputEvent>,
}

const DEFAULT_LAYOUT: [char; 9] = ['q', 'w', 'e', 'a', 's', 'd', 'z', 'x', 'c'];

impl Keymap {
    /// An empty keymap; every token is illegal.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Build a keymap binding `keys[i]` to cell `i`
    pub fn from_layout(keys: [char; 9]) -> Self {
        let mut map = Self::empty();
        for (cell, key) in CellIndex::all().zip(keys) {
            map.bind(key, InputEvent::MoveEntered(cell));
        }
        map
    }

    /// Bind `key`, replacing any previous binding. Returns the old event.
    pub fn bind(&mut self, key: char, event: InputEvent) -> Option<InputEvent> {
        self.bindings.insert(key, event)
    }

    /// Look up the event for a token.
    ///
    /// Returns `None` for unbound keys and for non-character tokens.
    pub fn lookup(&self, token: Token) -> Option<InputEvent> {
        match token {
            Token::Char(c) => self.bindings.get(&c).copied(),
            Token::Interrupt | Token::Other => None,
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_layout(DEFAULT_LAYOUT)
    }
}
