//! Terminal input module (game-facing).
//!
//! This module is intentionally independent of the game rules. It turns
//! `crossterm` key events into [`Token`]s, decodes them through a [`Keymap`],
//! and dispatches the resulting [`InputEvent`]s to an [`InputHandler`].

pub mod controller;
pub mod map;
pub mod source;

pub use tui_tictactoe_types as types;

pub use controller::{InputController, InputHandler};
pub use map::{should_quit, token_from_key, InputEvent, Keymap, Token};
pub use source::{KeyboardSource, ScriptedSource, TokenSource};
