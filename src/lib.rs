//! TUI tic-tac-toe (workspace facade crate).
//!
//! Re-exports the `tui_tictactoe::{core,input,term,types}` API from the
//! dedicated crates under `crates/`, and owns the pieces that tie them
//! together: [`config::GameConfig`] and [`controller::GameController`].

pub mod config;
pub mod controller;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub use config::{ConfigError, GameConfig, PlayerConfig};
pub use controller::GameController;
