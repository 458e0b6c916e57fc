//! Terminal rendering module.
//!
//! Two layers:
//! - [`game_view`]: pure text layout of a [`core::GameStatus`]
//! - [`renderer`]: the [`Renderer`] trait and a crossterm-backed implementation
//!   that writes frames to any `io::Write`

pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use game_view::{announcement, render_lines, render_row, render_text, CELL_SEPARATOR};
pub use renderer::{encode_frame_into, Renderer, TerminalRenderer};
