//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tic-tac-toe rules and state management.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: The same move sequence always yields the same game
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`cell_set`]: 9-bit set of claimed cells
//! - [`player`]: A named player, their mark, and the cells they hold
//! - [`players`]: The two players, turn order, and win detection
//! - [`game`]: The move state machine and rejected-move errors
//! - [`status`]: Read-only snapshot handed to renderers
//!
//! # Game Rules
//!
//! - Players alternate, the first player given to [`Players::new`] moves first
//! - A cell can be claimed once; claiming it again is [`GameError::InvalidMove`]
//! - Three in a row (row, column, or diagonal) wins immediately
//! - Nine moves without a line is a draw
//! - Any move after the game ends is [`GameError::IllegalState`]
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{Game, Player, Players};
//! use tui_tictactoe_types::{CellIndex, Mark};
//!
//! let players = Players::new(Player::new("ada", Mark::X), Player::new("bob", Mark::O));
//! let mut game = Game::new(players);
//!
//! for i in [0, 3, 1, 4, 2] {
//!     game.make_move(CellIndex::new(i).unwrap()).unwrap();
//! }
//!
//! let status = game.status();
//! assert!(status.is_game_over);
//! assert_eq!(status.winner.as_deref(), Some("ada"));
//! ```

pub mod cell_set;
pub mod game;
pub mod player;
pub mod players;
pub mod status;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use cell_set::CellSet;
pub use game::{Game, GameError};
pub use player::{Player, PlayerMoves};
pub use players::{BoardMarks, Players};
pub use status::GameStatus;
