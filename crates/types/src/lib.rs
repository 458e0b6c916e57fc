//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input decoding, terminal rendering).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid addressed by a single row-major index:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIDE` | 3 | Cells per row and per column |
//! | `BOARD_CELLS` | 9 | Total cells; a game ends in a draw after 9 moves |
//! | `WIN_LINES` | 8 triples | 3 rows, 3 columns, 2 diagonals |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{CellIndex, Mark, BOARD_CELLS, WIN_LINES};
//!
//! let center = CellIndex::new(4).unwrap();
//! assert_eq!(center.get(), 4);
//! assert!(CellIndex::new(9).is_none());
//!
//! assert_eq!(Mark::X.as_char(), 'X');
//! assert_eq!(Mark::Empty.as_char(), ' ');
//!
//! assert_eq!(BOARD_CELLS, 9);
//! assert_eq!(WIN_LINES.len(), 8);
//! ```

use std::fmt;

/// Cells per row and per column
pub const BOARD_SIDE: u8 = 3;

/// Total number of cells on the board
pub const BOARD_CELLS: u8 = BOARD_SIDE * BOARD_SIDE;

/// The eight winning lines as row-major cell indices.
pub const WIN_LINES: [[u8; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A position on the board, guaranteed to be in `0..BOARD_CELLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, returning `None` when out of range
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::CellIndex;
    ///
    /// assert_eq!(CellIndex::new(0).map(|c| c.get()), Some(0));
    /// assert_eq!(CellIndex::new(8).map(|c| c.get()), Some(8));
    /// assert_eq!(CellIndex::new(9), None);
    /// ```
    pub const fn new(index: u8) -> Option<Self> {
        if index < BOARD_CELLS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Iterate all cells in row-major order
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..BOARD_CELLS).map(CellIndex)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The symbol occupying a cell
///
/// - **X**: first player's mark
/// - **O**: second player's mark
/// - **Empty**: unclaimed cell, rendered as a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    X,
    O,
    #[default]
    Empty,
}

impl Mark {
    /// Character used when drawing the board
    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Whether an input loop should keep going after handling a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn is_stop(&self) -> bool {
        matches!(self, Flow::Stop)
    }
}
