use crate::players::BoardMarks;
use crate::types::{Mark, BOARD_CELLS, BOARD_SIDE};

/// Read-only snapshot of a game, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub moves: BoardMarks,
    pub current_player: String,
    pub is_game_over: bool,
    pub winner: Option<String>,
}

impl GameStatus {
    /// Board rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.moves.chunks(BOARD_SIDE as usize)
    }

    pub fn is_draw(&self) -> bool {
        self.is_game_over && self.winner.is_none()
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self {
            moves: [Mark::Empty; BOARD_CELLS as usize],
            current_player: String::new(),
            is_game_over: false,
            winner: None,
        }
    }
}
