//! Game module - the turn-taking state machine
//!
//! A move is validated, recorded for the current player, then checked for a
//! win (game over, turns stay put), a full board (draw), or otherwise the turn
//! passes to the other player.

use thiserror::Error;
use tracing::{debug, info};

use crate::players::Players;
use crate::status::GameStatus;
use crate::types::CellIndex;

/// Reasons a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell {cell} is already taken")]
    InvalidMove { cell: CellIndex },
    #[error("the game is already over")]
    IllegalState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    InProgress,
    Won {
        winner: String,
    },
    Drawn,
}

#[derive(Debug, Clone)]
pub struct Game {
    players: Players,
    phase: Phase,
}

impl Game {
    pub fn new(players: Players) -> Self {
        Self {
            players,
            phase: Phase::InProgress,
        }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self.phase, Phase::InProgress)
    }

    pub fn winner(&self) -> Option<&str> {
        match &self.phase {
            Phase::Won { winner } => Some(winner),
            _ => None,
        }
    }

    /// Play `cell` for the current player.
    pub fn make_move(&mut self, cell: CellIndex) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::IllegalState);
        }
        if self.players.is_claimed(cell) {
            return Err(GameError::InvalidMove { cell });
        }

        self.players.record_move(cell);
        debug!(
            player = self.players.current_player(),
            mark = %self.players.current_mark(),
            %cell,
            "move recorded"
        );

        if self.players.has_won() {
            let winner = self.players.current_player().to_string();
            info!(%winner, "game won");
            self.phase = Phase::Won { winner };
            return Ok(());
        }

        if self.players.claimed_cells().is_full() {
            info!("game drawn");
            self.phase = Phase::Drawn;
            return Ok(());
        }

        self.players.change_turn();
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            moves: self.players.moves_made(),
            current_player: self.players.current_player().to_string(),
            is_game_over: self.is_game_over(),
            winner: self.winner().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::types::Mark;

    fn cell(i: u8) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    fn new_game() -> Game {
        Game::new(Players::new(
            Player::new("ada", Mark::X),
            Player::new("bob", Mark::O),
        ))
    }

    fn play(game: &mut Game, cells: &[u8]) {
        for &i in cells {
            game.make_move(cell(i)).unwrap();
        }
    }

    #[test]
    fn new_game_is_in_progress() {
        let game = new_game();
        let status = game.status();
        assert!(!game.is_game_over());
        assert_eq!(status.current_player, "ada");
        assert!(!status.is_game_over);
        assert_eq!(status.winner, None);
        assert!(status.moves.iter().all(|&m| m == Mark::Empty));
    }

    #[test]
    fn turns_alternate() {
        let mut game = new_game();
        play(&mut game, &[4]);
        assert_eq!(game.status().current_player, "bob");
        play(&mut game, &[0]);
        assert_eq!(game.status().current_player, "ada");
    }

    #[test]
    fn row_win_ends_game_without_swapping_turn() {
        let mut game = new_game();
        // X: 0 1 2, O: 3 4
        play(&mut game, &[0, 3, 1, 4, 2]);

        let status = game.status();
        assert!(status.is_game_over);
        assert_eq!(status.winner.as_deref(), Some("ada"));
        assert_eq!(status.current_player, "ada");
        assert!(game.players().has_won());
        assert_eq!(game.winner(), Some("ada"));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let mut game = new_game();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        let status = game.status();
        assert!(status.is_game_over);
        assert_eq!(status.winner, None);
        assert!(status.is_draw());
        assert!(game.players().claimed_cells().is_full());
    }

    #[test]
    fn win_on_last_move_beats_draw() {
        let mut game = new_game();
        // X: 0 2 4 5 8 (diagonal 0-4-8 on the ninth move), O: 1 3 6 7
        play(&mut game, &[0, 1, 2, 3, 4, 6, 5, 7, 8]);
        assert_eq!(game.winner(), Some("ada"));
    }

    #[test]
    fn claimed_cell_is_rejected_without_state_change() {
        let mut game = new_game();
        play(&mut game, &[4]);
        let before = game.status();

        assert_eq!(
            game.make_move(cell(4)),
            Err(GameError::InvalidMove { cell: cell(4) })
        );
        assert_eq!(game.status(), before);
        assert_eq!(game.players().total_moves_made(), 1);
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut game = new_game();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.status();

        assert_eq!(game.make_move(cell(8)), Err(GameError::IllegalState));
        // Game over wins over an already-claimed cell.
        assert_eq!(game.make_move(cell(0)), Err(GameError::IllegalState));
        assert_eq!(game.status(), before);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GameError::InvalidMove { cell: cell(7) }.to_string(),
            "cell 7 is already taken"
        );
        assert_eq!(GameError::IllegalState.to_string(), "the game is already over");
    }
}
