//! Players module - the pair of players and whose turn it is
//!
//! Slot 0 always holds the player to move; `change_turn` swaps the slots.

use crate::cell_set::CellSet;
use crate::player::Player;
use crate::types::{CellIndex, Mark, BOARD_CELLS, WIN_LINES};

/// Board contents as a mapping from cell index to mark
pub type BoardMarks = [Mark; BOARD_CELLS as usize];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    players: [Player; 2],
}

impl Players {
    /// `first` moves first.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
        }
    }

    fn current(&self) -> &Player {
        &self.players[0]
    }

    pub fn change_turn(&mut self) {
        self.players.swap(0, 1);
    }

    pub fn record_move(&mut self, cell: CellIndex) {
        self.players[0].record_move(cell);
    }

    /// Name of the player to move.
    ///
    /// Only the identity is exposed, never the `Player` itself.
    pub fn current_player(&self) -> &str {
        self.current().name()
    }

    pub fn current_mark(&self) -> Mark {
        self.current().mark()
    }

    pub fn total_moves_made(&self) -> usize {
        self.players.iter().map(Player::number_of_moves).sum()
    }

    /// True if either player holds `cell`
    pub fn is_claimed(&self, cell: CellIndex) -> bool {
        self.players.iter().any(|p| p.has_claimed(cell))
    }

    /// Every claimed cell, whoever holds it
    pub fn claimed_cells(&self) -> CellSet {
        let [a, b] = &self.players;
        debug_assert!(a.claimed().is_disjoint(b.claimed()));
        a.claimed().union(b.claimed())
    }

    /// Check the current player's cells against every win line.
    ///
    /// Evaluated right after the current player moves, before the turn swap.
    pub fn has_won(&self) -> bool {
        let claimed = self.current().claimed();
        WIN_LINES
            .iter()
            .any(|line| claimed.is_superset(CellSet::from_indices(line)))
    }

    /// Merge both players' moves into one board
    pub fn moves_made(&self) -> BoardMarks {
        let mut board = [Mark::Empty; BOARD_CELLS as usize];
        for player in &self.players {
            for (cell, mark) in player.moves_made() {
                board[cell.as_usize()] = mark;
            }
        }
        board
    }

    /// Iterate players starting with the one to move
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: u8) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    fn pair() -> Players {
        Players::new(Player::new("ada", Mark::X), Player::new("bob", Mark::O))
    }

    #[test]
    fn change_turn_twice_restores_order() {
        let mut players = pair();
        assert_eq!(players.current_player(), "ada");
        players.change_turn();
        assert_eq!(players.current_player(), "bob");
        assert_eq!(players.current_mark(), Mark::O);
        players.change_turn();
        assert_eq!(players.current_player(), "ada");
    }

    #[test]
    fn record_move_goes_to_current_player() {
        let mut players = pair();
        players.record_move(cell(0));
        players.change_turn();
        players.record_move(cell(4));

        let board = players.moves_made();
        assert_eq!(board[0], Mark::X);
        assert_eq!(board[4], Mark::O);
        assert_eq!(board[8], Mark::Empty);
        assert_eq!(players.total_moves_made(), 2);
        assert!(players.is_claimed(cell(0)));
        assert!(players.is_claimed(cell(4)));
        assert!(!players.is_claimed(cell(1)));
        assert_eq!(players.claimed_cells(), CellSet::from_indices(&[0, 4]));
    }

    #[test]
    fn has_won_detects_every_line() {
        for line in WIN_LINES {
            let mut players = pair();
            for i in line {
                players.record_move(cell(i));
            }
            assert!(players.has_won(), "line {line:?} should win");
        }
    }

    #[test]
    fn has_won_only_checks_current_player() {
        let mut players = pair();
        for i in [0, 1, 2] {
            players.record_move(cell(i));
        }
        players.change_turn();
        assert!(!players.has_won());
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let mut players = pair();
        players.record_move(cell(0));
        players.record_move(cell(4));
        players.record_move(cell(7));
        assert!(!players.has_won());
    }
}
