//! Player module - a named participant and the cells they have claimed

use arrayvec::ArrayVec;

use crate::cell_set::CellSet;
use crate::types::{CellIndex, Mark, BOARD_CELLS};

/// Moves made by a single player, sorted by cell index
pub type PlayerMoves = ArrayVec<(CellIndex, Mark), { BOARD_CELLS as usize }>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
    claimed: CellSet,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            claimed: CellSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn claimed(&self) -> CellSet {
        self.claimed
    }

    pub fn has_claimed(&self, cell: CellIndex) -> bool {
        self.claimed.contains(cell)
    }

    /// Claim a cell for this player.
    ///
    /// No duplicate check: `Game` rejects already-claimed cells before calling.
    pub fn record_move(&mut self, cell: CellIndex) {
        self.claimed.insert(cell);
    }

    /// (cell, mark) pairs for every claimed cell, in ascending cell order
    pub fn moves_made(&self) -> PlayerMoves {
        self.claimed.iter().map(|cell| (cell, self.mark)).collect()
    }

    pub fn number_of_moves(&self) -> usize {
        self.claimed.len()
    }
}
