//! Compact set of board cells.
//!
//! A 9-cell board fits in the low bits of a `u16`, so set operations are single
//! bit operations and iteration is always in ascending cell order.

use crate::types::{CellIndex, BOARD_CELLS};

/// Bit mask covering every valid cell
const FULL_MASK: u16 = (1 << BOARD_CELLS) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet {
    bits: u16,
}

impl CellSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from raw cell indices. Out-of-range values are dropped.
    pub fn from_indices(indices: &[u8]) -> Self {
        let mut set = Self::new();
        for &i in indices {
            if let Some(cell) = CellIndex::new(i) {
                set.insert(cell);
            }
        }
        set
    }

    #[inline(always)]
    fn bit(cell: CellIndex) -> u16 {
        1 << cell.get()
    }

    /// Add a cell. Returns false if it was already present.
    pub fn insert(&mut self, cell: CellIndex) -> bool {
        let fresh = !self.contains(cell);
        self.bits |= Self::bit(cell);
        fresh
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.bits & Self::bit(cell) != 0
    }

    /// True if every cell of `other` is also in `self`
    pub fn is_superset(&self, other: CellSet) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn is_disjoint(&self, other: CellSet) -> bool {
        self.bits & other.bits == 0
    }

    pub fn union(&self, other: CellSet) -> CellSet {
        CellSet {
            bits: self.bits | other.bits,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn is_full(&self) -> bool {
        self.bits == FULL_MASK
    }

    /// Iterate cells in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(move |&cell| self.contains(cell))
    }
}
