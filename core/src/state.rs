use core::num::Saturating;
use ndarray::Array2;

use crate::*;

/// Per-game record of disclosed cells. Monotonic: a revealed cell never becomes hidden again.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    size: Coord2,
    revealed: Array2<bool>,
    revealed_count: Saturating<CellCount>,
}

impl RevealState {
    pub fn new(size: Coord2) -> Self {
        Self {
            size,
            revealed: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    /// Marks `coords` revealed, returns `true` only when the cell was hidden before.
    pub(crate) fn mark(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.revealed[coords.to_nd_index()];
        if *cell {
            return false;
        }
        *cell = true;
        self.revealed_count += 1;
        true
    }

    pub(crate) fn revealed_mask(&self) -> &Array2<bool> {
        &self.revealed
    }

    pub fn iter_revealed(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size).filter(|&coords| self.is_revealed(coords))
    }
}
