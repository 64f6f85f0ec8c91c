use minefield_core::{
    Coord2, GameError, RevealEngine, RevealOutcome, ToNdIndex, in_bounds, iter_coords,
};
use ndarray::Array2;

/// Cells marked for the next batch reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    size: Coord2,
    mask: Array2<bool>,
}

impl Selection {
    pub fn new(size: Coord2) -> Self {
        Self {
            size,
            mask: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    /// Flips the selection of `coords`, returning whether it is now selected.
    pub fn toggle(&mut self, coords: Coord2) -> minefield_core::Result<bool> {
        let slot = self.slot(coords)?;
        *slot = !*slot;
        Ok(*slot)
    }

    pub fn select(&mut self, coords: Coord2) -> minefield_core::Result<()> {
        *self.slot(coords)? = true;
        Ok(())
    }

    pub fn is_selected(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size) && self.mask[coords.to_nd_index()]
    }

    pub fn len(&self) -> usize {
        self.mask.iter().filter(|&&selected| selected).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.mask.iter().any(|&selected| selected)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size).filter(|&coords| self.mask[coords.to_nd_index()])
    }

    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    pub fn clear(&mut self) {
        self.mask.fill(false);
    }

    /// Batch-reveals every selected cell; the selection is kept when the batch contains a mine.
    pub fn reveal_selected(
        &mut self,
        engine: &mut RevealEngine,
    ) -> minefield_core::Result<RevealOutcome> {
        if engine.size() != self.size {
            return Err(GameError::InvalidBoardShape);
        }

        let outcome = engine.reveal_all(self.coords())?;
        if !outcome.is_loss() {
            self.clear();
        }
        Ok(outcome)
    }

    fn slot(&mut self, coords: Coord2) -> minefield_core::Result<&mut bool> {
        if !in_bounds(coords, self.size) {
            return Err(GameError::OutOfBounds);
        }
        Ok(&mut self.mask[coords.to_nd_index()])
    }
}
