use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec::Vec;
use ndarray::{Array2, Zip};

use crate::*;

/// Plays one game on a shared [`Board`]: owns the [`RevealState`] and runs flood fill.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEngine {
    board: Arc<Board>,
    state: RevealState,
}

impl RevealEngine {
    pub fn new(board: impl Into<Arc<Board>>) -> Self {
        let board = board.into();
        let state = RevealState::new(board.size());
        Self { board, state }
    }

    /// Rebuilds a game from previously recorded clicks, applied in order.
    ///
    /// Clicks landing on mines never mutate state, so they are skipped like any losing reveal.
    pub fn replay(board: impl Into<Arc<Board>>, clicks: &[Coord2]) -> Result<Self> {
        let mut engine = Self::new(board);
        for &coords in clicks {
            if engine.reveal(coords)?.is_loss() {
                log::debug!("Replayed click at {:?} hit a mine, skipped", coords);
            }
        }
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shared_board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn width(&self) -> Coord {
        self.board.width()
    }

    pub fn height(&self) -> Coord {
        self.board.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.state.revealed_count()
    }

    /// Safe cells the player still has to reveal.
    pub fn remaining_safe_cells(&self) -> CellCount {
        self.board.safe_cell_count() - self.state.revealed_count()
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.state.is_revealed(coords))
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<VisibleCell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.visible_cell(coords))
    }

    /// Owned copy of what the player sees.
    pub fn player_board(&self) -> Array2<VisibleCell> {
        Zip::from(self.board.cells())
            .and(self.state.revealed_mask())
            .map_collect(|&cell, &revealed| visible(cell, revealed))
    }

    /// Owned copy of what the player sees, hidden cells are `-1`.
    pub fn player_board_raw(&self) -> Array2<i8> {
        self.player_board().mapv(VisibleCell::to_raw)
    }

    pub fn is_solved(&self) -> bool {
        is_solved(&self.board, &self.state)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.reveal_unchecked(coords))
    }

    /// Reveals every coordinate of a batch, or nothing at all if any of them holds a mine.
    pub fn reveal_all(&mut self, coords: impl IntoIterator<Item = Coord2>) -> Result<RevealOutcome> {
        let batch = coords
            .into_iter()
            .map(|coords| self.board.validate_coords(coords))
            .collect::<Result<Vec<_>>>()?;

        if let Some(&mine) = batch.iter().find(|&&coords| self.board.contains_mine(coords)) {
            log::debug!("Batch of {} cells rejected, mine at {:?}", batch.len(), mine);
            return Ok(RevealOutcome::Loss);
        }

        for coords in batch {
            self.reveal_unchecked(coords);
        }
        Ok(RevealOutcome::Revealed)
    }

    fn reveal_unchecked(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_revealed(coords) {
            return RevealOutcome::AlreadyRevealed;
        }
        if self.board.contains_mine(coords) {
            log::debug!("Reveal at {:?} hit a mine", coords);
            return RevealOutcome::Loss;
        }

        let opened = self.flood_fill(coords);
        log::trace!("Reveal at {:?} opened {} cells", coords, opened);
        RevealOutcome::Revealed
    }

    /// Breadth-first disclosure from a hidden, non-mine origin.
    ///
    /// Zero cells expand into all their neighbours, numbered cells only reveal themselves.
    /// Cells are marked as they are queued so each one enters the queue at most once.
    fn flood_fill(&mut self, origin: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::new();

        if self.state.mark(origin) {
            opened += 1;
            to_visit.push_back(origin);
        }

        while let Some(visit_coords) = to_visit.pop_front() {
            if !self.board[visit_coords].is_zero() {
                continue;
            }

            for neighbor in self.board.iter_neighbors(visit_coords) {
                // a zero cell has no mine neighbours, so nothing queued here is a mine
                if self.state.mark(neighbor) {
                    opened += 1;
                    to_visit.push_back(neighbor);
                }
            }
        }

        opened
    }

    fn visible_cell(&self, coords: Coord2) -> VisibleCell {
        visible(self.board[coords], self.state.is_revealed(coords))
    }
}

fn visible(cell: Cell, revealed: bool) -> VisibleCell {
    match (revealed, cell) {
        (true, Cell::Count(count)) => VisibleCell::Revealed(count),
        _ => VisibleCell::Hidden,
    }
}
