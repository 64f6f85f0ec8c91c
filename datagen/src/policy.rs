use minefield_core::{Cell, Coord2, RevealEngine, hidden_safe_cells};
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Decides which cells go into the next batch reveal.
pub trait SelectionPolicy {
    fn select_cells(&mut self, engine: &RevealEngine) -> Vec<Coord2>;
}

/// Picks hidden safe cells that touch the revealed area, the moves a careful player would make.
///
/// On a board with nothing revealed yet it opens a single safe cell, preferring one with no
/// adjacent mines so the first move cascades.
#[derive(Clone, Debug)]
pub struct FrontierPolicy<R> {
    rng: R,
    max_selection: usize,
}

impl FrontierPolicy<SmallRng> {
    pub fn from_seed(seed: u64, max_selection: usize) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), max_selection)
    }
}

impl<R: Rng> FrontierPolicy<R> {
    pub fn new(rng: R, max_selection: usize) -> Self {
        Self {
            rng,
            max_selection: max_selection.max(1),
        }
    }
}

impl<R: Rng> SelectionPolicy for FrontierPolicy<R> {
    fn select_cells(&mut self, engine: &RevealEngine) -> Vec<Coord2> {
        let board = engine.board();
        let state = engine.state();

        let mut frontier: Vec<_> = hidden_safe_cells(board, state)
            .filter(|&coords| board.iter_neighbors(coords).any(|pos| state.is_revealed(pos)))
            .collect();

        if frontier.is_empty() {
            let candidates: Vec<_> = hidden_safe_cells(board, state).collect();
            let zeros: Vec<_> = candidates
                .iter()
                .copied()
                .filter(|&coords| board[coords] == Cell::Count(0))
                .collect();
            let pool = if zeros.is_empty() { &candidates } else { &zeros };
            return pool.choose(&mut self.rng).copied().into_iter().collect();
        }

        frontier.shuffle(&mut self.rng);
        frontier.truncate(self.max_selection);
        frontier
    }
}
