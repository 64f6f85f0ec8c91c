use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement: samples cells uniformly and rejects duplicates until every mine is placed.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator<R> {
    rng: R,
}

impl RandomLayoutGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomLayoutGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LayoutGenerator for RandomLayoutGenerator<R> {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        let (width, height) = config.size;
        let mut taken: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines = Vec::with_capacity(config.mines.into());
        let mut rejected = 0usize;

        while mines.len() < usize::from(config.mines) {
            let coords = (
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            let slot = &mut taken[coords.to_nd_index()];
            if *slot {
                rejected += 1;
                continue;
            }
            *slot = true;
            mines.push(coords);
        }

        log::debug!(
            "Generated {}x{} layout with {} mines ({} duplicate samples rejected)",
            width,
            height,
            config.mines,
            rejected
        );
        Board::with_mines(config.size, &mines)
    }
}
