use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use minefield_core::{CellCount, Coord, GameConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Plays headless minesweeper games and appends training samples", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Board width in cells
    #[arg(long, default_value_t = GameConfig::intermediate().size.0)]
    pub width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = GameConfig::intermediate().size.1)]
    pub height: Coord,

    /// Number of mines per board
    #[arg(short, long, default_value_t = GameConfig::intermediate().mines)]
    pub mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    pub games: u32,

    /// Upper bound on cells selected for a single batch reveal
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_selection: u16,

    /// File the samples are appended to
    #[arg(short, long, default_value = "samples.txt")]
    pub output: PathBuf,
}

impl Args {
    pub fn game_config(&self) -> minefield_core::Result<GameConfig> {
        GameConfig::new((self.width, self.height), self.mines)
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
