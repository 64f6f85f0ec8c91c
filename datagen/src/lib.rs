//! Headless training-data collection: plays generated boards with a selection policy and
//! appends one sample per batch reveal.

use anyhow::{Context, Result};
use minefield_core::RandomLayoutGenerator;

pub mod config;
pub mod policy;
pub mod sample;
pub mod selection;
pub mod session;
pub mod writer;

use config::Args;
use policy::FrontierPolicy;
use writer::{FileSampleWriter, SampleWriter};

pub fn run(args: &Args) -> Result<()> {
    let config = args.game_config().context("invalid board configuration")?;
    let seed = args.seed_or_random();
    log::info!(
        "Collecting {} games on {}x{} with {} mines, seed {}",
        args.games,
        config.size.0,
        config.size.1,
        config.mines,
        seed
    );

    let mut generator = RandomLayoutGenerator::from_seed(seed);
    let mut policy = FrontierPolicy::from_seed(seed.wrapping_add(1), args.max_selection.into());
    let mut writer = FileSampleWriter::open(&args.output)?;

    session::run_games(config, args.games, &mut generator, &mut policy, &mut writer)?;

    log::info!(
        "Appended {} samples to {}",
        writer.count(),
        writer.path().display()
    );
    Ok(())
}
