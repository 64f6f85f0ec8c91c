use anyhow::{Result, bail};
use minefield_core::{GameConfig, LayoutGenerator, RevealEngine, RevealOutcome};

use crate::policy::SelectionPolicy;
use crate::sample::TrainingSample;
use crate::selection::Selection;
use crate::writer::SampleWriter;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameReport {
    pub batches: u32,
    pub samples: u64,
    pub solved: bool,
}

/// Plays `engine` to the end, recording one sample per successful batch reveal.
pub fn play_game(
    engine: &mut RevealEngine,
    policy: &mut impl SelectionPolicy,
    writer: &mut impl SampleWriter,
) -> Result<GameReport> {
    let mut report = GameReport::default();
    let mut selection = Selection::new(engine.size());

    while !engine.is_solved() {
        let cells = policy.select_cells(engine);
        if cells.is_empty() {
            log::warn!("Policy produced no selection on an unsolved board, giving up");
            break;
        }
        for coords in cells {
            selection.select(coords)?;
        }

        let sample = TrainingSample::capture(engine, &selection)?;
        match selection.reveal_selected(engine)? {
            RevealOutcome::Loss => {
                log::warn!("Selection of {} cells contained a mine", selection.len());
                return Ok(report);
            }
            _ => {
                writer.write_sample(&sample)?;
                report.batches += 1;
                report.samples += 1;
                log::debug!(
                    "Batch {} done, {} cells revealed, {} safe cells left",
                    report.batches,
                    engine.revealed_count(),
                    engine.remaining_safe_cells()
                );
            }
        }
    }

    report.solved = engine.is_solved();
    Ok(report)
}

/// Generates `games` boards and plays each of them, flushing the writer at the end.
pub fn run_games(
    config: GameConfig,
    games: u32,
    generator: &mut impl LayoutGenerator,
    policy: &mut impl SelectionPolicy,
    writer: &mut impl SampleWriter,
) -> Result<Vec<GameReport>> {
    let mut reports = Vec::with_capacity(games as usize);

    for game in 1..=games {
        let board = generator.generate(config)?;
        let mut engine = RevealEngine::new(board);
        let report = play_game(&mut engine, policy, writer)?;
        log::info!(
            "Game {}/{}: {} samples, solved: {}",
            game,
            games,
            report.samples,
            report.solved
        );
        reports.push(report);
    }

    writer.flush()?;
    if reports.iter().any(|report| !report.solved) {
        bail!("some games ended before the board was solved");
    }
    Ok(reports)
}
