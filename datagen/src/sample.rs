use std::fmt;

use minefield_core::{GameError, RevealEngine};
use ndarray::{Array2, ArrayView2};

use crate::selection::Selection;

/// Added to every visible value so the hidden sentinel `-1` encodes as `1` and counts as `2..=10`.
pub const VALUE_SHIFT: i8 = 2;

/// One recorded move: what the player saw and which cells were picked for the batch reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSample {
    visible: Array2<i8>,
    selection: Array2<bool>,
}

impl TrainingSample {
    /// Captures the visible board as it stands before `selection` is revealed.
    pub fn capture(engine: &RevealEngine, selection: &Selection) -> minefield_core::Result<Self> {
        if engine.size() != selection.size() {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self {
            visible: engine.player_board_raw(),
            selection: selection.mask().clone(),
        })
    }

    pub fn visible(&self) -> ArrayView2<'_, i8> {
        self.visible.view()
    }

    pub fn selection(&self) -> ArrayView2<'_, bool> {
        self.selection.view()
    }

    pub fn encoded_visible(&self) -> Array2<i8> {
        self.visible.mapv(|value| value + VALUE_SHIFT)
    }

    pub fn encoded_selection(&self) -> Array2<u8> {
        self.selection.mapv(u8::from)
    }
}

fn write_block<T: fmt::Display>(f: &mut fmt::Formatter<'_>, block: &Array2<T>) -> fmt::Result {
    for row in block.rows() {
        let mut first = true;
        for value in row {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Two row-major blocks separated by a blank line: shifted visible values, then the selection mask.
impl fmt::Display for TrainingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.encoded_visible())?;
        writeln!(f)?;
        write_block(f, &self.encoded_selection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minefield_core::Board;

    #[test]
    fn sample_renders_shifted_board_and_mask() {
        let board = Board::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        let mut engine = RevealEngine::new(board);
        engine.reveal((1, 0)).unwrap();
        let mut selection = Selection::new(engine.size());
        selection.select((0, 1)).unwrap();

        let sample = TrainingSample::capture(&engine, &selection).unwrap();

        assert_eq!(sample.to_string(), "1 3 1\n1 1 1\n\n0 0 0\n1 0 0\n");
    }

    #[test]
    fn fully_revealed_zero_board_encodes_as_twos() {
        let board = Board::from_mine_coords((2, 2), &[]).unwrap();
        let mut engine = RevealEngine::new(board);
        engine.reveal((0, 0)).unwrap();

        let sample = TrainingSample::capture(&engine, &Selection::new((2, 2))).unwrap();

        assert!(sample.encoded_visible().iter().all(|&value| value == 2));
        assert!(sample.encoded_selection().iter().all(|&value| value == 0));
    }

    #[test]
    fn capture_rejects_mismatched_selection() {
        let engine = RevealEngine::new(Board::from_mine_coords((3, 3), &[]).unwrap());

        assert_eq!(
            TrainingSample::capture(&engine, &Selection::new((3, 2))),
            Err(GameError::InvalidBoardShape)
        );
    }
}
