#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use state::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod state;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a validated config; dimensions must be non-zero and at least one cell must stay safe.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        if self.mines >= self.total_cells() {
            return Err(ConfigError::TooManyMines.into());
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::intermediate()
    }
}

/// Immutable mine layout with precomputed adjacency counts.
///
/// Cells are stored row-major, cell `(x, y)` sits at flat index `y * width + x`.
/// Serialized as its mine mask; deserializing rebuilds the counts and rejects invalid layouts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineMask", into = "MineMask")]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
}

/// Wire form of a [`Board`]: a `(height, width)` grid where `true` marks a mine.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct MineMask {
    mines: Array2<bool>,
}

impl TryFrom<MineMask> for Board {
    type Error = GameError;

    fn try_from(mask: MineMask) -> Result<Self> {
        Self::from_mine_mask(&mask.mines)
    }
}

impl From<Board> for MineMask {
    fn from(board: Board) -> Self {
        Self {
            mines: board.cells.mapv(Cell::is_mine),
        }
    }
}

impl Board {
    /// Builds a board from an explicit list of mines; duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new_unchecked(size, 0).validate()?;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    /// Builds a board from a `(height, width)` mask where `true` marks a mine.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size: Coord2 = (
            cols.try_into().map_err(|_| GameError::InvalidBoardShape)?,
            rows.try_into().map_err(|_| GameError::InvalidBoardShape)?,
        );

        let mines: Vec<Coord2> = iter_coords(size)
            .filter(|&coords| mine_mask[coords.to_nd_index()])
            .collect();

        Self::with_mines(size, &mines)
    }

    /// Places `mines` (distinct, in bounds) and increments the count of every non-mine neighbour.
    pub(crate) fn with_mines(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let mine_count: CellCount = mines
            .len()
            .try_into()
            .map_err(|_| ConfigError::TooManyMines)?;
        GameConfig::new(size, mine_count)?;

        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in mines {
            cells[coords.to_nd_index()] = Cell::Mine;
        }
        for &coords in mines {
            for neighbor in NeighborIter::new(coords, size) {
                if let Cell::Count(count) = &mut cells[neighbor.to_nd_index()] {
                    *count += 1;
                }
            }
        }

        Ok(Self {
            size,
            cells,
            mine_count,
        })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Board dimensions as `(width, height)`.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    /// Cells without a mine; never zero since a valid board keeps at least one safe cell.
    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&coords| self.contains_mine(coords))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Owned copy of the layout: mines are `-1`, every other cell holds its count.
    pub fn to_raw_grid(&self) -> Array2<i8> {
        self.cells.mapv(Cell::to_raw)
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    AlreadyRevealed,
    Revealed,
    Loss,
}

impl RevealOutcome {
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn brute_force_count(board: &Board, coords: Coord2) -> u8 {
        let (x, y) = (i16::from(coords.0), i16::from(coords.1));
        let (width, height) = (i16::from(board.width()), i16::from(board.height()));
        let mut count = 0;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if (nx, ny) == (x, y) || nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }
                if board.contains_mine((nx as Coord, ny as Coord)) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new((0, 4), 0),
            Err(GameError::InvalidConfiguration(ConfigError::EmptyBoard))
        );
        assert_eq!(
            GameConfig::new((4, 0), 0),
            Err(GameError::InvalidConfiguration(ConfigError::EmptyBoard))
        );
    }

    #[test]
    fn config_requires_one_safe_cell() {
        assert_eq!(
            GameConfig::new((2, 2), 4),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines))
        );
        assert!(GameConfig::new((2, 2), 3).is_ok());
        assert!(GameConfig::new((2, 2), 0).is_ok());
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
        assert_eq!(GameConfig::default(), GameConfig::intermediate());
    }

    #[test]
    fn single_center_mine_gives_every_other_cell_a_one() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(1, 1)], Cell::Mine);
        for coords in iter_coords((3, 3)).filter(|&c| c != (1, 1)) {
            assert_eq!(board[coords], Cell::Count(1));
        }
    }

    #[test]
    fn counts_match_brute_force() {
        let mines = [(0, 0), (1, 0), (3, 2), (4, 4), (2, 3)];
        let board = Board::from_mine_coords((5, 5), &mines).unwrap();

        for coords in iter_coords(board.size()) {
            match board[coords] {
                Cell::Mine => assert!(mines.contains(&coords)),
                Cell::Count(count) => assert_eq!(count, brute_force_count(&board, coords)),
            }
        }
    }

    #[test]
    fn duplicate_mines_are_counted_once() {
        let board = Board::from_mine_coords((3, 1), &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(1, 0)], Cell::Count(1));
        assert_eq!(board[(2, 0)], Cell::Count(0));
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds_mine() {
        assert_eq!(
            Board::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn from_mine_mask_uses_height_by_width_shape() {
        let mut mask = Array2::from_elem([2, 3], false);
        mask[[1, 2]] = true;

        let board = Board::from_mine_mask(&mask).unwrap();

        assert_eq!(board.size(), (3, 2));
        assert!(board.contains_mine((2, 1)));
        assert_eq!(board.mine_coords().collect::<Vec<_>>(), [(2, 1)]);
    }

    #[test]
    fn cell_query_checks_bounds() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        assert_eq!(board.cell((1, 1)), Ok(Cell::Count(1)));
        assert_eq!(board.cell((2, 1)), Err(GameError::OutOfBounds));
        assert_eq!(board.cell((1, 2)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn raw_grid_marks_mines_with_minus_one() {
        let board = Board::from_mine_coords((3, 1), &[(2, 0)]).unwrap();

        let raw = board.to_raw_grid();

        assert_eq!(raw.dim(), (1, 3));
        assert_eq!(raw[[0, 0]], 0);
        assert_eq!(raw[[0, 1]], 1);
        assert_eq!(raw[[0, 2]], RAW_MINE);
    }

    #[test]
    fn board_roundtrips_through_serde() {
        let board = Board::from_mine_coords((4, 3), &[(0, 1), (3, 2)]).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored[(1, 1)], Cell::Count(1));
    }

    #[test]
    fn board_serializes_as_mine_mask() {
        let board = Board::from_mine_coords((2, 1), &[(1, 0)]).unwrap();

        let value = serde_json::to_value(&board).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "mines": { "v": 1, "dim": [1, 2], "data": [false, true] } })
        );
    }

    #[test]
    fn deserializing_cell_grid_with_false_counts_is_rejected() {
        let json = r#"{"cells":{"v":1,"dim":[1,2],"data":[{"Count":7},{"Count":0}]},"mine_count":5}"#;

        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn deserializing_all_mine_mask_is_rejected() {
        let json = r#"{"mines":{"v":1,"dim":[1,2],"data":[true,true]}}"#;

        let err = serde_json::from_str::<Board>(json).unwrap_err();

        assert!(err.to_string().contains("too many mines"), "{err}");
    }

    #[test]
    fn deserializing_oversized_mask_is_rejected() {
        let json = alloc::format!(
            r#"{{"mines":{{"v":1,"dim":[1,256],"data":[{}]}}}}"#,
            alloc::vec!["false"; 256].join(",")
        );

        let err = serde_json::from_str::<Board>(&json).unwrap_err();

        assert!(err.to_string().contains("shape"), "{err}");
    }

    #[test]
    fn safe_cell_count_excludes_mines() {
        let board = Board::from_mine_coords((4, 3), &[(0, 0), (3, 2)]).unwrap();

        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.safe_cell_count(), 10);
    }
}
