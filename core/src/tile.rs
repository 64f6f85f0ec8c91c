use serde::{Deserialize, Serialize};

/// Raw value used for mines in [`Board::to_raw_grid`](crate::Board::to_raw_grid).
pub const RAW_MINE: i8 = -1;

/// Raw sentinel for cells the player has not seen yet.
pub const RAW_HIDDEN: i8 = -1;

/// Ground-truth content of a board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    Count(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }

    pub const fn to_raw(self) -> i8 {
        match self {
            Self::Mine => RAW_MINE,
            Self::Count(count) => count as i8,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Revealed(u8),
}

impl VisibleCell {
    pub const fn to_raw(self) -> i8 {
        match self {
            Self::Hidden => RAW_HIDDEN,
            Self::Revealed(count) => count as i8,
        }
    }
}

impl Default for VisibleCell {
    fn default() -> Self {
        Self::Hidden
    }
}
