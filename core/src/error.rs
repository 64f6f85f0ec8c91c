use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("too many mines, at least one cell must stay safe")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
