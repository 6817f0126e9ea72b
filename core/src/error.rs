use thiserror::Error;

/// Rejected board configuration.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Mine count must be smaller than the number of cells")]
    InvalidMineCount,
    #[error("Board dimensions must be positive")]
    InvalidSize,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("Round already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
