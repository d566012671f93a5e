use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{bombs} bombs do not fit on a board with {capacity} cells")]
    TooManyBombs { bombs: usize, capacity: usize },
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
}

pub type Result<T> = core::result::Result<T, ConfigError>;
