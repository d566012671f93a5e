pub mod board;
pub mod error;
pub mod state;

pub use board::{Board, Cell, Direction};
pub use error::ConfigError;
pub use state::{FlagOutcome, Game, RevealOutcome};
