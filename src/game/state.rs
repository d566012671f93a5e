use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::error::Result;
use crate::game::{Board, Cell, ConfigError, Direction};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed(u8),
    Lost,
    AlreadyRevealed,
    GameOver,
    OutOfBounds,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    AlreadyRevealed,
    GameOver,
    OutOfBounds,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Flagged | Self::Unflagged)
    }
}

/// Board plus everything that outlives a single placement: loss flag, bomb count, randomness.
pub struct Game<R: Rng = StdRng> {
    board: Board,
    bomb_count: usize,
    lost: bool,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(rows: usize, cols: usize, bomb_count: usize) -> Result<Self> {
        Self::with_rng(rows, cols, bomb_count, StdRng::from_entropy())
    }

    pub fn seeded(rows: usize, cols: usize, bomb_count: usize, seed: u64) -> Result<Self> {
        Self::with_rng(rows, cols, bomb_count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rows: usize, cols: usize, bomb_count: usize, rng: R) -> Result<Self> {
        check_config(rows, cols, bomb_count)?;
        let mut game = Self {
            board: Board::new(rows, cols),
            bomb_count,
            lost: false,
            rng,
        };
        game.place_bombs();
        info!("board ready: {rows}x{cols} with {bomb_count} bombs");
        Ok(game)
    }

    /// Starts from a fixed layout. The bomb count is taken from the layout and used by later resets.
    pub fn from_board(board: Board, rng: R) -> Result<Self> {
        check_config(board.rows(), board.cols(), 0)?;
        Ok(Self {
            bomb_count: board.bomb_total(),
            board,
            lost: false,
            rng,
        })
    }

    pub fn place_bombs(&mut self) {
        self.board.place_bombs(self.bomb_count, &mut self.rng);
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn bomb_count(&self) -> usize {
        self.bomb_count
    }

    pub fn flagged_count(&self) -> usize {
        self.board.flagged_total()
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn neighbor_mine_count(&self, row: usize, col: usize) -> u8 {
        self.board.neighbor_mine_count(row, col)
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        self.board.cursor()
    }

    pub fn move_cursor(&mut self, direction: Direction) -> (usize, usize) {
        let pos = self.board.move_cursor(direction);
        debug!("cursor {direction:?} -> {pos:?}");
        pos
    }

    pub fn move_cursor_to(&mut self, row: usize, col: usize) -> (usize, usize) {
        let pos = self.board.move_cursor_to(row, col);
        debug!("cursor jump -> {pos:?}");
        pos
    }

    pub fn reveal(&mut self, row: usize, col: usize) -> RevealOutcome {
        if self.lost {
            return RevealOutcome::GameOver;
        }
        let Some(cell) = self.board.get_mut(row, col) else {
            return RevealOutcome::OutOfBounds;
        };
        if cell.is_revealed {
            return RevealOutcome::AlreadyRevealed;
        }

        // A flag on the cell is left as is; the revealed bit wins when drawing.
        cell.is_revealed = true;
        if cell.is_bomb {
            self.lost = true;
            info!("bomb revealed at ({row}, {col}), game lost");
            return RevealOutcome::Lost;
        }

        let count = self.board.neighbor_mine_count(row, col);
        debug!("revealed ({row}, {col}): {count}");
        RevealOutcome::Revealed(count)
    }

    pub fn toggle_flag(&mut self, row: usize, col: usize) -> FlagOutcome {
        if self.lost {
            return FlagOutcome::GameOver;
        }
        let Some(cell) = self.board.get_mut(row, col) else {
            return FlagOutcome::OutOfBounds;
        };
        if cell.is_revealed {
            return FlagOutcome::AlreadyRevealed;
        }

        cell.is_flagged = !cell.is_flagged;
        debug!("flag ({row}, {col}): {}", cell.is_flagged);
        if cell.is_flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        }
    }

    pub fn reveal_cursor(&mut self) -> RevealOutcome {
        let (row, col) = self.board.cursor();
        self.reveal(row, col)
    }

    pub fn toggle_flag_cursor(&mut self) -> FlagOutcome {
        let (row, col) = self.board.cursor();
        self.toggle_flag(row, col)
    }

    /// Fresh placement with the configured count. The cursor stays where it was.
    pub fn reset(&mut self) {
        self.lost = false;
        self.board.clear_marks();
        self.place_bombs();
        info!("board reset with {} bombs", self.bomb_count);
    }
}

fn check_config(rows: usize, cols: usize, bomb_count: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyGrid { rows, cols });
    }
    let capacity = rows * cols;
    if bomb_count > capacity {
        return Err(ConfigError::TooManyBombs {
            bombs: bomb_count,
            capacity,
        });
    }
    Ok(())
}
