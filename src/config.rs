// Shared game UI/constants.
pub const MS_ROWS: usize = 10;
pub const MS_COLS: usize = 10;
pub const BOMB_COUNT: usize = 10;
pub const CELL_W: u16 = 5; // each cell is a bordered box with the glyph in the middle
pub const CELL_H: u16 = 3;
pub const STATUS_H: u16 = 1;
pub const DEFAULT_LOG_FILE: &str = "minesweeper.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_board_fits_its_bombs() {
        assert!(BOMB_COUNT <= MS_ROWS * MS_COLS);
    }
}
