use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_bomb: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Row-major grid of cells plus the player's cursor.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    cursor: (usize, usize),
}

impl Board {
    /// Every cell hidden, no bombs, cursor at the top-left corner.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            cursor: (0, 0),
        }
    }

    /// Board with bombs at exactly the given positions. Out-of-range positions are skipped.
    pub fn from_bombs(rows: usize, cols: usize, bombs: &[(usize, usize)]) -> Self {
        let mut board = Self::new(rows, cols);
        for &(row, col) in bombs {
            if let Some(cell) = board.get_mut(row, col) {
                cell.is_bomb = true;
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col).then(|| self.cells[self.idx(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let idx = self.idx(row, col);
        Some(&mut self.cells[idx])
    }

    pub fn bomb_total(&self) -> usize {
        self.cells.iter().filter(|c| c.is_bomb).count()
    }

    pub fn flagged_total(&self) -> usize {
        self.cells.iter().filter(|c| c.is_flagged).count()
    }

    /// Drops every bomb, then draws `count` distinct positions by rejection sampling.
    ///
    /// The caller guarantees `count <= rows * cols`; otherwise this never terminates.
    pub fn place_bombs<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for cell in &mut self.cells {
            cell.is_bomb = false;
        }
        let mut placed = 0;
        while placed < count {
            let row = rng.gen_range(0..self.rows);
            let col = rng.gen_range(0..self.cols);
            let idx = self.idx(row, col);
            let cell = &mut self.cells[idx];
            if !cell.is_bomb {
                cell.is_bomb = true;
                placed += 1;
            }
        }
    }

    /// Bombs in the Moore neighborhood of `(row, col)`, clipped at the edges.
    pub fn neighbor_mine_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 {
                    continue;
                }
                if let Some(cell) = self.get(nr as usize, nc as usize) {
                    if cell.is_bomb {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Clears reveal and flag bits on every cell. Bombs are left for the caller to redraw.
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            cell.is_flagged = false;
            cell.is_revealed = false;
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn move_cursor(&mut self, direction: Direction) -> (usize, usize) {
        let (row, col) = self.cursor;
        self.cursor = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down if row + 1 < self.rows => (row + 1, col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right if col + 1 < self.cols => (row, col + 1),
            _ => (row, col),
        };
        self.cursor
    }

    pub fn move_cursor_to(&mut self, row: usize, col: usize) -> (usize, usize) {
        self.cursor = (
            row.min(self.rows.saturating_sub(1)),
            col.min(self.cols.saturating_sub(1)),
        );
        self.cursor
    }
}
