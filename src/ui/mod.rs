mod render;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use rand::Rng;

use crate::{CELL_H, CELL_W, Game, STATUS_H};

pub use render::draw_board;

const WELCOME: [&str; 8] = [
    "Welcome to Minesweeper",
    "",
    "You can move the cursor with arrow keys or WASD",
    "R/LeftClick to reveal",
    "F/RightClick to flag",
    "Backspace/Delete to restart",
    "",
    "Hit Enter to start!",
];

/// Terminal size needed to show a `rows` x `cols` board and its status line.
pub fn min_size(rows: usize, cols: usize) -> (u16, u16) {
    (
        cols as u16 * CELL_W,
        rows as u16 * CELL_H + STATUS_H,
    )
}

/// Where the cell grid sits inside `area`: centered, status line excluded.
pub fn grid_rect(area: Rect, rows: usize, cols: usize) -> Rect {
    let (w, h) = min_size(rows, cols);
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h.saturating_sub(STATUS_H),
    }
}

/// Maps a terminal position to the board cell drawn there, if any.
pub fn cell_at(grid: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let inside = column >= grid.x
        && row >= grid.y
        && column < grid.x + grid.width
        && row < grid.y + grid.height;
    if !inside {
        return None;
    }
    Some((
        ((row - grid.y) / CELL_H) as usize,
        ((column - grid.x) / CELL_W) as usize,
    ))
}

pub fn draw_welcome(frame: &mut Frame) {
    let area = frame.size();
    let height = (WELCOME.len() as u16).min(area.height);
    let rect = Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    };
    let lines: Vec<Line> = WELCOME.iter().map(|l| Line::raw(*l)).collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

pub fn draw_game<R: Rng>(frame: &mut Frame, game: &Game<R>, loss_popup: bool) {
    let area = frame.size();
    let (min_w, min_h) = min_size(game.rows(), game.cols());

    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min {min_w}x{min_h})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("MINESWEEPER"));
        frame.render_widget(msg, area);
        return;
    }

    let grid = grid_rect(area, game.rows(), game.cols());
    draw_board(frame, game, grid);

    let status_rect = Rect {
        x: grid.x,
        y: grid.y + grid.height,
        width: grid.width,
        height: STATUS_H,
    };
    render::draw_status(frame, game, status_rect);

    if loss_popup {
        render::draw_loss_popup(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    use crate::game::Board;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn game(bombs: &[(usize, usize)]) -> Game {
        Game::from_board(
            Board::from_bombs(10, 10, bombs),
            rand::SeedableRng::seed_from_u64(0),
        )
        .expect("valid layout")
    }

    #[test]
    fn grid_is_centered() {
        let grid = grid_rect(Rect::new(0, 0, 80, 40), 10, 10);
        assert_eq!(grid, Rect::new(15, 4, 50, 30));
    }

    #[test]
    fn clicks_map_to_cells() {
        let grid = grid_rect(Rect::new(0, 0, 80, 40), 10, 10);
        assert_eq!(cell_at(grid, 15, 4), Some((0, 0)));
        assert_eq!(cell_at(grid, 19, 6), Some((0, 0)));
        assert_eq!(cell_at(grid, 20, 7), Some((1, 1)));
        assert_eq!(cell_at(grid, 64, 33), Some((9, 9)));
        assert_eq!(cell_at(grid, 65, 4), None);
        assert_eq!(cell_at(grid, 14, 4), None);
        assert_eq!(cell_at(grid, 30, 34), None);
    }

    #[test]
    fn welcome_lists_controls() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("test backend");
        terminal.draw(draw_welcome).expect("draw");
        let text = screen(&terminal);
        assert!(text.contains("Welcome to Minesweeper"));
        assert!(text.contains("Hit Enter to start!"));
    }

    #[test]
    fn small_terminal_asks_for_resize() {
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).expect("test backend");
        let game = game(&[]);
        terminal.draw(|f| draw_game(f, &game, false)).expect("draw");
        assert!(screen(&terminal).contains("RESIZE"));
    }

    #[test]
    fn revealed_cells_show_counts_and_flags() {
        let mut terminal = Terminal::new(TestBackend::new(50, 31)).expect("test backend");
        let mut game = game(&[(0, 1), (5, 5)]);
        game.reveal(0, 0);
        game.toggle_flag(0, 1);
        terminal.draw(|f| draw_game(f, &game, false)).expect("draw");

        let text = screen(&terminal);
        let lines: Vec<&str> = text.lines().collect();
        // Middle row of the first row of cells.
        assert!(lines[1].contains('1'));
        assert!(lines[1].contains('⚑'));
        assert!(lines[30].contains("1/2"));
    }

    #[test]
    fn loss_shows_bomb_and_popup() {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("test backend");
        let mut game = game(&[(0, 0)]);
        game.toggle_flag(0, 0);
        game.reveal(0, 0);
        terminal.draw(|f| draw_game(f, &game, true)).expect("draw");

        let text = screen(&terminal);
        assert!(text.contains("You lost."));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[5].contains('*'));
    }
}
