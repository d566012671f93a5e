use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use rand::Rng;

use crate::game::Cell;
use crate::{CELL_H, CELL_W, Game};

const LOSS_TEXT: &str = "You lost. Hit Backspace to retry or Enter to close this window.";

/// Paints every cell as a bordered box inside `grid`. The cursor cell gets a thick bold border.
pub fn draw_board<R: Rng>(frame: &mut Frame, game: &Game<R>, grid: Rect) {
    let cursor = game.cursor_position();
    for row in 0..game.rows() {
        for col in 0..game.cols() {
            let Some(cell) = game.cell_state(row, col) else {
                continue;
            };
            let rect = Rect {
                x: grid.x + col as u16 * CELL_W,
                y: grid.y + row as u16 * CELL_H,
                width: CELL_W,
                height: CELL_H,
            };

            let mut block = Block::default().borders(Borders::ALL);
            if (row, col) == cursor {
                block = block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow));
            }

            let glyph = cell_glyph(cell, game.neighbor_mine_count(row, col));
            frame.render_widget(
                Paragraph::new(glyph).alignment(Alignment::Center).block(block),
                rect,
            );
        }
    }
}

// Revealed wins over flagged, so a flagged bomb that got revealed shows as a bomb.
fn cell_glyph(cell: Cell, neighbors: u8) -> Span<'static> {
    if cell.is_revealed {
        if cell.is_bomb {
            return Span::styled("*", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        }
        return Span::styled(neighbors.to_string(), Style::default().fg(count_color(neighbors)));
    }
    if cell.is_flagged {
        return Span::styled("⚑", Style::default().fg(Color::Magenta));
    }
    Span::raw(" ")
}

fn count_color(n: u8) -> Color {
    match n {
        0 => Color::DarkGray,
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::LightBlue,
        5 => Color::LightRed,
        _ => Color::Cyan,
    }
}

pub fn draw_status<R: Rng>(frame: &mut Frame, game: &Game<R>, area: Rect) {
    let state = if game.is_lost() { "LOST " } else { "" };
    let line = Line::from(vec![
        Span::styled(state, Style::default().fg(Color::Red)),
        Span::raw(format!(
            "Flags {}/{}  r reveal  f flag  ⌫ reset  q quit",
            game.flagged_count(),
            game.bomb_count()
        )),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn draw_loss_popup(frame: &mut Frame, area: Rect) {
    let popup_w = (LOSS_TEXT.len() as u16 + 4).min(area.width);
    let popup_h = 5u16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - popup_w) / 2,
        y: area.y + (area.height - popup_h) / 2,
        width: popup_w,
        height: popup_h,
    };
    let overlay = Paragraph::new(vec![Line::raw(""), Line::raw(LOSS_TEXT)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("BOOM"));
    frame.render_widget(Clear, popup);
    frame.render_widget(overlay, popup);
}
