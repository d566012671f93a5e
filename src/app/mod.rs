mod input;

use std::error::Error;
use std::io::{Stdout, stdout};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::{debug, info};
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::Game;
use crate::game::RevealOutcome;
use crate::ui::{self, cell_at, draw_game, draw_welcome, grid_rect};

pub use input::{Action, map_key, map_mouse};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run<R: Rng>(game: Game<R>) -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), App::new(game))
}

fn run_loop<R: Rng>(terminal: &mut Term, mut app: App<R>) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        // One event is applied in full before the next read.
        let action = match event::read()? {
            Event::Key(key) => {
                debug!("key event: {:?} with modifiers {:?}", key.code, key.modifiers);
                map_key(key)
            }
            Event::Mouse(mouse) => map_mouse(mouse),
            _ => None,
        };
        let Some(action) = action else {
            continue;
        };

        let area = terminal.size()?;
        if app.handle(action, area) == Flow::Quit {
            info!("quit requested");
            break;
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Presentation state wrapped around the game: which screen is up and whether the loss popup shows.
pub struct App<R: Rng> {
    pub game: Game<R>,
    pub screen: Screen,
    pub loss_popup: bool,
}

impl<R: Rng> App<R> {
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            screen: Screen::Welcome,
            loss_popup: false,
        }
    }

    pub fn draw(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Welcome => draw_welcome(frame),
            Screen::Playing => draw_game(frame, &self.game, self.loss_popup),
        }
    }

    /// Applies one action. `area` is the current terminal size, used to hit-test mouse clicks.
    pub fn handle(&mut self, action: Action, area: Rect) -> Flow {
        if action == Action::Quit {
            return Flow::Quit;
        }

        if self.screen == Screen::Welcome {
            if action == Action::Confirm {
                self.screen = Screen::Playing;
            }
            return Flow::Continue;
        }

        if self.loss_popup {
            match action {
                Action::Confirm => self.loss_popup = false,
                Action::Reset => self.reset(),
                _ => {}
            }
            return Flow::Continue;
        }

        match action {
            Action::Move(direction) => {
                self.game.move_cursor(direction);
            }
            Action::Reveal => self.reveal(),
            Action::Flag => self.flag(),
            Action::RevealAt { column, row } => {
                self.focus(area, column, row);
                self.reveal();
            }
            Action::FlagAt { column, row } => {
                self.focus(area, column, row);
                self.flag();
            }
            Action::Reset => self.reset(),
            Action::Confirm | Action::Quit => {}
        }
        Flow::Continue
    }

    fn reveal(&mut self) {
        let outcome = self.game.reveal_cursor();
        if !outcome.has_update() {
            debug!("reveal ignored: {outcome:?}");
        }
        if outcome == RevealOutcome::Lost {
            self.loss_popup = true;
        }
    }

    fn flag(&mut self) {
        let outcome = self.game.toggle_flag_cursor();
        if !outcome.has_update() {
            debug!("flag ignored: {outcome:?}");
        }
    }

    fn reset(&mut self) {
        self.loss_popup = false;
        self.game.reset();
    }

    // Clicks outside the grid leave the cursor where it is.
    fn focus(&mut self, area: Rect, column: u16, row: u16) {
        let (min_w, min_h) = ui::min_size(self.game.rows(), self.game.cols());
        if area.width < min_w || area.height < min_h {
            return;
        }
        let grid = grid_rect(area, self.game.rows(), self.game.cols());
        if let Some((r, c)) = cell_at(grid, column, row) {
            self.game.move_cursor_to(r, c);
        }
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
