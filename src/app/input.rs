use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// What a single terminal event asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Reveal,
    Flag,
    /// Mouse click at a terminal position; the cursor jumps there first if it hits a cell.
    RevealAt { column: u16, row: u16 },
    FlagAt { column: u16, row: u16 },
    Reset,
    Confirm,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Action::Move(Direction::Right),
        KeyCode::Char('r' | 'R') => Action::Reveal,
        KeyCode::Char('f' | 'F') => Action::Flag,
        KeyCode::Backspace | KeyCode::Delete => Action::Reset,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char('q' | 'Q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

pub fn map_mouse(mouse: MouseEvent) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::RevealAt { column, row }),
        MouseEventKind::Down(MouseButton::Right) => Some(Action::FlagAt { column, row }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_and_wasd_move() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(Action::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(Action::Move(Direction::Down)));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(Action::Move(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn commands() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Action::Reveal));
        assert_eq!(map_key(press(KeyCode::Char('f'))), Some(Action::Flag));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Action::Reset));
        assert_eq!(map_key(press(KeyCode::Delete)), Some(Action::Reset));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Action::Quit));
        assert_eq!(map_key(ctrl_r), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(
            map_mouse(click(MouseEventKind::Down(MouseButton::Left))),
            Some(Action::RevealAt { column: 12, row: 7 })
        );
        assert_eq!(
            map_mouse(click(MouseEventKind::Down(MouseButton::Right))),
            Some(Action::FlagAt { column: 12, row: 7 })
        );
        assert_eq!(map_mouse(click(MouseEventKind::Moved)), None);
        assert_eq!(map_mouse(click(MouseEventKind::Up(MouseButton::Left))), None);
    }
}
