use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Up => Some(Command::Up),
                KeyCode::Down => Some(Command::Down),
                KeyCode::Left => Some(Command::Left),
                KeyCode::Right => Some(Command::Right),
                KeyCode::Esc => Some(Command::Quit),
                KeyCode::Char(c) => match c.to_ascii_lowercase() {
                    'w' => Some(Command::Up),
                    's' => Some(Command::Down),
                    'a' => Some(Command::Left),
                    'd' => Some(Command::Right),
                    'q' => Some(Command::Quit),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }

    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Quit => None,
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
        }
    }
}
