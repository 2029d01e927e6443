//! Abstract input actions and the terminal key mapping that produces them.
//!
//! Screens only ever see `Action`s. The mapping is the same on every screen:
//! WASD and the number pad move, arrows shoot, Space/5 waits.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::entities::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    Wait,
    Shoot(Direction),
    Confirm,
    Cancel,
    /// Any other key; some screens react to "any key".
    Other,
}

impl Action {
    /// Menu reading of the action: both move-up and shoot-up mean "up".
    pub const fn vertical(self) -> Option<Direction> {
        match self {
            Action::Move(Direction::Up) | Action::Shoot(Direction::Up) => Some(Direction::Up),
            Action::Move(Direction::Down) | Action::Shoot(Direction::Down) => {
                Some(Direction::Down)
            }
            _ => None,
        }
    }
}

pub fn action_for(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('w' | 'W' | '8') => Action::Move(Direction::Up),
        KeyCode::Char('s' | 'S' | '2') => Action::Move(Direction::Down),
        KeyCode::Char('a' | 'A' | '4') => Action::Move(Direction::Left),
        KeyCode::Char('d' | 'D' | '6') => Action::Move(Direction::Right),
        KeyCode::Char(' ' | '5') => Action::Wait,
        KeyCode::Up => Action::Shoot(Direction::Up),
        KeyCode::Down => Action::Shoot(Direction::Down),
        KeyCode::Left => Action::Shoot(Direction::Left),
        KeyCode::Right => Action::Shoot(Direction::Right),
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        _ => Action::Other,
    }
}

/// Key presses become actions; releases, repeats and non-key events do not.
pub fn from_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Some(action_for(*code)),
        _ => None,
    }
}
