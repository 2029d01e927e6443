//! Screens, their option tables and how each reacts to input.
//!
//! A `Screen` never changes the game itself. It turns an `Action` into a
//! `Reaction`, and the `Game` carries that out.

use crate::entities::Direction;
use crate::input::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Title,
    GameInterface,
    Information,
    Options,
    Pause,
    GameOver,
    Continue,
}

/// Named, stateless actions bound to menu entries and fixed key reactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    StartGame,
    ResumeGame,
    EnterTitle,
    EnterInformation,
    EnterOptions,
    EnterPause,
    EnterContinue,
    EnterPrevious,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub command: Command,
}

const fn option(label: &'static str, command: Command) -> MenuOption {
    MenuOption { label, command }
}

const TITLE_OPTIONS: &[MenuOption] = &[
    option("Start", Command::StartGame),
    option("How To Play", Command::EnterInformation),
    option("Options", Command::EnterOptions),
    option("Exit", Command::Exit),
];

const PAUSE_OPTIONS: &[MenuOption] = &[
    option("Resume", Command::ResumeGame),
    option("Restart", Command::StartGame),
    option("Options", Command::EnterOptions),
    option("How to Play", Command::EnterInformation),
    option("Exit to Main Menu", Command::EnterTitle),
];

const CONTINUE_OPTIONS: &[MenuOption] = &[
    option("New Game", Command::StartGame),
    option("Main Menu", Command::EnterTitle),
];

impl ScreenKind {
    pub const fn options(self) -> &'static [MenuOption] {
        match self {
            ScreenKind::Title => TITLE_OPTIONS,
            ScreenKind::Pause => PAUSE_OPTIONS,
            ScreenKind::Continue => CONTINUE_OPTIONS,
            ScreenKind::GameInterface
            | ScreenKind::Information
            | ScreenKind::Options
            | ScreenKind::GameOver => &[],
        }
    }
}

/// A gameplay input, forwarded to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Move(Direction),
    Wait,
    Shoot(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing changed.
    Ignore,
    /// Only the screen's own state changed (cursor moved).
    Redraw,
    Execute(Command),
    ToggleReverseControls,
    Play(PlayerCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub kind: ScreenKind,
    pub cursor: usize,
}

impl Screen {
    pub const fn new(kind: ScreenKind) -> Self {
        Screen { kind, cursor: 0 }
    }

    pub const fn options(&self) -> &'static [MenuOption] {
        self.kind.options()
    }

    pub fn cursor_up(&mut self) {
        let len = self.options().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    pub fn cursor_down(&mut self) {
        let len = self.options().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    pub fn selected(&self) -> Option<Command> {
        self.options().get(self.cursor).map(|o| o.command)
    }

    /// React to one input.
    pub fn on_input(&mut self, action: Action) -> Reaction {
        match self.kind {
            ScreenKind::Title => match action {
                // Escape parks the cursor on "Exit" rather than quitting.
                Action::Cancel => {
                    self.cursor = self.options().len().saturating_sub(1);
                    Reaction::Redraw
                }
                _ => self.navigate(action),
            },
            ScreenKind::Pause => match action {
                Action::Cancel => Reaction::Execute(Command::ResumeGame),
                _ => self.navigate(action),
            },
            ScreenKind::Continue => self.navigate(action),
            ScreenKind::GameInterface => match action {
                Action::Cancel => Reaction::Execute(Command::EnterPause),
                Action::Move(direction) => Reaction::Play(PlayerCommand::Move(direction)),
                Action::Wait => Reaction::Play(PlayerCommand::Wait),
                Action::Shoot(direction) => Reaction::Play(PlayerCommand::Shoot(direction)),
                Action::Confirm | Action::Other => Reaction::Ignore,
            },
            ScreenKind::Information => Reaction::Execute(Command::EnterPrevious),
            ScreenKind::Options => match action {
                Action::Cancel => Reaction::Execute(Command::EnterPrevious),
                _ => Reaction::ToggleReverseControls,
            },
            ScreenKind::GameOver => match action {
                Action::Cancel => Reaction::Execute(Command::EnterContinue),
                _ => Reaction::Ignore,
            },
        }
    }

    /// Shared handling for option-list screens.
    fn navigate(&mut self, action: Action) -> Reaction {
        if action == Action::Confirm {
            return self.selected().map_or(Reaction::Ignore, Reaction::Execute);
        }
        match action.vertical() {
            Some(Direction::Up) => {
                self.cursor_up();
                Reaction::Redraw
            }
            Some(_) => {
                self.cursor_down();
                Reaction::Redraw
            }
            None => Reaction::Ignore,
        }
    }
}
