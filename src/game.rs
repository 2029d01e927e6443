//! The control plane: owns the session, the visible screen and the flight
//! timer, and is the only place input turns into state changes.
//!
//! Input and flight ticks both land here and each runs to completion. Any
//! player command issued while an arrow is still flying first drains that
//! flight, so two turn advances are never pending at once.

use std::mem;
use std::time::Instant;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compute::TurnOutcome;
use crate::config::Config;
use crate::display;
use crate::entities::Direction;
use crate::error::ConfigError;
use crate::flight::FlightTimer;
use crate::input::Action;
use crate::menu::{Command, PlayerCommand, Reaction, Screen, ScreenKind};
use crate::session::Session;

#[derive(Debug)]
pub struct Game {
    pub config: Config,
    pub session: Session,
    pub visible: Screen,
    /// The screen shown just before `visible`; one level only.
    pub previous: Option<Screen>,
    /// Fire arrows opposite to the pressed key. Survives new sessions.
    pub reverse_controls: bool,
    pub timer: FlightTimer,
    rng: StdRng,
    quit: bool,
    refresh: bool,
}

impl Game {
    /// A game sitting on the title screen.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Game {
            session: Session::new(&config),
            timer: FlightTimer::new(config.tick_interval),
            config,
            visible: Screen::new(ScreenKind::Title),
            previous: None,
            reverse_controls: false,
            rng,
            quit: false,
            refresh: true,
        })
    }

    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a redraw was requested since the last call.
    pub fn take_refresh(&mut self) -> bool {
        mem::take(&mut self.refresh)
    }

    fn request_refresh(&mut self) {
        self.refresh = true;
    }

    /// Text for the visible screen.
    pub fn render(&self) -> String {
        display::render(self)
    }

    // ── Input routing ────────────────────────────────────────────────────────

    /// Deliver one input to the visible screen and carry out its reaction.
    pub fn handle(&mut self, action: Action) {
        match self.visible.on_input(action) {
            Reaction::Ignore => {}
            Reaction::Redraw => self.request_refresh(),
            Reaction::Execute(command) => self.execute(command),
            Reaction::ToggleReverseControls => {
                self.reverse_controls = !self.reverse_controls;
                debug!("reverse controls: {}", self.reverse_controls);
                self.request_refresh();
            }
            Reaction::Play(command) => {
                match command {
                    PlayerCommand::Move(direction) => {
                        let (dr, dc) = direction.delta();
                        self.player_move(dr, dc)
                    }
                    PlayerCommand::Wait => self.player_move(0, 0),
                    PlayerCommand::Shoot(direction) => self.player_shoot(direction),
                };
            }
        }
    }

    pub fn execute(&mut self, command: Command) {
        trace!("executing {command:?}");
        match command {
            Command::StartGame => self.new_session(),
            Command::ResumeGame => self.change_visible(Screen::new(ScreenKind::GameInterface)),
            Command::EnterTitle => {
                self.abandon_flight();
                self.change_visible(Screen::new(ScreenKind::Title));
            }
            Command::EnterInformation => {
                self.change_visible(Screen::new(ScreenKind::Information));
            }
            Command::EnterOptions => self.change_visible(Screen::new(ScreenKind::Options)),
            Command::EnterPause => self.change_visible(Screen::new(ScreenKind::Pause)),
            Command::EnterContinue => self.change_visible(Screen::new(ScreenKind::Continue)),
            Command::EnterPrevious => match self.previous {
                Some(screen) => self.change_visible(screen),
                None => debug!("no previous screen to return to"),
            },
            Command::Exit => {
                info!("exit requested");
                self.quit = true;
            }
        }
    }

    /// Show `screen`, remembering the outgoing one as `previous`.
    pub fn change_visible(&mut self, screen: Screen) {
        debug!("screen {:?} -> {:?}", self.visible.kind, screen.kind);
        self.previous = Some(mem::replace(&mut self.visible, screen));
        self.request_refresh();
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    pub fn new_session(&mut self) {
        self.timer.stop();
        self.session = Session::new(&self.config);
        info!("new session");
        self.change_visible(Screen::new(ScreenKind::GameInterface));
    }

    pub fn end_session(&mut self) {
        self.timer.stop();
        self.session.end(Instant::now());
        info!(
            "session over: score {}, turn {}, {:?} played",
            self.session.score,
            self.session.turn,
            self.session.elapsed()
        );
        self.change_visible(Screen::new(ScreenKind::GameOver));
    }

    /// Drop a flying arrow without running its turn. Used when the player
    /// walks away from the session.
    fn abandon_flight(&mut self) {
        self.timer.stop();
        if self.session.is_flying() {
            debug!("arrow dropped, session abandoned");
            self.session.land_arrow();
        }
    }

    fn run_turn(&mut self) {
        if self.session.advance_turn(&mut self.rng) == TurnOutcome::Caught {
            self.end_session();
        }
        self.request_refresh();
    }

    // ── Player commands ──────────────────────────────────────────────────────

    /// Step the player by `(dr, dc)` and advance the turn. `(0, 0)` waits.
    ///
    /// Returns `false` when the step is off the board or onto an enemy,
    /// checked both before and after draining an in-flight arrow.
    pub fn player_move(&mut self, dr: i32, dc: i32) -> bool {
        // Checked up front so a rejected move never drains the flight.
        if self.session.is_over() || !self.session.can_step_player(dr, dc) {
            return false;
        }
        if self.session.is_flying() {
            self.complete_flight();
            if self.session.is_over() {
                return false;
            }
        }
        if !self.session.step_player(dr, dc) {
            return false;
        }
        self.run_turn();
        true
    }

    /// Loose an arrow toward `direction` (reversed if the option is on).
    ///
    /// Does nothing while the bow is still being drawn.
    pub fn player_shoot(&mut self, direction: Direction) -> bool {
        if self.session.is_over() {
            return false;
        }
        if !self.session.player.is_ready() {
            trace!("shot rejected, reload {}", self.session.player.reload);
            return false;
        }
        if self.session.is_flying() {
            self.complete_flight();
            if self.session.is_over() {
                return false;
            }
        }

        let (mut dr, mut dc) = direction.delta();
        if self.reverse_controls {
            dr = -dr;
            dc = -dc;
        }
        self.session.launch_arrow(dr, dc);
        self.timer.start(Instant::now());
        self.request_refresh();
        true
    }

    // ── Flight ───────────────────────────────────────────────────────────────

    /// One timer tick: move the arrow a cell, or land it and run the turn.
    pub fn tick_flight(&mut self) {
        if !self.session.is_flying() {
            self.timer.stop();
            return;
        }
        if !self.session.step_arrow() {
            self.timer.stop();
            self.session.land_arrow();
            self.run_turn();
        }
        self.session.rebuild();
        self.request_refresh();
    }

    /// Fast-forward a flying arrow to the end of its flight, then run the turn.
    pub fn complete_flight(&mut self) {
        self.timer.stop();
        if !self.session.is_flying() {
            return;
        }
        while self.session.step_arrow() {}
        self.session.land_arrow();
        self.run_turn();
        self.session.rebuild();
        self.request_refresh();
    }

    /// Run a flight tick if one is due at `now`.
    pub fn poll_flight(&mut self, now: Instant) {
        if self.timer.fire_due(now) {
            self.tick_flight();
        }
    }
}
