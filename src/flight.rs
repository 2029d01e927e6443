//! Projectile flight: the arrow's per-tick stepping and the timer that paces it.
//!
//! A flight is `Idle` until `launch_arrow`, then `Flying` until a step runs
//! off the board. Each tick moves the arrow one cell; enemies in its path die
//! and score on an exponential combo.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::Cell;
use crate::entities::Arrow;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightState {
    Idle,
    Flying,
}

/// Points for the kill after `combo` earlier kills in the same flight.
pub fn combo_points(combo: u32) -> u32 {
    1u32.checked_shl(combo).unwrap_or(u32::MAX)
}

// ── Scheduler ────────────────────────────────────────────────────────────────

/// Periodic tick source for the flight. Stopping it simply drops the next
/// due time; nothing is interrupted.
#[derive(Clone, Copy, Debug)]
pub struct FlightTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FlightTimer {
    pub const fn new(interval: Duration) -> Self {
        FlightTimer {
            interval,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub const fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Consume a due tick. The next one is scheduled a full interval after
    /// `now`, so a late poll never fires a burst.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

// ── Arrow stepping ───────────────────────────────────────────────────────────

impl Session {
    pub fn flight_state(&self) -> FlightState {
        if self.is_flying() {
            FlightState::Flying
        } else {
            FlightState::Idle
        }
    }

    /// Release a new arrow from the player's cell, replacing any previous one.
    /// Emptying the bow resets the reload counter.
    pub fn launch_arrow(&mut self, dr: i32, dc: i32) {
        self.arrow = Some(Arrow::loosed(self.player.pos, dr, dc));
        self.player.reload = self.config.reload_time;
        self.rebuild();
    }

    /// Advance a flying arrow by one cell.
    ///
    /// Returns `false`, leaving the arrow where it is, when the next cell is
    /// off the board. An enemy in the next cell is killed and scored before
    /// the arrow moves in.
    pub fn step_arrow(&mut self) -> bool {
        let Some(arrow) = self.arrow.as_ref().filter(|a| a.flying) else {
            return false;
        };
        let (dr, dc, combo) = (arrow.dr, arrow.dc, arrow.combo);
        let dest = arrow.pos.offset(dr, dc);
        let vertical = arrow.is_vertical();

        match self.board.get(dest) {
            None => return false,
            Some(Cell::Enemy(id)) => {
                self.kill_enemy(id);
                let points = combo_points(combo);
                self.award(points);
                debug!(
                    "enemy {} shot at ({}, {}), +{points} (score {})",
                    id.0, dest.row, dest.col, self.score
                );
                if let Some(arrow) = self.arrow.as_mut() {
                    arrow.combo += 1;
                }
            }
            Some(_) => {}
        }

        match self.arrow.as_mut() {
            Some(arrow) => self
                .board
                .try_step(&mut arrow.pos, dr, dc, Cell::Arrow { vertical }),
            None => false,
        }
    }

    /// End the flight: the arrow drops out of the world.
    pub fn land_arrow(&mut self) {
        if let Some(arrow) = self.arrow.as_mut() {
            arrow.flying = false;
        }
        self.rebuild();
    }
}
