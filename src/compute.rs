//! Turn engine and player movement.
//!
//! Everything here mutates a `Session` in place and reports what happened;
//! screen changes are left to the caller. Randomness only enters through the
//! injected RNG, so a seeded RNG replays a game exactly.

use log::{trace, warn};
use rand::Rng;

use crate::board::Cell;
use crate::entities::EnemyId;
use crate::hunt::Pursuit;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    /// An enemy reached the player; no further enemies were processed.
    Caught,
}

impl Session {
    /// Advance the world by one turn.
    ///
    /// Enemies hunt one after another in spawn order, each seeing the moves
    /// of the ones before it. Enemies left blocked get one retry once everyone
    /// has moved. Spawning follows on every `spawn_frequency`-th turn while
    /// the border has room.
    pub fn advance_turn(&mut self, rng: &mut impl Rng) -> TurnOutcome {
        self.rebuild();

        let order: Vec<EnemyId> = self.enemies.iter().map(|e| e.id).collect();
        for &id in &order {
            if self.hunt(id) == Pursuit::Caught {
                return TurnOutcome::Caught;
            }
            self.rebuild();
        }

        for &id in &order {
            if self.enemy(id).is_some_and(|e| e.moved) {
                continue;
            }
            if self.hunt(id) == Pursuit::Caught {
                return TurnOutcome::Caught;
            }
            self.rebuild();
        }

        if self.turn % self.config.spawn_frequency == 0
            && self.enemies.len() < self.config.spawn_capacity()
        {
            for _ in 0..self.config.spawn_quantity {
                match self.spawn_enemy(rng) {
                    Ok(_) => self.rebuild(),
                    Err(err) => {
                        warn!("turn {}: {err}, skipping spawn", self.turn);
                        break;
                    }
                }
            }
        }

        self.turn += 1;
        TurnOutcome::Continue
    }

    /// Whether the player may step by `(dr, dc)`: on the board and not onto an
    /// enemy. `(0, 0)` is waiting in place and always allowed.
    pub fn can_step_player(&self, dr: i32, dc: i32) -> bool {
        match self.board.get(self.player.pos.offset(dr, dc)) {
            None | Some(Cell::Enemy(_)) => false,
            Some(_) => true,
        }
    }

    /// Move the player and update the bow. Does not advance the turn.
    ///
    /// Waiting draws the bow fully; any other step draws it by one.
    pub fn step_player(&mut self, dr: i32, dc: i32) -> bool {
        if !self.can_step_player(dr, dc) {
            trace!("player step ({dr}, {dc}) rejected");
            return false;
        }
        if !self.board.try_step(&mut self.player.pos, dr, dc, Cell::Player) {
            return false;
        }
        if (dr, dc) == (0, 0) {
            self.player.reload = 0;
        } else {
            self.player.reload = self.player.reload.saturating_sub(1);
        }
        true
    }
}
