//! Enemy pursuit and perimeter spawning.

use log::debug;
use rand::Rng;

use crate::board::Cell;
use crate::entities::{EnemyId, Position};
use crate::error::SpawnError;
use crate::session::Session;

/// What one pursuit attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pursuit {
    /// The enemy was within one cell of the player; the session is over.
    Caught,
    Moved,
    /// No candidate cell was floor. The enemy may retry later this turn.
    Blocked,
}

/// Candidate steps toward the target, best first.
///
/// Tier 1 closes both gaps. Tier 2 keeps only the axis with the smaller gap
/// (ties keep the column). Tier 3 cancels the remaining axis on top of tier 2,
/// which always yields `(0, 0)`: the enemy's own cell, never floor. It is kept
/// so pursuit stays exactly as aggressive as the classic game.
fn candidate_steps(dr: i32, dc: i32, rows_closer: bool) -> [(i32, i32); 3] {
    let tier1 = (dr, dc);
    let tier2 = if rows_closer { (dr, 0) } else { (0, dc) };
    let tier3 = if rows_closer { (0, tier2.1) } else { (tier2.0, 0) };
    [tier1, tier2, tier3]
}

impl Session {
    /// Run one pursuit attempt for enemy `id`.
    ///
    /// The contact check comes before any movement: an enemy that starts its
    /// attempt within Chebyshev distance 1 of the player catches them.
    pub fn hunt(&mut self, id: EnemyId) -> Pursuit {
        let Some(index) = self.enemies.iter().position(|e| e.id == id) else {
            return Pursuit::Blocked;
        };
        self.enemies[index].moved = false;

        let pos = self.enemies[index].pos;
        let target = self.player.pos;
        let r_dist = (target.row - pos.row).abs();
        let c_dist = (target.col - pos.col).abs();
        if r_dist <= 1 && c_dist <= 1 {
            return Pursuit::Caught;
        }

        let dr = (target.row - pos.row).signum();
        let dc = (target.col - pos.col).signum();
        for (sr, sc) in candidate_steps(dr, dc, r_dist < c_dist) {
            if !self.board.is_floor(pos.offset(sr, sc)) {
                continue;
            }
            let enemy = &mut self.enemies[index];
            if self.board.try_step(&mut enemy.pos, sr, sc, Cell::Enemy(id)) {
                enemy.moved = true;
                return Pursuit::Moved;
            }
        }
        Pursuit::Blocked
    }

    /// Spawn one enemy on a random free perimeter cell.
    ///
    /// Gives up after `config.spawn_attempts` picks so a saturated border
    /// cannot stall the turn.
    pub fn spawn_enemy(&mut self, rng: &mut impl Rng) -> Result<EnemyId, SpawnError> {
        let attempts = self.config.spawn_attempts;
        for _ in 0..attempts {
            let pos = random_perimeter_cell(self.board.rows(), self.board.cols(), rng);
            if self.board.is_floor(pos) {
                let id = self.spawn_enemy_at(pos);
                debug!("enemy {} spawned at ({}, {})", id.0, pos.row, pos.col);
                return Ok(id);
            }
        }
        Err(SpawnError::PerimeterSaturated { attempts })
    }
}

/// Pick an edge pair (top/bottom or left/right), one of the two edges, then a
/// coordinate along it.
fn random_perimeter_cell(rows: i32, cols: i32, rng: &mut impl Rng) -> Position {
    let horizontal = rng.gen_bool(0.5);
    let near_edge = rng.gen_bool(0.5);
    if horizontal {
        let row = if near_edge { 0 } else { rows - 1 };
        Position::new(row, rng.gen_range(0..cols))
    } else {
        let col = if near_edge { 0 } else { cols - 1 };
        Position::new(rng.gen_range(0..rows), col)
    }
}
