//! One playthrough's world: board, entities and counters.

use std::time::{Duration, Instant};

use crate::board::{Board, Cell};
use crate::config::Config;
use crate::entities::{Arrow, Enemy, EnemyId, Player, Position};

/// Scores saturate here.
pub const MAX_SCORE: u32 = 999;

#[derive(Clone, Debug)]
pub struct Session {
    pub config: Config,
    pub board: Board,
    pub player: Player,
    /// Live enemies in spawn order; this order drives pursuit.
    pub enemies: Vec<Enemy>,
    /// The single projectile, once one has been shot.
    pub arrow: Option<Arrow>,
    pub turn: u64,
    pub score: u32,
    pub started_at: Instant,
    pub ended_at: Option<Instant>,
    next_enemy_id: u32,
}

impl Session {
    /// Fresh session: empty board, player in the centre, no enemies.
    pub fn new(config: &Config) -> Self {
        let (row, col) = config.center();
        let mut session = Session {
            config: config.clone(),
            board: Board::new(config.rows, config.cols),
            player: Player::new(Position::new(row, col)),
            enemies: Vec::new(),
            arrow: None,
            turn: 0,
            score: 0,
            started_at: Instant::now(),
            ended_at: None,
            next_enemy_id: 0,
        };
        session.rebuild();
        session
    }

    /// Rebuild the board from entity positions.
    ///
    /// Order matters: a flying arrow first, then enemies in spawn order, then
    /// the player, so the player is never hidden.
    pub fn rebuild(&mut self) {
        self.board.clear();
        if let Some(arrow) = self.arrow.as_ref().filter(|a| a.flying) {
            self.board.place(
                arrow.pos,
                Cell::Arrow {
                    vertical: arrow.is_vertical(),
                },
            );
        }
        for enemy in &self.enemies {
            self.board.place(enemy.pos, Cell::Enemy(enemy.id));
        }
        self.board.place(self.player.pos, Cell::Player);
    }

    /// Register a new enemy at `pos` and stamp it on the board.
    pub fn spawn_enemy_at(&mut self, pos: Position) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies.push(Enemy {
            id,
            pos,
            moved: false,
        });
        self.board.place(pos, Cell::Enemy(id));
        id
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Remove an enemy from the live collection. Returns `false` if it was
    /// already gone.
    pub fn kill_enemy(&mut self, id: EnemyId) -> bool {
        let Some(index) = self.enemies.iter().position(|e| e.id == id) else {
            return false;
        };
        self.enemies.remove(index);
        self.rebuild();
        true
    }

    pub fn is_flying(&self) -> bool {
        self.arrow.as_ref().is_some_and(|a| a.flying)
    }

    /// Add points, saturating at `MAX_SCORE`.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points).min(MAX_SCORE);
    }

    pub fn is_over(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn end(&mut self, now: Instant) {
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    /// Time played; runs until the session ends.
    pub fn elapsed(&self) -> Duration {
        let until = self.ended_at.unwrap_or_else(Instant::now);
        until.saturating_duration_since(self.started_at)
    }
}
