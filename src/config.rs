//! Tunable game constants.
//!
//! `Config::default()` is the canonical 21×21 game; tests build smaller or
//! more crowded variants by overriding fields directly.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ROWS: i32 = 21;
pub const DEFAULT_COLS: i32 = 21;
pub const DEFAULT_SPAWN_FREQUENCY: u64 = 2;
pub const DEFAULT_SPAWN_QUANTITY: usize = 1;
pub const DEFAULT_RELOAD_TIME: u8 = 3;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(15);

/// Upper bound on random perimeter picks per spawned enemy.
pub const DEFAULT_SPAWN_ATTEMPTS: u32 = 256;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    /// Enemies spawn on turns divisible by this.
    pub spawn_frequency: u64,
    pub spawn_quantity: usize,
    pub reload_time: u8,
    /// Delay between two projectile flight steps.
    pub tick_interval: Duration,
    pub spawn_attempts: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_frequency: DEFAULT_SPAWN_FREQUENCY,
            spawn_quantity: DEFAULT_SPAWN_QUANTITY,
            reload_time: DEFAULT_RELOAD_TIME,
            tick_interval: DEFAULT_TICK_INTERVAL,
            spawn_attempts: DEFAULT_SPAWN_ATTEMPTS,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.spawn_frequency == 0 {
            return Err(ConfigError::ZeroSpawnFrequency);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.spawn_attempts == 0 {
            return Err(ConfigError::ZeroSpawnAttempts);
        }
        Ok(())
    }

    /// Where a new session puts the player.
    pub fn center(&self) -> (i32, i32) {
        (self.rows / 2, self.cols / 2)
    }

    /// Live-enemy count below which the turn engine still spawns.
    ///
    /// Perimeter cell count minus the spawn batch and one cell of slack.
    pub fn spawn_capacity(&self) -> usize {
        let perimeter = 2 * (self.rows - 1) + 2 * (self.cols - 1);
        let limit = i64::from(perimeter) - self.spawn_quantity as i64 - 1;
        usize::try_from(limit).unwrap_or(0)
    }
}
