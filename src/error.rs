//! Error types.
//!
//! Rejected moves and shots are not errors: they report `false` and leave the
//! session untouched. Being caught is a turn outcome, not an error either.

use thiserror::Error;

/// A `Config` that cannot drive a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 3x3, got {rows}x{cols}")]
    BoardTooSmall { rows: i32, cols: i32 },
    #[error("spawn frequency must be non-zero")]
    ZeroSpawnFrequency,
    #[error("projectile tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("spawn attempt cap must be non-zero")]
    ZeroSpawnAttempts,
}

/// Spawning gave up without finding a free perimeter cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no free perimeter cell found after {attempts} attempts")]
    PerimeterSaturated { attempts: u32 },
}

/// Top-level error for the terminal binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
    #[error("could not open log file {path}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
