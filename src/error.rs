//! Error types
//!
//! The simulation itself is closed and deterministic, so the taxonomy is
//! small: configuration faults, settings I/O and loop lifecycle faults.

use thiserror::Error;

/// Faults raised by the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("grid {width}x{height} is too small to play (minimum 3x3)")]
    GridTooSmall { width: i32, height: i32 },

    /// Every cell food may occupy is covered by the snake
    #[error("no free cell left for food on a {width}x{height} grid")]
    NoFreeCell { width: i32, height: i32 },

    #[error("a snake needs at least one cell")]
    EmptyChain,
}

/// Faults loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Faults in the loop thread lifecycle
#[derive(Debug, Error)]
pub enum LoopError {
    /// The loop thread panicked and took the engine with it
    #[error("game engine was lost when the loop thread failed")]
    EngineLost,

    #[error("failed to spawn loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}
