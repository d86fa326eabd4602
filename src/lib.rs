//! Grid Snake - A fixed-timestep snake arcade engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, food, session state, tick)
//! - `input`: Pointer-release arbitration into game actions
//! - `engine`: One loop iteration (input, paced simulation, draw)
//! - `game_loop`: Dedicated loop thread with join-on-pause lifecycle
//! - `render`: Renderable frame handed to the render collaborator
//! - `audio`: Sound cues handed to the audio collaborator
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod engine;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use engine::Engine;
pub use error::{LoopError, SettingsError, SimError};
pub use game_loop::{GameLoop, InputSender};
pub use settings::{PauseButton, Settings, SteeringMode};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 10;
    /// Fixed interval between simulation ticks
    pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);
    /// Upper bound on redraws per second (drawing is decoupled from ticking)
    pub const MAX_FPS: u32 = 60;

    /// Width of the playable area in blocks; height follows the screen aspect
    pub const NUM_BLOCKS_WIDE: u32 = 40;
    /// Smallest playable grid extent on either axis
    pub const MIN_GRID_EXTENT: i32 = 3;

    /// Food x coordinate before the first game (off-grid, never drawn)
    pub const FOOD_HIDE_X: i32 = -10;
    /// Food never spawns on row/column 0
    pub const FOOD_SPAWN_OFFSET: i32 = 1;
    /// Random samples tried before falling back to a linear scan
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1024;

    /// Pause button inset from the left screen edge (pixels)
    pub const PAUSE_BUTTON_LEFT: f32 = 20.0;
    /// Pause button baseline inset from the bottom screen edge (pixels)
    pub const PAUSE_BUTTON_BOTTOM: f32 = 20.0;
    pub const PAUSE_BUTTON_WIDTH: f32 = 220.0;
    pub const PAUSE_BUTTON_HEIGHT: f32 = 100.0;
}
