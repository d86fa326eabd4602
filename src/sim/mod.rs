//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, pacing decided by the caller
//! - Seeded RNG only
//! - No rendering, audio or threading dependencies

pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::Food;
pub use grid::{Cell, Grid};
pub use snake::{DeathCause, Heading, Snake};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickScheduler, tick};
