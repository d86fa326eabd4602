//! Session state and core simulation types
//!
//! Everything the loop thread owns for one game lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::Grid;
use super::snake::{DeathCause, Heading, Snake};
use crate::error::SimError;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh process, waiting for the first tap
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Game in progress, simulation halted
    Paused,
    /// Run ended, waiting for a tap to start again
    Dead,
}

impl GamePhase {
    /// A tap in this phase starts a new game
    pub fn awaiting_new_game(self) -> bool {
        matches!(self, GamePhase::NotStarted | GamePhase::Dead)
    }
}

/// Discrete outcomes of a tick, drained by the loop for audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Snake ate; carries the new score
    Ate { score: u32 },
    /// Snake died
    Crashed { cause: DeathCause },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation ticks since the current game started
    pub time_ticks: u64,
    /// Events raised since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session: snake at rest, food hidden
    pub fn new(grid: Grid, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid,
            snake: Snake::new(&grid),
            food: Food::hidden(),
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset snake, food and score and start running.
    ///
    /// On failure the session is left in its previous phase.
    pub fn start_new_game(&mut self) -> Result<(), SimError> {
        self.snake.reset(&self.grid);
        self.respawn_food()?;
        self.score = 0;
        self.time_ticks = 0;
        self.events.clear();
        self.phase = GamePhase::Running;
        log::info!(
            "New game on {}x{} grid, food at {:?}",
            self.grid.width(),
            self.grid.height(),
            self.food.location()
        );
        Ok(())
    }

    /// Halt simulation. No-op unless running.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
            log::debug!("Paused at score {}", self.score);
        }
    }

    /// Continue a paused game. No-op unless paused.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            log::debug!("Resumed at score {}", self.score);
        }
    }

    /// Forward a heading request to the snake
    pub fn set_heading(&mut self, heading: Heading) -> bool {
        let accepted = self.snake.set_heading(heading);
        if !accepted {
            log::debug!(
                "Ignored reversal {:?} -> {:?}",
                self.snake.moved_heading(),
                heading
            );
        }
        accepted
    }

    /// Place food on a cell the snake does not occupy
    pub fn respawn_food(&mut self) -> Result<(), SimError> {
        let snake = &self.snake;
        self.food
            .spawn(&self.grid, |c| snake.occupies(c), &mut self.rng)?;
        Ok(())
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
