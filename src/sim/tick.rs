//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one step. Pacing is the
//! caller's job (see `TickScheduler`).

use std::time::{Duration, Instant};

use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one fixed step.
///
/// Does nothing unless the session is running. Never fails: a food
/// placement fault ends the session instead of propagating.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.snake.advance();

    if state.snake.check_dinner(state.food.location()) {
        state.snake.grow();
        state.score += 1;
        let score = state.score;
        state.push_event(GameEvent::Ate { score });

        if let Err(e) = state.respawn_food() {
            log::error!("Ending game at score {}: {}", state.score, e);
            state.phase = GamePhase::Dead;
            return;
        }
    }

    if let Some(cause) = state.snake.death_cause(&state.grid) {
        state.phase = GamePhase::Dead;
        state.push_event(GameEvent::Crashed { cause });
        log::info!(
            "Snake died ({:?}) after {} ticks, score {}",
            cause,
            state.time_ticks,
            state.score
        );
    }
}

/// Decides when the next simulation step is due.
///
/// A late check schedules the following step one full interval after the
/// late one, so a stall delays the simulation instead of bursting it.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    /// Build from a rate in ticks per second (clamped to at least 1)
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Make the next check at or after `now` due immediately
    pub fn reset(&mut self, now: Instant) {
        self.next_tick = Some(now);
    }

    /// True if a step is due at `now`; arms the following deadline if so
    pub fn update_required(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(due) if due > now => false,
            _ => {
                self.next_tick = Some(now + self.interval);
                true
            }
        }
    }
}
