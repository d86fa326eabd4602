//! Pointer input arbitration
//!
//! Turns a raw pointer release into at most one game action. Taps are
//! ambiguous: the same release might be a button press or a steering
//! gesture, so the arbiter applies a fixed precedence.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::SteeringMode;
use crate::sim::{GamePhase, Grid, Heading, Snake};

/// Axis-aligned screen rectangle (inclusive on all edges)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Pointer event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerAction {
    Press,
    Move,
    Release,
}

/// A raw pointer event in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pos: Vec2,
    pub action: PointerAction,
}

impl PointerEvent {
    pub fn release(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            action: PointerAction::Release,
        }
    }
}

/// What a tap means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    TogglePause,
    /// Start a fresh game (also leaves the tap-to-play screen)
    StartNewGame,
    Resume,
    SetHeading(Heading),
}

/// Maps pointer releases to actions
#[derive(Debug, Clone)]
pub struct InputArbiter {
    /// Pause button hitbox in screen pixels
    pause_button: Rect,
    /// Pixel size of one grid cell
    block_size: f32,
    /// Screen width, used by rotational steering
    screen_width: f32,
    steering: SteeringMode,
}

impl InputArbiter {
    pub fn new(pause_button: Rect, block_size: f32, screen_width: f32, steering: SteeringMode) -> Self {
        Self {
            pause_button,
            block_size,
            screen_width,
            steering,
        }
    }

    pub fn pause_button(&self) -> Rect {
        self.pause_button
    }

    /// Resolve one pointer event. First matching rule wins:
    ///
    /// 1. Paused mid-game: resume.
    /// 2. Running, on the pause button, snake alive: pause.
    /// 3. Waiting for a game (fresh or after death): start one.
    /// 4. Running: steer, unless the request would reverse the snake.
    ///
    /// Press and move events never resolve to anything.
    pub fn resolve(
        &self,
        event: &PointerEvent,
        phase: GamePhase,
        snake: &Snake,
        grid: &Grid,
    ) -> Option<Action> {
        if event.action != PointerAction::Release {
            return None;
        }

        if phase == GamePhase::Paused {
            return Some(Action::Resume);
        }
        if phase == GamePhase::Running
            && self.pause_button.contains(event.pos)
            && !snake.detect_death(grid)
        {
            return Some(Action::TogglePause);
        }
        if phase.awaiting_new_game() {
            return Some(Action::StartNewGame);
        }
        if phase == GamePhase::Running {
            let heading = self.steer(event.pos, snake)?;
            // Snake::set_heading rejects this too
            if snake.reverses(heading) {
                return None;
            }
            return Some(Action::SetHeading(heading));
        }
        None
    }

    /// Heading implied by a tap at `pos`
    fn steer(&self, pos: Vec2, snake: &Snake) -> Option<Heading> {
        match self.steering {
            SteeringMode::HeadRelative => {
                let head = snake.head();
                let center = Vec2::new(head.x as f32 + 0.5, head.y as f32 + 0.5) * self.block_size;
                let d = pos - center;
                if d == Vec2::ZERO {
                    return None;
                }
                let heading = if d.x.abs() >= d.y.abs() {
                    if d.x > 0.0 { Heading::Right } else { Heading::Left }
                } else if d.y > 0.0 {
                    Heading::Down
                } else {
                    Heading::Up
                };
                Some(heading)
            }
            SteeringMode::Rotate => {
                let current = snake.heading();
                if pos.x >= self.screen_width / 2.0 {
                    Some(current.rotate_clockwise())
                } else {
                    Some(current.rotate_counter_clockwise())
                }
            }
        }
    }
}
