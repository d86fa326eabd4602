//! One loop iteration: apply input, maybe simulate, always draw
//!
//! `Engine` is what the loop thread owns. It is synchronous and takes the
//! current time as an argument, so every step can be driven from tests
//! without a thread.

use std::time::{Duration, Instant};

use crate::audio::{AudioManager, AudioSink};
use crate::consts::{MAX_FPS, TICK_INTERVAL};
use crate::error::SimError;
use crate::input::{Action, InputArbiter, PointerEvent};
use crate::render::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Grid, TickScheduler, tick};

pub struct Engine {
    state: GameState,
    arbiter: InputArbiter,
    renderer: Box<dyn Renderer>,
    audio: AudioManager,
    scheduler: TickScheduler,
    frame_interval: Duration,
}

impl Engine {
    pub fn new(
        state: GameState,
        arbiter: InputArbiter,
        renderer: Box<dyn Renderer>,
        audio: AudioManager,
    ) -> Self {
        Self {
            state,
            arbiter,
            renderer,
            audio,
            scheduler: TickScheduler::new(TICK_INTERVAL),
            frame_interval: Duration::from_secs(1) / MAX_FPS,
        }
    }

    /// Size the grid to the screen and wire collaborators from `settings`
    pub fn from_settings(
        settings: &Settings,
        screen_width: u32,
        screen_height: u32,
        renderer: Box<dyn Renderer>,
        sink: Box<dyn AudioSink>,
    ) -> Result<Self, SimError> {
        let (grid, block_size) = Grid::from_screen(screen_width, screen_height, settings.blocks_wide)?;
        let seed = settings.resolve_seed();
        log::info!(
            "Grid {}x{} cells ({} px blocks), seed {}",
            grid.width(),
            grid.height(),
            block_size,
            seed
        );

        let arbiter = InputArbiter::new(
            settings.pause_button.hitbox(screen_height as f32),
            block_size as f32,
            screen_width as f32,
            settings.steering,
        );
        let engine = Self::new(
            GameState::new(grid, seed),
            arbiter,
            renderer,
            AudioManager::with_settings(sink, settings),
        )
        .with_tick_rate(settings.ticks_per_second)
        .with_max_fps(settings.max_fps);
        Ok(engine)
    }

    pub fn with_tick_rate(mut self, ticks_per_second: u32) -> Self {
        self.scheduler = TickScheduler::from_rate(ticks_per_second);
        self
    }

    pub fn with_max_fps(mut self, max_fps: u32) -> Self {
        self.frame_interval = Duration::from_secs(1) / max_fps.max(1);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Minimum time between redraws
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Resolve a pointer event and apply the resulting action, if any
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> Option<Action> {
        let action = self.arbiter.resolve(
            event,
            self.state.phase,
            &self.state.snake,
            &self.state.grid,
        )?;
        log::debug!("Pointer at {:?} -> {:?}", event.pos, action);
        self.apply(action, now);
        Some(action)
    }

    /// Apply an action directly. Hosts may call this without a pointer
    /// event (a lifecycle hook pausing the game, say), so `TogglePause`
    /// really toggles even though the arbiter maps taps while paused to
    /// `Resume`.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Resume => self.state.resume(),
            Action::TogglePause => match self.state.phase {
                GamePhase::Running => self.state.pause(),
                GamePhase::Paused => self.state.resume(),
                _ => {}
            },
            Action::StartNewGame => match self.state.start_new_game() {
                // First step of a new game is due immediately
                Ok(()) => self.scheduler.reset(now),
                Err(e) => log::error!("Cannot start a new game: {}", e),
            },
            Action::SetHeading(heading) => {
                self.state.set_heading(heading);
            }
        }
    }

    /// Simulate if a step is due, hand cues to audio, then draw
    pub fn step(&mut self, now: Instant) {
        if self.state.phase == GamePhase::Running && self.scheduler.update_required(now) {
            tick(&mut self.state);
            let events = self.state.drain_events();
            self.audio.play_events(&events);
        }
        self.renderer.draw(&Frame::capture(&self.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::sim::{Cell, Food, Heading};

    fn engine() -> Engine {
        let mut settings = Settings::default();
        settings.seed = Some(5);
        // 400x300 screen -> 40x30 grid of 10 px blocks
        Engine::from_settings(
            &settings,
            400,
            300,
            Box::new(NullRenderer),
            Box::new(crate::audio::LogSink),
        )
        .unwrap()
    }

    #[test]
    fn test_tap_starts_game() {
        let mut e = engine();
        let now = Instant::now();
        let action = e.handle_pointer(&PointerEvent::release(200.0, 100.0), now);
        assert_eq!(action, Some(Action::StartNewGame));
        assert_eq!(e.state().phase, GamePhase::Running);

        // First step is due straight away
        e.step(now);
        assert_eq!(e.state().time_ticks, 1);
    }

    #[test]
    fn test_step_rate_limited() {
        let mut e = engine();
        let t0 = Instant::now();
        e.apply(Action::StartNewGame, t0);
        e.state.food = Food::at(Cell::new(1, 1));
        for ms in [0, 10, 50, 99] {
            e.step(t0 + Duration::from_millis(ms));
        }
        assert_eq!(e.state().time_ticks, 1);
        e.step(t0 + Duration::from_millis(100));
        assert_eq!(e.state().time_ticks, 2);
    }

    #[test]
    fn test_pause_button_toggles() {
        let mut e = engine();
        let now = Instant::now();
        e.apply(Action::StartNewGame, now);
        // Pause button: x 20..240, y 180..280 on a 300 px tall screen
        let button = PointerEvent::release(100.0, 250.0);
        assert_eq!(e.handle_pointer(&button, now), Some(Action::TogglePause));
        assert_eq!(e.state().phase, GamePhase::Paused);

        e.step(now + Duration::from_secs(1));
        assert_eq!(e.state().time_ticks, 0);

        assert_eq!(e.handle_pointer(&button, now), Some(Action::Resume));
        assert_eq!(e.state().phase, GamePhase::Running);
    }

    #[test]
    fn test_apply_toggle_pause_both_ways() {
        let mut e = engine();
        let now = Instant::now();
        e.apply(Action::StartNewGame, now);
        e.apply(Action::TogglePause, now);
        assert_eq!(e.state().phase, GamePhase::Paused);
        e.apply(Action::TogglePause, now);
        assert_eq!(e.state().phase, GamePhase::Running);

        // Nothing to toggle before a game starts
        let mut fresh = engine();
        fresh.apply(Action::TogglePause, now);
        assert_eq!(fresh.state().phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_heading_applies_to_next_step() {
        let mut e = engine();
        let t0 = Instant::now();
        e.apply(Action::StartNewGame, t0);
        e.state.food = Food::at(Cell::new(1, 1));
        e.step(t0);
        assert_eq!(e.state().snake.head(), Cell::new(21, 15));

        e.apply(Action::SetHeading(Heading::Up), t0);
        e.step(t0 + Duration::from_millis(100));
        assert_eq!(e.state().snake.head(), Cell::new(21, 14));
    }
}
