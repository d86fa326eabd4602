//! Render collaborator boundary
//!
//! The loop hands one `Frame` per iteration to a `Renderer`. Drawing itself
//! (bitmaps, fonts, surfaces) belongs to the host; `TextRenderer` is a
//! plain-text reference implementation used by the demo binary.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::io::Write;

use serde::Serialize;

use crate::sim::{Cell, Food, GamePhase, GameState, Grid, Heading};

/// Overlay the renderer should show on top of the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Prompt {
    /// Game running: show the pause button
    PauseButton,
    /// Game paused: show "resume"
    Resume,
    /// Fresh or finished session: show "tap to play"
    TapToPlay,
}

impl Prompt {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Running => Prompt::PauseButton,
            GamePhase::Paused => Prompt::Resume,
            GamePhase::NotStarted | GamePhase::Dead => Prompt::TapToPlay,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prompt::PauseButton => "Pause",
            Prompt::Resume => "Tap to resume",
            Prompt::TapToPlay => "Tap to play",
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub grid: Grid,
    /// Snake cells, head first
    pub chain: &'a VecDeque<Cell>,
    pub heading: Heading,
    pub food: Food,
    pub score: u32,
    pub phase: GamePhase,
    pub prompt: Prompt,
    pub time_ticks: u64,
}

impl<'a> Frame<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            grid: state.grid,
            chain: state.snake.chain(),
            heading: state.snake.heading(),
            food: state.food,
            score: state.score,
            phase: state.phase,
            prompt: Prompt::for_phase(state.phase),
            time_ticks: state.time_ticks,
        }
    }
}

/// Draws frames
pub trait Renderer: Send {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Discards every frame
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame<'_>) {}
}

/// Writes the board as text whenever the simulation or phase changes
pub struct TextRenderer<W: Write + Send> {
    out: W,
    last_drawn: Option<(u64, GamePhase)>,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_drawn: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) {
        let key = (frame.time_ticks, frame.phase);
        if self.last_drawn == Some(key) {
            return;
        }
        self.last_drawn = Some(key);

        let text = render_text(frame);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Text render failed: {}", e);
        }
    }
}

/// Board as text: `@` head, `o` body, `*` food, `.` empty
pub fn render_text(frame: &Frame<'_>) -> String {
    let (width, height) = frame.grid.extent();
    let mut text = String::with_capacity(((width + 1) * (height + 2)) as usize);
    let _ = writeln!(text, "Score: {}  [{}]", frame.score, frame.prompt.as_str());

    for y in 0..height {
        for x in 0..width {
            let cell = Cell::new(x, y);
            let glyph = if frame.chain.front() == Some(&cell) {
                '@'
            } else if frame.chain.contains(&cell) {
                'o'
            } else if frame.food.location() == cell {
                '*'
            } else {
                '.'
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}
