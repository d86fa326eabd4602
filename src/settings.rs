//! Game settings and preferences
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are fine.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::input::Rect;

/// How a tap on the play field becomes a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SteeringMode {
    /// Head toward the tap: the larger axis offset from the head wins
    #[default]
    HeadRelative,
    /// Right half of the screen turns clockwise, left half counter-clockwise
    Rotate,
}

impl SteeringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SteeringMode::HeadRelative => "HeadRelative",
            SteeringMode::Rotate => "Rotate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "head" | "headrelative" | "head-relative" => Some(SteeringMode::HeadRelative),
            "rotate" | "rotation" => Some(SteeringMode::Rotate),
            _ => None,
        }
    }
}

/// Pause button placement, anchored to the bottom-left screen corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseButton {
    pub left: f32,
    /// Distance from the bottom edge to the button's baseline
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PauseButton {
    fn default() -> Self {
        Self {
            left: PAUSE_BUTTON_LEFT,
            bottom: PAUSE_BUTTON_BOTTOM,
            width: PAUSE_BUTTON_WIDTH,
            height: PAUSE_BUTTON_HEIGHT,
        }
    }
}

impl PauseButton {
    /// Hitbox in screen pixels for a screen `screen_height` tall
    pub fn hitbox(&self, screen_height: f32) -> Rect {
        let baseline = screen_height - self.bottom;
        Rect::new(
            Vec2::new(self.left, baseline - self.height),
            Vec2::new(self.left + self.width, baseline),
        )
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Grid width in blocks (height follows the screen)
    pub blocks_wide: u32,
    /// Simulation steps per second
    pub ticks_per_second: u32,
    /// RNG seed; random per process when unset
    pub seed: Option<u64>,

    // === Display ===
    /// Redraw cap for the loop thread
    pub max_fps: u32,

    // === Input ===
    pub steering: SteeringMode,
    pub pause_button: PauseButton,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blocks_wide: NUM_BLOCKS_WIDE,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,

            max_fps: MAX_FPS,

            steering: SteeringMode::default(),
            pause_button: PauseButton::default(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Seed to use for the session RNG
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.blocks_wide, 40);
        assert_eq!(s.ticks_per_second, 10);
        assert_eq!(s.steering, SteeringMode::HeadRelative);
    }

    #[test]
    fn test_partial_json() {
        let s = Settings::from_json(r#"{ "ticks_per_second": 5, "steering": "Rotate" }"#).unwrap();
        assert_eq!(s.ticks_per_second, 5);
        assert_eq!(s.steering, SteeringMode::Rotate);
        assert_eq!(s.blocks_wide, 40);
        assert_eq!(s.pause_button, PauseButton::default());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load("/nonexistent/grid-snake/settings.json");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_save_and_read() {
        let path = std::env::temp_dir().join(format!("grid-snake-settings-{}.json", std::process::id()));
        let mut s = Settings::default();
        s.seed = Some(77);
        s.muted = true;
        s.save(&path).unwrap();
        let back = Settings::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, s);
    }

    #[test]
    fn test_pause_hitbox() {
        let hitbox = PauseButton::default().hitbox(600.0);
        assert_eq!(hitbox.min, Vec2::new(20.0, 480.0));
        assert_eq!(hitbox.max, Vec2::new(240.0, 580.0));
    }

    #[test]
    fn test_steering_from_str() {
        assert_eq!(SteeringMode::from_str("ROTATE"), Some(SteeringMode::Rotate));
        assert_eq!(SteeringMode::from_str("head"), Some(SteeringMode::HeadRelative));
        assert_eq!(SteeringMode::from_str("swipe"), None);
        assert_eq!(SteeringMode::Rotate.as_str(), "Rotate");
    }
}
