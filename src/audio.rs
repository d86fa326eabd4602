//! Audio collaborator boundary
//!
//! The engine raises two cues and never waits on playback. Volume and mute
//! are applied here so sinks only have to play at the level they are given.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Snake ate food
    Eat,
    /// Snake hit a wall or itself
    Crash,
}

impl SoundEffect {
    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Ate { .. } => SoundEffect::Eat,
            GameEvent::Crashed { .. } => SoundEffect::Crash,
        }
    }
}

/// Plays cues, fire-and-forget
pub trait AudioSink: Send {
    /// `volume` is already scaled and in (0.0, 1.0]
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound cue {:?} at volume {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogSink))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build with the volume levels from `settings`
    pub fn with_settings(sink: Box<dyn AudioSink>, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (silently dropped at zero volume)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the cue for each event
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::for_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DeathCause;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(SoundEffect, f32)>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.lock().unwrap().push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_cues() {
        let rec = Recorder::default();
        let mut audio = AudioManager::new(Box::new(rec.clone()));
        audio.set_master_volume(0.5);
        audio.play_events(&[
            GameEvent::Ate { score: 1 },
            GameEvent::Crashed {
                cause: DeathCause::Wall,
            },
        ]);
        let played = rec.0.lock().unwrap().clone();
        assert_eq!(played, vec![(SoundEffect::Eat, 0.5), (SoundEffect::Crash, 0.5)]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let rec = Recorder::default();
        let mut settings = Settings::default();
        settings.muted = true;
        let mut audio = AudioManager::with_settings(Box::new(rec.clone()), &settings);
        audio.play(SoundEffect::Eat);
        assert!(rec.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let rec = Recorder::default();
        let mut audio = AudioManager::new(Box::new(rec.clone()));
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        audio.play(SoundEffect::Crash);
        assert!(rec.0.lock().unwrap().is_empty());
    }
}
