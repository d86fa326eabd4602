//! Loop thread lifecycle
//!
//! The engine lives on a dedicated thread while the game is in the
//! foreground. `pause()` stops that thread and joins it, taking the engine
//! back; `resume()` moves the engine onto a fresh thread. Pointer events
//! reach the loop through a channel, so the engine is only ever touched by
//! one thread at a time and needs no locks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::engine::Engine;
use crate::error::LoopError;
use crate::input::PointerEvent;
use crate::sim::GameState;

/// Run flag shared between the lifecycle caller and the loop thread
#[derive(Debug, Default)]
pub struct LoopControl {
    playing: AtomicBool,
}

impl LoopControl {
    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Release);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }
}

/// Cloneable handle for the input thread
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<PointerEvent>,
}

impl InputSender {
    /// Queue an event for the next loop iteration.
    /// Returns false once the loop has been dropped.
    pub fn send(&self, event: PointerEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Engine plus its inbox; moves between the owner and the loop thread
struct Worker {
    engine: Engine,
    inbox: Receiver<PointerEvent>,
}

impl Worker {
    fn run(mut self, control: &LoopControl) -> Self {
        log::debug!("Loop thread started");
        while control.is_playing() {
            let now = Instant::now();
            while let Ok(event) = self.inbox.try_recv() {
                self.engine.handle_pointer(&event, now);
            }
            self.engine.step(Instant::now());
            thread::sleep(self.engine.frame_interval());
        }
        log::debug!("Loop thread exiting");
        self
    }

    /// Drop events queued while no loop was running
    fn discard_pending(&mut self) -> usize {
        self.inbox.try_iter().count()
    }
}

pub struct GameLoop {
    control: Arc<LoopControl>,
    input: InputSender,
    /// Present while no loop thread is running
    worker: Option<Worker>,
    handle: Option<JoinHandle<Worker>>,
}

impl GameLoop {
    pub fn new(engine: Engine) -> Self {
        let (tx, inbox) = mpsc::channel();
        Self {
            control: Arc::new(LoopControl::default()),
            input: InputSender { tx },
            worker: Some(Worker { engine, inbox }),
            handle: None,
        }
    }

    /// Handle for delivering pointer events from another thread
    pub fn input(&self) -> InputSender {
        self.input.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Session state, available only while the loop is stopped
    pub fn state(&self) -> Option<&GameState> {
        self.worker.as_ref().map(|w| w.engine.state())
    }

    /// Engine access while the loop is stopped
    pub fn engine_mut(&mut self) -> Option<&mut Engine> {
        self.worker.as_mut().map(|w| &mut w.engine)
    }

    /// Start the loop on a fresh thread. No-op if already running.
    pub fn resume(&mut self) -> Result<(), LoopError> {
        if self.handle.is_some() {
            return Ok(());
        }
        let mut worker = self.worker.take().ok_or(LoopError::EngineLost)?;

        let stale = worker.discard_pending();
        if stale > 0 {
            log::debug!("Dropped {} pointer events queued while stopped", stale);
        }

        self.control.set_playing(true);
        let control = Arc::clone(&self.control);
        let spawned = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || worker.run(&control));

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                log::info!("Game loop resumed");
                Ok(())
            }
            Err(e) => {
                self.control.set_playing(false);
                log::error!("Could not start game loop: {}", e);
                Err(LoopError::Spawn(e))
            }
        }
    }

    /// Stop the loop and wait for its thread to exit.
    ///
    /// Once this returns no tick or draw is in progress. If the loop thread
    /// panicked the engine is gone: the failure is logged and later
    /// `resume()` calls return `LoopError::EngineLost`.
    pub fn pause(&mut self) {
        self.control.set_playing(false);
        let Some(handle) = self.handle.take() else {
            return;
        };
        match handle.join() {
            Ok(worker) => {
                self.worker = Some(worker);
                log::info!("Game loop paused");
            }
            Err(_) => log::error!("Game loop thread panicked; engine lost"),
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.pause();
    }
}
