//! Grid Snake entry point
//!
//! Headless demo: runs the engine on its loop thread, draws the board as
//! text on stdout and feeds it random taps for a while.
//!
//! Usage: `grid-snake [settings.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, Instant};

    use grid_snake::audio::LogSink;
    use grid_snake::input::PointerEvent;
    use grid_snake::render::TextRenderer;
    use grid_snake::{Engine, GameLoop, Settings};
    use rand::Rng;

    const SCREEN_WIDTH: u32 = 800;
    const SCREEN_HEIGHT: u32 = 480;
    const DEFAULT_DEMO_SECS: u64 = 20;

    env_logger::init();
    log::info!("Grid Snake (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let demo_secs = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DEMO_SECS);

    let engine = match Engine::from_settings(
        &settings,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        Box::new(TextRenderer::new(std::io::stdout())),
        Box::new(LogSink),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Cannot set up the game: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = GameLoop::new(engine);
    let input = game.input();
    if let Err(e) = game.resume() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    // Tap to play, then tap around the screen at human-ish intervals
    let mut rng = rand::rng();
    let deadline = Instant::now() + Duration::from_secs(demo_secs);
    input.send(PointerEvent::release(
        SCREEN_WIDTH as f32 / 2.0,
        SCREEN_HEIGHT as f32 / 2.0,
    ));
    while Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(rng.random_range(150..600)));
        let tap = PointerEvent::release(
            rng.random_range(0.0..SCREEN_WIDTH as f32),
            rng.random_range(0.0..SCREEN_HEIGHT as f32),
        );
        if !input.send(tap) {
            break;
        }
    }

    game.pause();
    if let Some(state) = game.state() {
        log::info!(
            "Demo finished: score {}, {:?} after {} ticks",
            state.score,
            state.phase,
            state.time_ticks
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The engine is a library on the web; the host page drives it
}
