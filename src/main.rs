//! Pixel Pong entry point
//!
//! Sets up logging, settings and the presentation surface, then runs the
//! game loop until the window is closed.

use pixel_pong::{GameLoop, Settings};

#[cfg(feature = "sdl")]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use pixel_pong::platform::SdlSurface;

    env_logger::init();
    log::info!("Pixel Pong starting...");

    let settings = Settings::load();
    let mut surface = SdlSurface::new(&settings.title, settings.width, settings.height)
        .context("could not open the game window")?;

    let mut game = GameLoop::new(&settings);
    game.run(&mut surface);

    log::info!("Pixel Pong exiting after {} frames", game.frames());
    Ok(())
}

#[cfg(not(feature = "sdl"))]
fn main() {
    use pixel_pong::platform::HeadlessSurface;

    /// Frames to simulate without a window (~5 s at the default cadence)
    const HEADLESS_FRAMES: u64 = 300;

    env_logger::init();
    log::info!("Pixel Pong (headless) starting...");
    log::info!("Window output requires the `sdl` feature - run with `cargo run --features sdl`");

    let settings = Settings::load();
    let mut surface =
        HeadlessSurface::new(settings.width, settings.height).with_frame_limit(HEADLESS_FRAMES);

    let mut game = GameLoop::new(&settings);
    game.run(&mut surface);

    log::info!(
        "Simulated {} frames; ball at ({:.1}, {:.1})",
        surface.frames_presented(),
        game.ball.pos.x,
        game.ball.pos.y
    );
}
