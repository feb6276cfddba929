//! Fixed-cadence game loop
//!
//! One thread, one frame at a time: drain events, redraw the whole scene,
//! hand the canvas to the presentation surface, sleep a fixed delay.

use std::time::Duration;

use crate::platform::{PlatformEvent, PresentationSurface};
use crate::renderer::{Color, PixelCanvas, fill_background};
use crate::settings::Settings;
use crate::sim::{Ball, Paddle};

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal; entered when the surface reports a quit request
    Quitting,
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct GameLoop {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    canvas: PixelCanvas,
    background: Color,
    frame_delay: Duration,
    state: LoopState,
    frames: u64,
}

impl GameLoop {
    /// Build the scene from `settings` and paint the first background
    pub fn new(settings: &Settings) -> Self {
        let mut canvas = PixelCanvas::new(settings.width, settings.height);
        fill_background(settings.background, &mut canvas);

        Self {
            player: settings.player.clone(),
            opponent: settings.opponent.clone(),
            ball: settings.ball.clone(),
            canvas,
            background: settings.background,
            frame_delay: settings.frame_delay(),
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames simulated so far, including ones the surface failed to show
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Run one frame. Returns the state after it; once `Quitting`, further
    /// calls do nothing.
    pub fn step<S: PresentationSurface>(&mut self, surface: &mut S) -> LoopState {
        if self.state == LoopState::Quitting {
            return self.state;
        }

        // Drain everything pending, even past a quit request
        let quit = surface
            .poll_events()
            .fold(false, |quit, event| quit || event == PlatformEvent::Quit);
        if quit {
            log::info!("Quit requested after {} frames", self.frames);
            self.state = LoopState::Quitting;
            return self.state;
        }

        let (width, height) = (self.canvas.width(), self.canvas.height());
        fill_background(self.background, &mut self.canvas);

        let input = surface.keyboard_state();
        self.player.update(&input);
        self.player.draw(&mut self.canvas);

        self.opponent.ai_update(&self.ball);
        self.opponent.draw(&mut self.canvas);

        self.ball.update(width, height);
        self.ball.draw(&mut self.canvas);

        match surface.upload_frame(self.canvas.as_bytes()) {
            Ok(()) => surface.present(),
            Err(e) => log::warn!("Frame {} dropped: {e}", self.frames),
        }
        self.frames += 1;

        log::trace!(
            "frame {}: up {} down {}, ball ({:.1}, {:.1}) vel ({:.1}, {:.1})",
            self.frames,
            input.move_up,
            input.move_down,
            self.ball.pos.x,
            self.ball.pos.y,
            self.ball.vel.x,
            self.ball.vel.y,
        );

        self.state
    }

    /// Step until the surface asks to quit, sleeping the fixed frame delay
    /// after every frame
    pub fn run<S: PresentationSurface>(&mut self, surface: &mut S) {
        log::info!(
            "Game loop running at {}x{}, {} ms per frame",
            self.canvas.width(),
            self.canvas.height(),
            self.frame_delay.as_millis()
        );

        while self.step(surface) == LoopState::Running {
            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }
    }
}
