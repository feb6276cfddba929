//! Pixel Pong - a two-paddle ball game drawn pixel by pixel
//!
//! Core modules:
//! - `renderer`: Software rasterizer (RGBA pixel canvas + shape fills)
//! - `sim`: Entities and their per-frame update rules
//! - `game`: Fixed-cadence game loop state machine
//! - `platform`: Presentation surface boundary (window, input, frame upload)
//! - `settings`: Data-driven window and initial layout

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{GameLoop, LoopState};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Pixel Pong";

    /// Fixed delay after each presented frame (~60 Hz nominal)
    pub const FRAME_DELAY_MS: u64 = 16;

    /// Bytes per canvas pixel (r, g, b, unused)
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    /// Vertical distance per tick while a move key is held
    pub const PADDLE_SPEED: f32 = 3.0;
    pub const PLAYER_PADDLE_START: (f32, f32) = (100.0, 100.0);
    pub const AI_PADDLE_START: (f32, f32) = (700.0, 100.0);

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 10;
    pub const BALL_START: (f32, f32) = (300.0, 300.0);
    pub const BALL_START_VELOCITY: (f32, f32) = (5.0, 5.0);
}
