//! Game entities and their per-frame rules
//!
//! Pure state updates only: no window, no timing. Drawing goes through the
//! software rasterizer in `crate::renderer`.

pub mod state;
pub mod tick;

pub use state::{Ball, Paddle, Position};
pub use tick::TickInput;
