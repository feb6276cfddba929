//! Software rendering module
//!
//! Everything is drawn on the CPU into a single RGBA byte buffer that the
//! platform layer uploads once per frame.

pub mod canvas;
pub mod shapes;

pub use canvas::{Color, PixelCanvas, colors};
pub use shapes::{fill_background, fill_circle, fill_rectangle};
