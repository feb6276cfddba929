//! Platform abstraction layer
//!
//! The game loop only talks to a `PresentationSurface`:
//! - Pending window events (at least a quit request)
//! - Held-key snapshot for the player paddle
//! - Frame upload + present

use std::fmt;

use crate::sim::TickInput;

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use headless::HeadlessSurface;
#[cfg(feature = "sdl")]
pub use sdl::SdlSurface;

/// Window events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window closed / quit requested
    Quit,
    /// Anything else; drained and ignored
    Other,
}

/// Presentation surface failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Platform library or event pump could not start
    Init(String),
    /// Window creation failed
    Window(String),
    /// Renderer creation failed
    Renderer(String),
    /// Streaming texture creation failed
    Texture(String),
    /// A frame could not be uploaded or copied to the render target
    Upload(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Init(e) => write!(f, "platform init failed: {e}"),
            PlatformError::Window(e) => write!(f, "window creation failed: {e}"),
            PlatformError::Renderer(e) => write!(f, "renderer creation failed: {e}"),
            PlatformError::Texture(e) => write!(f, "texture creation failed: {e}"),
            PlatformError::Upload(e) => write!(f, "frame upload failed: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Something that can show a finished RGBA frame and report input
pub trait PresentationSurface {
    /// Render target size in pixels
    fn size(&self) -> (u32, u32);

    /// Drain the events queued since the last call
    fn poll_events(&mut self) -> impl Iterator<Item = PlatformEvent> + '_;

    /// Which move keys are currently held
    fn keyboard_state(&self) -> TickInput;

    /// Make `pixels` (row-major, 4 bytes per pixel, 4th byte ignored) the
    /// next frame to show
    fn upload_frame(&mut self, pixels: &[u8]) -> Result<(), PlatformError>;

    /// Flip the uploaded frame onto the screen
    fn present(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlatformError::Window("no display".into());
        assert_eq!(err.to_string(), "window creation failed: no display");
    }
}
