//! In-memory presentation surface
//!
//! Keeps the last uploaded frame, replays a scripted key state and can ask
//! the loop to quit once a given number of frames has been presented.

use std::collections::VecDeque;

use super::{PlatformError, PlatformEvent, PresentationSurface};
use crate::consts::BYTES_PER_PIXEL;
use crate::sim::TickInput;

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    keys: TickInput,
    pending: VecDeque<PlatformEvent>,
    quit_after: Option<u64>,
    frames_presented: u64,
    uploaded: Vec<u8>,
    shown: Vec<u8>,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            keys: TickInput::default(),
            pending: VecDeque::new(),
            quit_after: None,
            frames_presented: 0,
            uploaded: Vec::new(),
            shown: Vec::new(),
        }
    }

    /// Raise `Quit` on the first poll after `frames` frames were presented
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    pub fn set_keys(&mut self, keys: TickInput) {
        self.keys = keys;
    }

    pub fn push_event(&mut self, event: PlatformEvent) {
        self.pending.push_back(event);
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Bytes of the most recently presented frame (empty before the first)
    pub fn last_frame(&self) -> &[u8] {
        &self.shown
    }
}

impl PresentationSurface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn poll_events(&mut self) -> impl Iterator<Item = PlatformEvent> + '_ {
        if self
            .quit_after
            .is_some_and(|limit| self.frames_presented >= limit)
        {
            self.pending.push_back(PlatformEvent::Quit);
        }
        self.pending.drain(..)
    }

    fn keyboard_state(&self) -> TickInput {
        self.keys
    }

    fn upload_frame(&mut self, pixels: &[u8]) -> Result<(), PlatformError> {
        let expected = self.width as usize * self.height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(PlatformError::Upload(format!(
                "expected {expected} bytes, got {}",
                pixels.len()
            )));
        }
        self.uploaded.clear();
        self.uploaded.extend_from_slice(pixels);
        Ok(())
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.shown, &mut self.uploaded);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_after_frame_limit() {
        let mut surface = HeadlessSurface::new(2, 2).with_frame_limit(1);
        assert_eq!(surface.poll_events().count(), 0);

        surface.upload_frame(&[7; 16]).unwrap();
        surface.present();
        let events: Vec<_> = surface.poll_events().collect();
        assert_eq!(events, vec![PlatformEvent::Quit]);
        assert_eq!(surface.last_frame(), &[7; 16]);
    }

    #[test]
    fn test_events_are_drained() {
        let mut surface = HeadlessSurface::new(2, 2);
        surface.push_event(PlatformEvent::Other);
        surface.push_event(PlatformEvent::Quit);
        assert_eq!(surface.poll_events().count(), 2);
        assert_eq!(surface.poll_events().count(), 0);
    }

    #[test]
    fn test_upload_rejects_wrong_size() {
        let mut surface = HeadlessSurface::new(2, 2);
        assert!(matches!(
            surface.upload_frame(&[0; 12]),
            Err(PlatformError::Upload(_))
        ));
    }
}
