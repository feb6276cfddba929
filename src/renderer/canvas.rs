//! RGBA pixel canvas for software rendering

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::consts::BYTES_PER_PIXEL;

/// 24-bit color, laid out exactly as the first three bytes of a canvas pixel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::new(150, 100, 200);
    pub const WHITE: Color = Color::new(255, 255, 255);
}

/// Row-major RGBA byte buffer, origin top-left, 4 bytes per pixel
///
/// Only the color bytes of a pixel are ever written; the 4th byte keeps
/// whatever it was allocated with.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelCanvas {
    /// Create a zeroed canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw frame bytes, ready for a texture upload with pitch `width * 4`
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte offset of pixel (x, y); may be negative or past the end
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> i64 {
        (i64::from(y) * i64::from(self.width) + i64::from(x)) * BYTES_PER_PIXEL as i64
    }

    /// Whether a write at byte offset `index` lands in the buffer.
    ///
    /// The upper bound is exclusive of the last pixel slot, so the final
    /// pixel of the buffer is never written.
    #[inline]
    fn accepts(&self, index: i64) -> bool {
        index >= 0 && index < self.pixels.len() as i64 - BYTES_PER_PIXEL as i64
    }

    /// Write the color bytes of pixel (x, y).
    ///
    /// Offsets outside the buffer are dropped silently. Only the byte offset
    /// is checked, so an `x` past the row width spills onto the next row.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index = self.index_of(x, y);
        if self.accepts(index) {
            let start = index as usize;
            self.pixels[start..start + 3].copy_from_slice(bytemuck::bytes_of(&color));
        }
    }

    /// Read back the color bytes of pixel (x, y), if its offset is writable
    #[cfg(test)]
    pub(crate) fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index_of(x, y);
        if !self.accepts(index) {
            return None;
        }
        let start = index as usize;
        Some(*bytemuck::from_bytes(&self.pixels[start..start + 3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: u32 = 40;
    const H: u32 = 30;

    #[test]
    fn test_new_canvas_is_zeroed() {
        let canvas = PixelCanvas::new(W, H);
        assert_eq!(canvas.as_bytes().len(), (W * H * 4) as usize);
        assert!(canvas.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_layout() {
        let mut canvas = PixelCanvas::new(W, H);
        canvas.set_pixel(3, 2, Color::new(10, 20, 30));

        let index = ((2 * W + 3) * 4) as usize;
        assert_eq!(&canvas.as_bytes()[index..index + 4], &[10, 20, 30, 0]);
        assert_eq!(canvas.color_at(3, 2), Some(Color::new(10, 20, 30)));
    }

    #[test]
    fn test_last_pixel_is_never_written() {
        let mut canvas = PixelCanvas::new(W, H);
        canvas.set_pixel(W as i32 - 1, H as i32 - 1, colors::WHITE);
        assert!(canvas.as_bytes().iter().all(|&b| b == 0));

        // The one before it is fine
        canvas.set_pixel(W as i32 - 2, H as i32 - 1, colors::WHITE);
        assert_eq!(canvas.color_at(W as i32 - 2, H as i32 - 1), Some(colors::WHITE));
    }

    #[test]
    fn test_negative_offsets_are_dropped() {
        let mut canvas = PixelCanvas::new(W, H);
        canvas.set_pixel(-1, 0, colors::WHITE);
        canvas.set_pixel(0, -1, colors::WHITE);
        canvas.set_pixel(i32::MIN, i32::MIN, colors::WHITE);
        assert!(canvas.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_x_past_row_spills_to_next_row() {
        let mut canvas = PixelCanvas::new(W, H);
        canvas.set_pixel(W as i32, 0, colors::WHITE);
        assert_eq!(canvas.color_at(0, 1), Some(colors::WHITE));

        // Negative x on a later row lands at the end of the previous row
        canvas.set_pixel(-1, 2, colors::BACKGROUND);
        assert_eq!(canvas.color_at(W as i32 - 1, 1), Some(colors::BACKGROUND));
    }

    proptest! {
        #[test]
        fn prop_set_pixel_in_range(x in 0i32..(W as i32), y in 0i32..(H as i32), r: u8, g: u8, b: u8) {
            let mut canvas = PixelCanvas::new(W, H);
            let color = Color::new(r, g, b);
            canvas.set_pixel(x, y, color);

            let index = canvas.index_of(x, y);
            let last = (W * H * 4) as i64 - 4;
            if index < last {
                prop_assert_eq!(canvas.color_at(x, y), Some(color));
                prop_assert_eq!(canvas.as_bytes()[index as usize + 3], 0);
            } else {
                prop_assert!(canvas.as_bytes().iter().all(|&b| b == 0));
            }
        }

        #[test]
        fn prop_set_pixel_out_of_range_is_noop(
            x in -10_000i32..10_000,
            y in prop_oneof![-10_000i32..0, (H as i32)..10_000],
        ) {
            let mut canvas = PixelCanvas::new(W, H);
            let index = canvas.index_of(x, y);
            prop_assume!(index < 0 || index >= (W * H * 4) as i64 - 4);

            canvas.set_pixel(x, y, colors::WHITE);
            prop_assert!(canvas.as_bytes().iter().all(|&b| b == 0));
        }
    }
}
