//! Filled 2D primitives rasterized straight into a `PixelCanvas`
//!
//! None of these clip: every candidate pixel goes through
//! `PixelCanvas::set_pixel`, which drops writes outside the buffer.

use super::canvas::{Color, PixelCanvas};

/// Paint every pixel of the canvas, row by row
pub fn fill_background(color: Color, canvas: &mut PixelCanvas) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    for y in 0..height {
        for x in 0..width {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Fill the half-open box [x, x + w) x [y, y + h)
pub fn fill_rectangle(x: i32, y: i32, w: i32, h: i32, color: Color, canvas: &mut PixelCanvas) {
    for j in y..y.saturating_add(h) {
        for i in x..x.saturating_add(w) {
            canvas.set_pixel(i, j, color);
        }
    }
}

/// Fill a disk of radius `r` around (cx, cy).
///
/// Candidates come from the half-open box [cx - r, cx + r) x [cy - r, cy + r)
/// and are kept when their squared distance is <= r². The right and bottom
/// rims are therefore one pixel short of a symmetric disk.
pub fn fill_circle(cx: i32, cy: i32, r: i32, color: Color, canvas: &mut PixelCanvas) {
    let r_sq = i64::from(r) * i64::from(r);
    for j in cy.saturating_sub(r)..cy.saturating_add(r) {
        for i in cx.saturating_sub(r)..cx.saturating_add(r) {
            let dx = i64::from(i) - i64::from(cx);
            let dy = i64::from(j) - i64::from(cy);
            if dx * dx + dy * dy <= r_sq {
                canvas.set_pixel(i, j, color);
            }
        }
    }
}
