//! Entity state and per-frame behavior
//!
//! Entities are built once at startup and mutated in place every frame.
//! There is no ball/paddle collision: the ball only bounces off the outer
//! canvas walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::TickInput;
use crate::consts::*;
use crate::renderer::{Color, PixelCanvas, colors, fill_circle, fill_rectangle};

/// Entity position in canvas pixels (x right, y down)
pub type Position = Vec2;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball
    pub pos: Position,
    pub radius: i32,
    /// Displacement per tick
    pub vel: Vec2,
    pub color: Color,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(
            Vec2::from(BALL_START),
            BALL_RADIUS,
            Vec2::from(BALL_START_VELOCITY),
            colors::WHITE,
        )
    }
}

impl Ball {
    pub fn new(pos: Position, radius: i32, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            radius,
            vel,
            color,
        }
    }

    /// Move by one tick of velocity, then bounce off the canvas walls.
    ///
    /// Each axis is checked on its own against the truncated position, so a
    /// corner hit flips both components. The ball is not pushed back inside;
    /// a fast ball may end a tick past the wall.
    pub fn update(&mut self, width: u32, height: u32) {
        self.pos += self.vel;

        // Widened so far-off positions and large radii cannot overflow
        let x = i64::from(self.pos.x as i32);
        let y = i64::from(self.pos.y as i32);
        let radius = i64::from(self.radius);

        if y - radius < 0 || y + radius > i64::from(height) {
            self.vel.y = -self.vel.y;
        }
        if x - radius < 0 || x + radius > i64::from(width) {
            self.vel.x = -self.vel.x;
        }
    }

    pub fn draw(&self, canvas: &mut PixelCanvas) {
        fill_circle(
            self.pos.x as i32,
            self.pos.y as i32,
            self.radius,
            self.color,
            canvas,
        );
    }
}

/// A paddle; `pos` is the center of its rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Position,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: Position, width: i32, height: i32, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            color,
        }
    }

    /// The human-controlled paddle at its starting spot
    pub fn player() -> Self {
        Self::new(
            Vec2::from(PLAYER_PADDLE_START),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            colors::WHITE,
        )
    }

    /// The computer-controlled paddle at its starting spot
    pub fn opponent() -> Self {
        Self::new(
            Vec2::from(AI_PADDLE_START),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            colors::WHITE,
        )
    }

    /// Apply held move keys. Both keys together cancel out; nothing keeps
    /// the paddle on screen.
    pub fn update(&mut self, input: &TickInput) {
        if input.move_up {
            self.pos.y -= PADDLE_SPEED;
        }
        if input.move_down {
            self.pos.y += PADDLE_SPEED;
        }
    }

    /// Track the ball perfectly
    pub fn ai_update(&mut self, ball: &Ball) {
        self.pos.y = ball.pos.y;
    }

    pub fn draw(&self, canvas: &mut PixelCanvas) {
        let start_x = (self.pos.x as i32).saturating_sub(self.width / 2);
        let start_y = (self.pos.y as i32).saturating_sub(self.height / 2);
        fill_rectangle(
            start_x,
            start_y,
            self.width,
            self.height,
            self.color,
            canvas,
        );
    }
}
