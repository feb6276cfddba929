//! SDL2 presentation surface
//!
//! One window, one accelerated renderer and one ABGR8888 streaming texture.
//! On little-endian hosts ABGR8888 stores bytes as r, g, b, a, which is the
//! canvas layout.

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};

use super::{PlatformError, PlatformEvent, PresentationSurface};
use crate::consts::BYTES_PER_PIXEL;
use crate::sim::TickInput;

pub struct SdlSurface {
    // `unsafe_textures` textures have no Drop; SDL frees this one when the
    // renderer owned by `canvas` is destroyed.
    texture: Texture,
    _texture_creator: TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    _context: Sdl,
    width: u32,
    height: u32,
}

impl SdlSurface {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, PlatformError> {
        let context = sdl2::init().map_err(PlatformError::Init)?;
        let video_subsystem = context.video().map_err(PlatformError::Init)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| PlatformError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| PlatformError::Renderer(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| PlatformError::Texture(e.to_string()))?;

        let event_pump = context.event_pump().map_err(PlatformError::Init)?;

        log::debug!("SDL surface ready: {width}x{height} ABGR8888 streaming texture");

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            _context: context,
            width,
            height,
        })
    }
}

impl PresentationSurface for SdlSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn poll_events(&mut self) -> impl Iterator<Item = PlatformEvent> + '_ {
        self.event_pump.poll_iter().map(|event| match event {
            Event::Quit { .. } => PlatformEvent::Quit,
            _ => PlatformEvent::Other,
        })
    }

    fn keyboard_state(&self) -> TickInput {
        let keys = self.event_pump.keyboard_state();
        TickInput {
            move_up: keys.is_scancode_pressed(Scancode::Up),
            move_down: keys.is_scancode_pressed(Scancode::Down),
        }
    }

    fn upload_frame(&mut self, pixels: &[u8]) -> Result<(), PlatformError> {
        let pitch = self.width as usize * BYTES_PER_PIXEL;
        self.texture
            .update(None, pixels, pitch)
            .map_err(|e| PlatformError::Upload(e.to_string()))?;
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(PlatformError::Upload)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
