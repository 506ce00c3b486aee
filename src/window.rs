// The on-screen window. minifb only shows pixel buffers; everything drawn in
// it goes through `Raster` first.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Open a window the size of the camera stream.
    /// `target_fps` paces `present`, and with it every update/draw tick.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        log::info!("Window created: {width}x{height} at {target_fps} fps");
        Ok(Self { window })
    }

    /// Show the rasterized scene.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// False once the window has been closed.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// ESC quits the app.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}
