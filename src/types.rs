// Core types shared by capture, detection and drawing.

use std::time::Instant;

use image::RgbImage;

/// Packed pixels ready for the window.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// One color snapshot from the camera. Never mutated after capture.
#[derive(Clone, Debug)]
pub struct Frame {
    pub image: RgbImage,
    /// Counts up from 0 for every frame the capture source produced.
    pub sequence: u64,
    pub captured_at: Instant,
}

impl Frame {
    pub fn new(image: RgbImage, sequence: u64) -> Self {
        Self { image, sequence, captured_at: Instant::now() }
    }
}

/// Axis-aligned box reported by the detector, in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DetectionRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl DetectionRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    pub fn tl(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Bottom-right corner (exclusive).
    pub fn br(&self) -> (i32, i32) {
        (self.x + self.width, self.y + self.height)
    }
}

/// Drawing color, each channel in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB.
    pub fn to_u32(self) -> u32 {
        let r = channel_to_u8(self.r) as u32;
        let g = channel_to_u8(self.g) as u32;
        let b = channel_to_u8(self.b) as u32;
        (r << 16) | (g << 8) | b
    }

    /// Multiply a packed 0x00RRGGBB pixel by this color.
    #[inline]
    pub fn tint(self, px: u32) -> u32 {
        if self == Color::WHITE {
            return px;
        }
        let r = (((px >> 16) & 0xFF) as f32 * self.r.clamp(0.0, 1.0)).round() as u32;
        let g = (((px >> 8) & 0xFF) as f32 * self.g.clamp(0.0, 1.0)).round() as u32;
        let b = ((px & 0xFF) as f32 * self.b.clamp(0.0, 1.0)).round() as u32;
        (r << 16) | (g << 8) | b
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
