// The frame as the window wants it: packed 0x00RRGGBB, allocated once.

use crate::types::{Frame, FrameBuffer};

pub struct DisplaySurface {
    buffer: FrameBuffer,
}

impl DisplaySurface {
    /// Allocate a black surface. This is the only allocation it ever makes.
    pub fn create(width: usize, height: usize) -> Self {
        Self { buffer: FrameBuffer::new(width, height) }
    }

    /// Overwrite the surface with `frame`.
    /// A frame of another size is nearest-neighbour resampled to fit.
    pub fn update(&mut self, frame: &Frame) {
        let (w, h) = (self.buffer.width, self.buffer.height);
        if w == 0 || h == 0 {
            return;
        }
        let src = &frame.image;
        let (sw, sh) = (src.width() as usize, src.height() as usize);
        if sw == 0 || sh == 0 {
            return;
        }

        if sw == w && sh == h {
            // Each `pixel` is RGB<u8>. We pack it as 0x00RRGGBB.
            for (dst, pixel) in self.buffer.pixels.iter_mut().zip(src.pixels()) {
                *dst = pack(pixel.0);
            }
            return;
        }

        for y in 0..h {
            let sy = (y * sh / h) as u32;
            let row = y * w;
            for x in 0..w {
                let sx = (x * sw / w) as u32;
                self.buffer.pixels[row + x] = pack(src.get_pixel(sx, sy).0);
            }
        }
    }

    pub fn width(&self) -> usize {
        self.buffer.width
    }

    pub fn height(&self) -> usize {
        self.buffer.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.buffer.pixels
    }
}

#[inline]
fn pack([r, g, b]: [u8; 3]) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
