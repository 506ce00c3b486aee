// Software backend for `Canvas`: rasterizes straight into the window buffer.
// A pixel (x, y) belongs to a shape when its center (x + 0.5, y + 0.5) does.

use crate::canvas::Canvas;
use crate::geometry::{Rectf, Vec2};
use crate::surface::DisplaySurface;
use crate::types::{Color, FrameBuffer};

pub struct Raster<'a> {
    fb: &'a mut FrameBuffer,
    color: Color,
}

impl<'a> Raster<'a> {
    pub fn new(fb: &'a mut FrameBuffer) -> Self {
        Self { fb, color: Color::WHITE }
    }

    /// Pixel rows/columns whose centers can fall in [lo, hi], clipped to `len`.
    fn span(lo: f32, hi: f32, len: usize) -> std::ops::Range<usize> {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = ((hi - 0.5).floor() + 1.0).min(len as f32);
        if !(start < end) {
            return 0..0;
        }
        start as usize..end as usize
    }

    /// Fill every pixel whose center satisfies `inside(dx, dy)`, where (dx, dy)
    /// is measured from `center`. Only the box `center ± (rx, ry)` is scanned.
    fn fill_where(&mut self, center: Vec2, rx: f32, ry: f32, inside: impl Fn(f32, f32) -> bool) {
        let color = self.color.to_u32();
        let xs = Self::span(center.x - rx, center.x + rx, self.fb.width);
        let ys = Self::span(center.y - ry, center.y + ry, self.fb.height);
        for y in ys {
            let dy = y as f32 + 0.5 - center.y;
            let row = y * self.fb.width;
            for x in xs.clone() {
                let dx = x as f32 + 0.5 - center.x;
                if inside(dx, dy) {
                    self.fb.pixels[row + x] = color;
                }
            }
        }
    }
}

impl Canvas for Raster<'_> {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_image(&mut self, surface: &DisplaySurface) {
        let (w, h) = (self.fb.width, self.fb.height);
        let (sw, sh) = (surface.width(), surface.height());
        if sw == 0 || sh == 0 {
            return;
        }
        let src = surface.pixels();
        let tint = self.color;
        if sw == w && sh == h {
            for (dst, &px) in self.fb.pixels.iter_mut().zip(src) {
                *dst = tint.tint(px);
            }
            return;
        }
        for y in 0..h {
            let srow = (y * sh / h) * sw;
            let row = y * w;
            for x in 0..w {
                self.fb.pixels[row + x] = tint.tint(src[srow + x * sw / w]);
            }
        }
    }

    fn draw_solid_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        self.fill_where(center, radius, radius, |dx, dy| dx * dx + dy * dy <= r2);
    }

    fn draw_solid_ellipse(&mut self, center: Vec2, radius_x: f32, radius_y: f32) {
        if radius_x <= 0.0 || radius_y <= 0.0 {
            return;
        }
        self.fill_where(center, radius_x, radius_y, |dx, dy| {
            let nx = dx / radius_x;
            let ny = dy / radius_y;
            nx * nx + ny * ny <= 1.0
        });
    }

    fn draw_stroked_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        let outer = radius + 0.5;
        self.fill_where(center, outer, outer, |dx, dy| {
            ((dx * dx + dy * dy).sqrt() - radius).abs() <= 0.5
        });
    }

    fn draw_solid_rect(&mut self, rect: Rectf) {
        let color = self.color.to_u32();
        let xs = Self::span(rect.x1, rect.x2, self.fb.width);
        let ys = Self::span(rect.y1, rect.y2, self.fb.height);
        for y in ys {
            let row = y * self.fb.width;
            self.fb.pixels[row + xs.start..row + xs.end].fill(color);
        }
    }
}
