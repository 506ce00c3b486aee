// Draw stage: camera image first, then one cartoon eye per detection.

use crate::canvas::Canvas;
use crate::frame_loop::Scene;
use crate::geometry::{EyeGlyph, Primitive};
use crate::types::Color;

/// Draw the whole scene. Reads the scene only, so drawing it twice gives the
/// same picture.
pub fn draw_scene<C: Canvas + ?Sized>(canvas: &mut C, scene: &Scene) {
    // Restore white or the camera image comes out tinted.
    canvas.set_color(Color::WHITE);
    canvas.draw_image(&scene.surface);

    for detection in &scene.detections {
        draw_glyph(canvas, &EyeGlyph::from_detection(*detection));
    }
}

pub fn draw_glyph<C: Canvas + ?Sized>(canvas: &mut C, glyph: &EyeGlyph) {
    for primitive in glyph.primitives() {
        match primitive {
            Primitive::SolidCircle(c, color) => {
                canvas.set_color(color);
                canvas.draw_solid_circle(c.center, c.radius);
            }
            Primitive::SolidEllipse(e, color) => {
                canvas.set_color(color);
                canvas.draw_solid_ellipse(e.center, e.radius_x, e.radius_y);
            }
            Primitive::StrokedCircle(c, color) => {
                canvas.set_color(color);
                canvas.draw_stroked_circle(c.center, c.radius);
            }
            Primitive::SolidRect(r, color) => {
                canvas.set_color(color);
                canvas.draw_solid_rect(r);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;
    use crate::types::{DetectionRect, Frame, FrameBuffer};
    use image::{Rgb, RgbImage};

    fn scene_with(detections: Vec<DetectionRect>) -> Scene {
        let mut scene = Scene::new(64, 48);
        scene
            .surface
            .update(&Frame::new(RgbImage::from_pixel(64, 48, Rgb([0x40, 0x80, 0xC0])), 0));
        scene.detections = detections;
        scene
    }

    #[test]
    fn no_detections_shows_only_the_camera() {
        let scene = scene_with(Vec::new());
        let mut fb = FrameBuffer::new(64, 48);
        draw_scene(&mut Raster::new(&mut fb), &scene);
        assert!(fb.pixels.iter().all(|&p| p == 0x0040_80C0));
    }

    #[test]
    fn eye_paints_white_pupil_highlight_and_brow() {
        let scene = scene_with(vec![DetectionRect::new(10, 10, 40, 40)]);
        let mut fb = FrameBuffer::new(64, 48);
        draw_scene(&mut Raster::new(&mut fb), &scene);
        let at = |x: usize, y: usize| fb.pixels[y * 64 + x];

        // White above the pupil, inside the disk.
        assert_eq!(at(30, 14), 0x00FF_FFFF);
        // Pupil just below the center.
        assert_eq!(at(30, 40), 0);
        // Highlight sits right of center.
        assert_eq!(at(40, 30), 0x00FF_FFFF);
        // Brow band spans y 0..8 and overhangs the box.
        assert_eq!(at(8, 4), 0);
        assert_eq!(at(52, 4), 0);
        // Outside everything: camera.
        assert_eq!(at(60, 45), 0x0040_80C0);
    }

    #[test]
    fn drawing_twice_is_identical() {
        let scene = scene_with(vec![DetectionRect::new(5, 12, 20, 16), DetectionRect::new(30, 8, 24, 24)]);
        let mut first = FrameBuffer::new(64, 48);
        let mut second = FrameBuffer::new(64, 48);
        draw_scene(&mut Raster::new(&mut first), &scene);
        draw_scene(&mut Raster::new(&mut second), &scene);
        assert_eq!(first, second);
    }
}
