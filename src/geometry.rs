// Eye glyph geometry: everything the overlay draws is a pure function of one
// detection rectangle. Nothing here is cached between draws.

use crate::types::{Color, DetectionRect};

/// Brow thickness as a fraction of the detection height.
pub const BROW_HEIGHT_RATIO: f32 = 0.25;
/// Gap between brow and eye, in brow thicknesses.
pub const BROW_GAP: f32 = 1.15;
/// Horizontal brow overhang on each side, as a fraction of the detection width.
pub const BROW_OVERHANG: f32 = 0.075;
/// Pupil vertical radius is height / this.
pub const PUPIL_HEIGHT_DIVISOR: f32 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Float rectangle stored as two corners (x1,y1) top-left, (x2,y2) bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectf {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rectf {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Grow by `amount` on every side (x on left and right, y on top and bottom).
    pub fn inflate(&mut self, amount: Vec2) {
        self.x1 -= amount.x;
        self.x2 += amount.x;
        self.y1 -= amount.y;
        self.y2 += amount.y;
    }
}

impl From<DetectionRect> for Rectf {
    fn from(r: DetectionRect) -> Self {
        let (x1, y1) = r.tl();
        let (x2, y2) = r.br();
        Rectf::new(x1 as f32, y1 as f32, x2 as f32, y2 as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radius_x: f32,
    pub radius_y: f32,
}

/// One drawing command of a glyph, with the color it is drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    SolidCircle(Circle, Color),
    SolidEllipse(Ellipse, Color),
    StrokedCircle(Circle, Color),
    SolidRect(Rectf, Color),
}

/// The cartoon eye drawn over one detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeGlyph {
    pub white: Circle,
    pub pupil: Ellipse,
    pub highlight: Circle,
    pub outline: Circle,
    pub brow: Rectf,
}

impl EyeGlyph {
    pub fn from_detection(detection: DetectionRect) -> Self {
        let bounds = Rectf::from(detection);
        let w = bounds.width();
        let h = bounds.height();

        // The pupil and highlight walk this point around.
        let mut center = bounds.center();
        let white = Circle { center, radius: w / 2.0 };

        center.y += h / 4.0;
        let pupil = Ellipse { center, radius_x: w / 2.0, radius_y: h / PUPIL_HEIGHT_DIVISOR };

        center.y -= h / 4.0;
        center.x += w / 4.0;
        let highlight = Circle { center, radius: w / 8.0 };

        let outline = Circle { center: bounds.center(), radius: w / 2.0 };

        let brow_height = h * BROW_HEIGHT_RATIO;
        let mut brow = bounds;
        brow.y1 = bounds.y1 - brow_height * BROW_GAP;
        brow.y2 = brow.y1 + brow_height;
        brow.inflate(Vec2::new(w * BROW_OVERHANG, 0.0));

        Self { white, pupil, highlight, outline, brow }
    }

    /// Commands in paint order; later ones sit on top.
    pub fn primitives(&self) -> [Primitive; 5] {
        [
            Primitive::SolidCircle(self.white, Color::WHITE),
            Primitive::SolidEllipse(self.pupil, Color::BLACK),
            Primitive::SolidCircle(self.highlight, Color::WHITE),
            Primitive::StrokedCircle(self.outline, Color::BLACK),
            Primitive::SolidRect(self.brow, Color::BLACK),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn glyph(x: i32, y: i32, w: i32, h: i32) -> EyeGlyph {
        EyeGlyph::from_detection(DetectionRect::new(x, y, w, h))
    }

    #[test]
    fn square_detection_matches_reference_numbers() {
        let g = glyph(10, 10, 40, 40);

        assert_eq!(g.white.center, Vec2::new(30.0, 30.0));
        assert_eq!(g.white.radius, 20.0);

        assert_eq!(g.pupil.center, Vec2::new(30.0, 40.0));
        assert_eq!(g.pupil.radius_x, 20.0);
        assert!(close(g.pupil.radius_y, 16.0));

        assert_eq!(g.highlight.center, Vec2::new(40.0, 30.0));
        assert_eq!(g.highlight.radius, 5.0);

        assert!(close(g.brow.y1, -1.5));
        assert!(close(g.brow.y2, 8.5));
        assert!(close(g.brow.x1, 7.0));
        assert!(close(g.brow.x2, 53.0));
    }

    #[test]
    fn white_and_outline_coincide() {
        for (x, y, w, h) in [(0, 0, 10, 10), (5, 17, 33, 21), (100, 40, 64, 80)] {
            let g = glyph(x, y, w, h);
            assert_eq!(g.white.center, g.outline.center);
            assert_eq!(g.white.radius, g.outline.radius);
            assert_eq!(g.white.radius, w as f32 / 2.0);
        }
    }

    #[test]
    fn pupil_drops_by_a_quarter_height() {
        let g = glyph(5, 17, 33, 21);
        assert_eq!(g.pupil.center.x, g.white.center.x);
        assert!(close(g.pupil.center.y - g.white.center.y, 21.0 / 4.0));
    }

    #[test]
    fn highlight_is_right_of_center_at_center_height() {
        let g = glyph(5, 17, 33, 21);
        assert!(close(g.highlight.center.x, g.pupil.center.x + 33.0 / 4.0));
        assert!(close(g.highlight.center.y, g.pupil.center.y - 21.0 / 4.0));
        assert!(close(g.highlight.center.y, g.white.center.y));
        assert!(close(g.highlight.radius, 33.0 / 8.0));
    }

    #[test]
    fn brow_floats_above_the_box() {
        let (top, h) = (17, 21);
        let g = glyph(5, top, 33, h);
        let unit = h as f32 / 4.0;
        assert!(close(top as f32 - g.brow.y1, 1.15 * unit));
        assert!(close(g.brow.height(), unit));
        assert!(g.brow.y2 < top as f32);
        assert!(close(g.brow.x1, 5.0 - 33.0 * 0.075));
        assert!(close(g.brow.x2, 38.0 + 33.0 * 0.075));
    }

    #[test]
    fn primitives_come_in_paint_order() {
        let g = glyph(10, 10, 40, 40);
        let p = g.primitives();
        assert_eq!(p[0], Primitive::SolidCircle(g.white, Color::WHITE));
        assert_eq!(p[1], Primitive::SolidEllipse(g.pupil, Color::BLACK));
        assert_eq!(p[2], Primitive::SolidCircle(g.highlight, Color::WHITE));
        assert_eq!(p[3], Primitive::StrokedCircle(g.outline, Color::BLACK));
        assert_eq!(p[4], Primitive::SolidRect(g.brow, Color::BLACK));
    }

    #[test]
    fn same_detection_same_glyph() {
        let d = DetectionRect::new(3, 4, 50, 60);
        assert_eq!(EyeGlyph::from_detection(d), EyeGlyph::from_detection(d));
    }
}
