//! The drawing capabilities the overlay needs.
//!
//! Color is state: every primitive is drawn in whatever color the last
//! `set_color` call chose, the same way an immediate-mode GL context works.

use crate::geometry::{Rectf, Vec2};
use crate::surface::DisplaySurface;
use crate::types::Color;

pub trait Canvas {
    fn set_color(&mut self, color: Color);

    /// Stretch the surface over the whole viewport, tinted by the current color.
    fn draw_image(&mut self, surface: &DisplaySurface);

    fn draw_solid_circle(&mut self, center: Vec2, radius: f32);

    fn draw_solid_ellipse(&mut self, center: Vec2, radius_x: f32, radius_y: f32);

    /// One pixel wide circle outline.
    fn draw_stroked_circle(&mut self, center: Vec2, radius: f32);

    fn draw_solid_rect(&mut self, rect: Rectf);
}
