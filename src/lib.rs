//! Cartoon Eyes
//!
//! Grabs webcam frames, finds eyes with an OpenCV cascade classifier and
//! paints a cartoon eye over every hit.
//!
//! Each tick runs [`FrameLoop::update`] (poll camera, grayscale, detect,
//! upload) and then [`overlay::draw_scene`] (image, then one glyph per
//! detection) on the same thread.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod detector;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod overlay;
pub mod raster;
pub mod surface;
pub mod types;
pub mod window;

pub use camera::{CameraCapture, CaptureSource};
pub use canvas::Canvas;
pub use config::AppConfig;
pub use detector::Detector;
#[cfg(feature = "cascade")]
pub use detector::CascadeDetector;
pub use error::Error;
pub use frame_loop::{FrameLoop, Scene};
pub use geometry::EyeGlyph;
pub use raster::Raster;
pub use surface::DisplaySurface;
pub use types::{Color, DetectionRect, Frame, FrameBuffer};
pub use window::Drawer;
