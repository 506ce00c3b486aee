//! The per-tick update stage: poll the camera, detect, upload.

use image::imageops;

use crate::camera::CaptureSource;
use crate::detector::Detector;
use crate::surface::DisplaySurface;
use crate::types::DetectionRect;

/// What the draw stage reads: the latest uploaded frame and the detections
/// found in that same frame.
pub struct Scene {
    pub surface: DisplaySurface,
    pub detections: Vec<DetectionRect>,
    /// Sequence number of the frame both fields came from.
    pub frame_sequence: Option<u64>,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            surface: DisplaySurface::create(width, height),
            detections: Vec::new(),
            frame_sequence: None,
        }
    }
}

pub struct FrameLoop<C, D> {
    capture: C,
    detector: D,
    scene: Scene,
}

impl<C: CaptureSource, D: Detector> FrameLoop<C, D> {
    /// `capture` must already be started; the surface is sized to its resolution.
    pub fn new(capture: C, detector: D) -> Self {
        let (w, h) = capture.resolution();
        let scene = Scene::new(w as usize, h as usize);
        Self { capture, detector, scene }
    }

    /// Run one tick. Returns true when a new frame was consumed; otherwise the
    /// scene is left exactly as it was.
    pub fn update(&mut self) -> bool {
        if !self.capture.check_new_frame() {
            return false;
        }
        let Some(frame) = self.capture.surface() else {
            return false;
        };

        let gray = imageops::grayscale(&frame.image);
        self.scene.detections = match self.detector.detect_multi_scale(&gray) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Frame {}: {e}; drawing it without detections", frame.sequence);
                Vec::new()
            }
        };
        log::debug!("Frame {}: {} detections", frame.sequence, self.scene.detections.len());

        self.scene.surface.update(&frame);
        self.scene.frame_sequence = Some(frame.sequence);
        true
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}
