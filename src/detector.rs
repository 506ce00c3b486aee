//! Object detection on grayscale frames.
//!
//! The frame loop only knows the [`Detector`] trait. The production detector is
//! OpenCV's Haar/LBP cascade classifier, available with the `cascade` feature.

use image::GrayImage;

use crate::error::Error;
use crate::types::DetectionRect;

pub trait Detector {
    /// Every region of `gray` the classifier believes holds the target object.
    fn detect_multi_scale(&mut self, gray: &GrayImage) -> Result<Vec<DetectionRect>, Error>;
}

#[cfg(feature = "cascade")]
pub use cascade::CascadeDetector;

#[cfg(feature = "cascade")]
mod cascade {
    use std::path::Path;

    use image::GrayImage;
    use opencv::{
        core::{Mat, Rect, Size, Vector},
        objdetect::CascadeClassifier,
        prelude::*,
    };

    use super::Detector;
    use crate::error::Error;
    use crate::types::DetectionRect;

    // OpenCV's own defaults for detectMultiScale.
    const SCALE_FACTOR: f64 = 1.1;
    const MIN_NEIGHBORS: i32 = 3;

    pub struct CascadeDetector {
        classifier: CascadeClassifier,
        found: Vector<Rect>,
    }

    impl CascadeDetector {
        /// Load a classifier definition (e.g. `haarcascade_eye.xml`).
        pub fn from_file(path: &Path) -> Result<Self, Error> {
            let load_err = |reason: String| Error::ClassifierLoad { path: path.to_path_buf(), reason };

            let name = path.to_str().ok_or_else(|| load_err("path is not valid UTF-8".into()))?;
            let classifier = CascadeClassifier::new(name).map_err(|e| load_err(e.to_string()))?;

            // A file OpenCV cannot parse still yields a classifier, just an empty one.
            if classifier.empty().map_err(|e| load_err(e.to_string()))? {
                return Err(load_err("classifier is empty".into()));
            }

            log::info!("Loaded cascade classifier from {}", path.display());
            Ok(Self { classifier, found: Vector::new() })
        }
    }

    impl Detector for CascadeDetector {
        fn detect_multi_scale(&mut self, gray: &GrayImage) -> Result<Vec<DetectionRect>, Error> {
            let rows = gray.height() as i32;
            let cols = gray.width() as i32;
            if rows == 0 || cols == 0 {
                return Ok(Vec::new());
            }

            let mat = Mat::new_rows_cols_with_data(rows, cols, gray.as_raw().as_slice())
                .map_err(|e| Error::Detection(format!("Wrap grayscale frame: {e}")))?;

            self.found.clear();
            self.classifier
                .detect_multi_scale(
                    &*mat,
                    &mut self.found,
                    SCALE_FACTOR,
                    MIN_NEIGHBORS,
                    0,
                    Size::new(0, 0),
                    Size::new(0, 0),
                )
                .map_err(|e| Error::Detection(e.to_string()))?;

            Ok(self
                .found
                .iter()
                .map(|r| DetectionRect::new(r.x, r.y, r.width, r.height))
                .collect())
        }
    }

}
