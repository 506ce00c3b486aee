// One error type for the whole app.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Opening/starting the camera failed
    #[error("Camera init error: {0}")]
    CameraInit(String),

    /// Grabbing/decoding a frame failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String),

    /// A resource file was not found in any resource directory
    #[error("Resource `{name}` not found (searched: {})", display_paths(.searched))]
    ResourceMissing { name: String, searched: Vec<PathBuf> },

    /// The classifier file exists but could not be loaded
    #[error("Classifier load error ({}): {reason}", .path.display())]
    ClassifierLoad { path: PathBuf, reason: String },

    /// The detector failed on a single frame
    #[error("Detection error: {0}")]
    Detection(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_missing_lists_every_searched_dir() {
        let err = Error::ResourceMissing {
            name: "haarcascade_eye.xml".into(),
            searched: vec![PathBuf::from("a/resources"), PathBuf::from("b/resources")],
        };
        let msg = err.to_string();
        assert!(msg.contains("haarcascade_eye.xml"));
        assert!(msg.contains("a/resources, b/resources"));
    }

    #[test]
    fn classifier_load_names_the_file() {
        let err = Error::ClassifierLoad {
            path: PathBuf::from("resources/haarcascade_eye.xml"),
            reason: "classifier is empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "Classifier load error (resources/haarcascade_eye.xml): classifier is empty"
        );
    }
}
