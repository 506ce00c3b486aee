// Compiled-in settings. There are no flags or environment variables; change
// these and rebuild.

use std::path::{Path, PathBuf};

use crate::error::Error;

pub const WINDOW_TITLE: &str = "Cartoon Eyes";
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;
pub const CAMERA_INDEX: u32 = 0;
pub const TARGET_FPS: usize = 60;
pub const CLASSIFIER_FILE: &str = "haarcascade_eye.xml";
pub const RESOURCE_DIR: &str = "resources";

/// Where distro OpenCV packages install their cascades.
const SYSTEM_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
];

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: String,
    pub capture_width: u32,
    pub capture_height: u32,
    pub camera_index: u32,
    pub target_fps: usize,
    pub classifier_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            capture_width: CAPTURE_WIDTH,
            capture_height: CAPTURE_HEIGHT,
            camera_index: CAMERA_INDEX,
            target_fps: TARGET_FPS,
            classifier_file: CLASSIFIER_FILE.to_string(),
        }
    }
}

impl AppConfig {
    /// Full path of the classifier definition.
    pub fn classifier_path(&self) -> Result<PathBuf, Error> {
        resolve_resource(&self.classifier_file)
    }
}

/// Resource directories in lookup order: next to the executable, the working
/// directory, this crate's source tree, then the system OpenCV data dirs.
pub fn resource_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            dirs.push(exe_dir.join(RESOURCE_DIR));
        }
    }
    dirs.push(PathBuf::from(RESOURCE_DIR));
    dirs.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR));
    dirs.extend(SYSTEM_CASCADE_DIRS.iter().map(PathBuf::from));
    dirs
}

/// First existing `name` across `resource_dirs()`.
pub fn resolve_resource(name: &str) -> Result<PathBuf, Error> {
    find_in(name, &resource_dirs())
}

fn find_in(name: &str, dirs: &[PathBuf]) -> Result<PathBuf, Error> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::ResourceMissing { name: name.to_string(), searched: dirs.to_vec() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cartoon-eyes-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn defaults_match_constants() {
        let cfg = AppConfig::default();
        assert_eq!((cfg.capture_width, cfg.capture_height), (640, 480));
        assert_eq!(cfg.classifier_file, "haarcascade_eye.xml");
        assert_eq!(cfg.camera_index, 0);
    }

    #[test]
    fn first_directory_holding_the_file_wins() {
        let a = scratch_dir("a");
        let b = scratch_dir("b");
        std::fs::write(b.join("thing.xml"), "<x/>").unwrap();
        std::fs::write(a.join("other.xml"), "<x/>").unwrap();

        let found = find_in("thing.xml", &[a.clone(), b.clone()]).unwrap();
        assert_eq!(found, b.join("thing.xml"));

        std::fs::write(a.join("thing.xml"), "<x/>").unwrap();
        let found = find_in("thing.xml", &[a.clone(), b.clone()]).unwrap();
        assert_eq!(found, a.join("thing.xml"));

        let _ = std::fs::remove_dir_all(a);
        let _ = std::fs::remove_dir_all(b);
    }

    #[test]
    fn missing_resource_reports_where_it_looked() {
        let dirs = vec![PathBuf::from("/definitely/not/here")];
        match find_in("haarcascade_eye.xml", &dirs) {
            Err(Error::ResourceMissing { name, searched }) => {
                assert_eq!(name, "haarcascade_eye.xml");
                assert_eq!(searched, dirs);
            }
            other => panic!("expected ResourceMissing, got {other:?}"),
        }
    }

    #[test]
    fn lookup_starts_beside_the_executable() {
        let dirs = resource_dirs();
        assert!(dirs.len() >= 3);
        assert!(dirs.iter().all(|d| d.ends_with(RESOURCE_DIR) || d.ends_with("haarcascades")));
        assert!(dirs.contains(&PathBuf::from(RESOURCE_DIR)));
    }
}
