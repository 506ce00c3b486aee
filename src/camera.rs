// Where frames come from.
// `CaptureSource` is what the frame loop polls; `CameraCapture` is the real
// webcam, streaming on its own thread so polling never blocks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::bounded;
use image::RgbImage;
use parking_lot::Mutex;

use crate::error::Error;
use crate::types::Frame;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

/// A source of color frames that can be polled without blocking.
pub trait CaptureSource {
    /// Begin delivering frames. Failing here is fatal for the app.
    fn start(&mut self) -> Result<(), Error>;

    /// True when a frame arrived that `surface` has not handed out yet.
    fn check_new_frame(&self) -> bool;

    /// Take the newest frame and clear the "new frame" flag.
    /// `None` when nothing new arrived since the last call.
    fn surface(&mut self) -> Option<Frame>;

    /// Resolution frames are delivered at.
    fn resolution(&self) -> (u32, u32);
}

/// Latest-wins slot shared with the capture thread.
#[derive(Default)]
struct Shared {
    latest: Mutex<Option<Frame>>,
    fresh: AtomicBool,
    running: AtomicBool,
}

pub struct CameraCapture {
    index: u32,
    width: u32,
    height: u32,
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl CameraCapture {
    /// Remember which camera and size to ask for. Nothing is opened yet.
    pub fn new(index: u32, width: u32, height: u32) -> Self {
        Self { index, width, height, shared: Arc::new(Shared::default()), thread: None }
    }

    fn open(index: u32, width: u32, height: u32) -> Result<Camera, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,
        );

        // Ask for RGB frames, as close as possible to the requested format.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        Ok(cam)
    }

    fn capture_loop(mut cam: Camera, shared: Arc<Shared>) {
        let mut sequence: u64 = 0;

        while shared.running.load(Ordering::Acquire) {
            // Blocks until the device hands over a frame.
            let raw = match cam.frame() {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("{}", Error::CameraFrame(format!("Fetch frame: {e}")));
                    std::thread::sleep(Duration::from_millis(10));
                    continue;
                }
            };

            let decoded = match raw.decode_image::<RgbFormat>() {
                Ok(decoded) => decoded,
                Err(e) => {
                    log::warn!("{}", Error::CameraFrame(format!("Decode RGB: {e}")));
                    continue;
                }
            };

            // Re-wrap the raw bytes so we do not depend on nokhwa's `image` version.
            let (w, h) = decoded.dimensions();
            let Some(image) = RgbImage::from_raw(w, h, decoded.into_raw()) else {
                log::warn!("{}", Error::CameraFrame(format!("Short RGB buffer for {w}x{h}")));
                continue;
            };

            let mut slot = shared.latest.lock();
            *slot = Some(Frame::new(image, sequence));
            shared.fresh.store(true, Ordering::Release);
            drop(slot);
            sequence = sequence.wrapping_add(1);
        }

        if let Err(e) = cam.stop_stream() {
            log::warn!("Stopping camera stream: {e}");
        }
        log::info!("Camera capture thread stopped after {sequence} frames");
    }

    /// Stop streaming and wait for the capture thread.
    pub fn stop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("Camera capture thread panicked");
            }
        }
    }
}

impl CaptureSource for CameraCapture {
    fn start(&mut self) -> Result<(), Error> {
        if self.thread.is_some() {
            return Ok(());
        }

        let (ready_tx, ready_rx) = bounded::<Result<(u32, u32), Error>>(1);
        let shared = Arc::clone(&self.shared);
        shared.running.store(true, Ordering::Release);
        let (index, width, height) = (self.index, self.width, self.height);

        // The camera is opened on the thread that reads it.
        let handle = std::thread::Builder::new()
            .name("camera-capture".to_string())
            .spawn(move || {
                let cam = match Self::open(index, width, height) {
                    Ok(cam) => cam,
                    Err(e) => {
                        shared.running.store(false, Ordering::Release);
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                // The actual stream might choose a slightly different resolution.
                let actual = cam.resolution();
                let _ = ready_tx.send(Ok((actual.width(), actual.height())));
                Self::capture_loop(cam, shared);
            })
            .map_err(|e| Error::CameraInit(format!("Spawn capture thread: {e}")))?;

        let ready = ready_rx
            .recv()
            .map_err(|_| Error::CameraInit("Capture thread exited before opening the camera".into()));

        match ready.and_then(|r| r) {
            Ok((w, h)) => {
                log::info!("Camera {index} streaming at {w}x{h} (requested {width}x{height})");
                self.width = w;
                self.height = h;
                self.thread = Some(handle);
                Ok(())
            }
            Err(e) => {
                if handle.join().is_err() {
                    log::error!("Camera capture thread panicked while opening the camera");
                }
                Err(e)
            }
        }
    }

    fn check_new_frame(&self) -> bool {
        self.shared.fresh.load(Ordering::Acquire)
    }

    fn surface(&mut self) -> Option<Frame> {
        // Flag and slot change together under the lock.
        let mut slot = self.shared.latest.lock();
        self.shared.fresh.store(false, Ordering::Release);
        slot.take()
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_camera_reports_request_and_no_frames() {
        let mut cam = CameraCapture::new(0, 320, 240);
        assert_eq!(cam.resolution(), (320, 240));
        assert!(!cam.check_new_frame());
        assert!(cam.surface().is_none());
    }

    #[test]
    fn published_frame_is_handed_out_once() {
        let mut cam = CameraCapture::new(0, 2, 2);
        *cam.shared.latest.lock() = Some(Frame::new(RgbImage::new(2, 2), 7));
        cam.shared.fresh.store(true, Ordering::Release);

        assert!(cam.check_new_frame());
        assert_eq!(cam.surface().map(|f| f.sequence), Some(7));
        assert!(!cam.check_new_frame());
        assert!(cam.surface().is_none());
    }

    #[test]
    fn failed_open_joins_the_capture_thread() {
        let mut cam = CameraCapture::new(9_999, 320, 240);
        match cam.start() {
            Err(Error::CameraInit(_)) => {}
            Err(other) => panic!("expected CameraInit, got {other}"),
            Ok(()) => panic!("camera 9999 opened"),
        }
        assert!(cam.thread.is_none());
        assert!(!cam.shared.running.load(Ordering::Acquire));
        assert_eq!(cam.resolution(), (320, 240));
    }
}
