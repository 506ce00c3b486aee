// What you SEE:
// • Live camera fills the window.
// • Every eye the cascade finds gets a cartoon eye (white, pupil, glint, brow).
// • ESC or closing the window quits.

use std::time::{Duration, Instant};

use cartoon_eyes::overlay::draw_scene;
use cartoon_eyes::{
    AppConfig, CameraCapture, CaptureSource, CascadeDetector, Drawer, Error, FrameBuffer,
    FrameLoop, Raster,
};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = AppConfig::default();

    /* --- Setup: camera, classifier, window ---
       Any failure here ends the app with the error printed. */
    let mut cam = CameraCapture::new(cfg.camera_index, cfg.capture_width, cfg.capture_height);
    cam.start()?;
    let (w, h) = cam.resolution();

    let detector = CascadeDetector::from_file(&cfg.classifier_path()?)?;

    let mut drawer = Drawer::new(&cfg.title, w as usize, h as usize, cfg.target_fps)?;
    let mut screen = FrameBuffer::new(w as usize, h as usize);

    let mut frame_loop = FrameLoop::new(cam, detector);

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut camera_frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Update: new camera frame -> detections + surface.
        if frame_loop.update() {
            camera_frames_this_second += 1;
        }

        // 2) Draw: camera image, then the eyes.
        draw_scene(&mut Raster::new(&mut screen), frame_loop.scene());

        // 3) Present (paced to the target fps).
        drawer.present(&screen)?;

        // 4) Stats once per second.
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::info!(
                "FPS: {:.1} draw / {:.1} camera | {} detections",
                frames_this_second as f32 / secs,
                camera_frames_this_second as f32 / secs,
                frame_loop.scene().detections.len()
            );
            frames_this_second = 0;
            camera_frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("Window closed, shutting down");
    Ok(())
}
