use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::CaptureConfig;
use crate::error::{CaptureError, Result};
use crate::render::Surface;

/// A source of base-image frames for the try-on pipeline.
///
/// Implementations own the underlying media resource and must make
/// `release` safe to call more than once. Live camera sources implement
/// this out of tree; the crate ships the still-image path.
pub trait FrameSource {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Produce the next frame, or `None` when the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<Surface>>;

    /// Whether this source keeps producing frames until stopped.
    fn is_live(&self) -> bool {
        false
    }

    /// Release the underlying media resource. Must be idempotent.
    fn release(&mut self);
}

/// Frame source for an uploaded or captured still image: yields the image
/// exactly once, then reports exhaustion.
pub struct StillImageSource {
    name: String,
    frame: Option<Surface>,
}

impl StillImageSource {
    /// Load a still image from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|_| CaptureError::ImageLoadFailed {
            path: path.display().to_string(),
        })?;

        Ok(Self {
            name: path.display().to_string(),
            frame: Some(Surface::new(img.to_rgb8())),
        })
    }

    /// Wrap an already-decoded surface.
    pub fn from_surface(name: impl Into<String>, surface: Surface) -> Self {
        Self {
            name: name.into(),
            frame: Some(surface),
        }
    }
}

impl FrameSource for StillImageSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_frame(&mut self) -> Result<Option<Surface>> {
        Ok(self.frame.take())
    }

    fn release(&mut self) {
        self.frame = None;
    }
}

/// Scoped acquisition of a frame source.
///
/// The session owns the source for its lifetime: `stop` releases the media
/// resource explicitly and is idempotent, and `Drop` releases it on every
/// other exit path, including errors. Stopping a live session cancels its
/// polling loop: subsequent `next_frame` calls return `None`.
pub struct CaptureSession<S: FrameSource> {
    source: S,
    active: bool,
    poll_interval: Duration,
    frames_served: u64,
}

impl<S: FrameSource> CaptureSession<S> {
    /// Acquire the source and start a session.
    pub fn start(source: S, config: &CaptureConfig) -> Self {
        info!(source = source.name(), live = source.is_live(), "capture session started");
        Self {
            source,
            active: true,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            frames_served: 0,
        }
    }

    /// Next frame, or `None` once the source is exhausted or the session
    /// stopped. Live feeds wait one poll interval between frames.
    pub async fn next_frame(&mut self) -> Result<Option<Surface>> {
        if !self.active {
            return Ok(None);
        }

        if self.source.is_live() && self.frames_served > 0 {
            tokio::time::sleep(self.poll_interval).await;
            // The session may have been observed stale while sleeping;
            // re-check before touching the source.
            if !self.active {
                return Ok(None);
            }
        }

        let frame = self.source.next_frame()?;
        match &frame {
            Some(_) => self.frames_served += 1,
            None => debug!(source = self.source.name(), "frame source exhausted"),
        }
        Ok(frame)
    }

    /// Stop the session and release the capture resource. Idempotent.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.source.release();
            info!(
                source = self.source.name(),
                frames = self.frames_served,
                "capture session stopped"
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frames_served(&self) -> u64 {
        self.frames_served
    }
}

impl<S: FrameSource> Drop for CaptureSession<S> {
    fn drop(&mut self) {
        // Deterministic release on all exit paths.
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Test double that records how often it was released.
    struct TrackedSource {
        frames_left: usize,
        live: bool,
        released: Arc<AtomicBool>,
        release_calls: Arc<AtomicUsize>,
    }

    impl TrackedSource {
        fn new(frames: usize, live: bool) -> (Self, Arc<AtomicBool>, Arc<AtomicUsize>) {
            let released = Arc::new(AtomicBool::new(false));
            let release_calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    frames_left: frames,
                    live,
                    released: released.clone(),
                    release_calls: release_calls.clone(),
                },
                released,
                release_calls,
            )
        }
    }

    impl FrameSource for TrackedSource {
        fn name(&self) -> &str {
            "tracked"
        }

        fn next_frame(&mut self) -> Result<Option<Surface>> {
            if self.frames_left == 0 {
                return Ok(None);
            }
            self.frames_left -= 1;
            Ok(Some(Surface::new_black(4, 4)))
        }

        fn is_live(&self) -> bool {
            self.live
        }

        fn release(&mut self) {
            self.released.store(true, Ordering::SeqCst);
            self.release_calls.fetch_add(1, Ordering::SeqCst);
            self.frames_left = 0;
        }
    }

    fn fast_config() -> CaptureConfig {
        CaptureConfig { poll_interval_ms: 1 }
    }

    #[tokio::test]
    async fn test_still_source_yields_exactly_once() {
        let source = StillImageSource::from_surface("test", Surface::new_black(8, 8));
        let mut session = CaptureSession::start(source, &fast_config());

        assert!(session.next_frame().await.unwrap().is_some());
        assert!(session.next_frame().await.unwrap().is_none());
        assert_eq!(session.frames_served(), 1);
    }

    #[tokio::test]
    async fn test_stop_cancels_live_polling() {
        let (source, released, _) = TrackedSource::new(100, true);
        let mut session = CaptureSession::start(source, &fast_config());

        assert!(session.next_frame().await.unwrap().is_some());
        session.stop();

        assert!(!session.is_active());
        assert!(released.load(Ordering::SeqCst));
        assert!(session.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let (source, _, release_calls) = TrackedSource::new(3, false);
        let mut session = CaptureSession::start(source, &fast_config());

        session.stop();
        session.stop();
        session.stop();
        assert_eq!(release_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_drop_releases_source() {
        let (source, released, release_calls) = TrackedSource::new(3, true);
        {
            let mut session = CaptureSession::start(source, &fast_config());
            let _ = session.next_frame().await.unwrap();
            // Dropped here without an explicit stop.
        }
        assert!(released.load(Ordering::SeqCst));
        assert_eq!(release_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_image_file_errors() {
        assert!(StillImageSource::from_file("/nonexistent/photo.png").is_err());
    }
}
