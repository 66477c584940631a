use std::path::Path;

use tracing::debug;

use crate::error::{DetectionError, Result};
use crate::face::FaceLandmarks;
use crate::render::Surface;

/// Seam between the compositor and whatever detection library produces
/// landmarks.
///
/// The compositor depends only on the [`FaceLandmarks`] point-group shape,
/// never on a detector's runtime types. A failed detection surfaces as
/// [`DetectionError::NoFaceFound`]; there is no automatic retry.
pub trait LandmarkDetector {
    /// Detect one face in the frame and return its landmark groups.
    fn detect(&mut self, frame: &Surface) -> Result<FaceLandmarks>;
}

/// Landmark source backed by a detector's serialized JSON output.
///
/// The real detector runs out of process (browser-side in the storefront);
/// the CLI consumes the point groups it wrote to disk. The landmarks are
/// validated once at load, so every later `detect` is infallible lookup.
pub struct JsonLandmarkSource {
    landmarks: FaceLandmarks,
}

impl JsonLandmarkSource {
    /// Load and validate a landmark file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| DetectionError::LandmarkFileFailed {
            path: path.display().to_string(),
        })?;

        let landmarks: FaceLandmarks =
            serde_json::from_str(&content).map_err(|e| DetectionError::InvalidLandmarks {
                details: format!("{}: {e}", path.display()),
            })?;
        landmarks.validate()?;

        debug!(
            path = %path.display(),
            mouth_points = landmarks.mouth.len(),
            jaw_points = landmarks.jaw_outline.len(),
            "loaded landmark file"
        );
        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &FaceLandmarks {
        &self.landmarks
    }
}

impl LandmarkDetector for JsonLandmarkSource {
    fn detect(&mut self, _frame: &Surface) -> Result<FaceLandmarks> {
        Ok(self.landmarks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::landmarks::test_fixtures::frontal_face;
    use std::io::Write;

    #[test]
    fn test_load_valid_landmark_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.json");
        let json = serde_json::to_string(&frontal_face()).unwrap();
        std::fs::File::create(&path).unwrap().write_all(json.as_bytes()).unwrap();

        let mut source = JsonLandmarkSource::from_file(&path).unwrap();
        let frame = Surface::new_black(200, 200);
        let detected = source.detect(&frame).unwrap();
        assert_eq!(detected.jaw_outline.len(), 17);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(JsonLandmarkSource::from_file("/nonexistent/face.json").is_err());
    }

    #[test]
    fn test_invalid_counts_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let mut face = frontal_face();
        face.jaw_outline.truncate(5);
        let json = serde_json::to_string(&face).unwrap();
        std::fs::File::create(&path).unwrap().write_all(json.as_bytes()).unwrap();

        assert!(JsonLandmarkSource::from_file(&path).is_err());
    }
}
