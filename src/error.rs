use thiserror::Error;

/// Main error type for the try-on compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Landmark-detection errors
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("No face found in the supplied image")]
    NoFaceFound,

    #[error("Detector model failed to load: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("Landmark data invalid: {details}")]
    InvalidLandmarks { details: String },

    #[error("Failed to read landmark file: {path}")]
    LandmarkFileFailed { path: String },
}

/// Frame-capture errors
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Capture device unavailable: {reason}")]
    DeviceUnavailable { reason: String },

    #[error("Failed to load image file: {path}")]
    ImageLoadFailed { path: String },

    #[error("Capture session already stopped")]
    SessionStopped,
}

/// Drawing-surface errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Surface size mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    SurfaceSizeMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Region has too few points to fill: {count}")]
    DegenerateRegion { count: usize },

    #[error("Failed to save output image: {path}")]
    SaveFailed { path: String },
}

/// Recipe selection and configuration errors
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found: {name}")]
    NotFound { name: String },

    #[error("Invalid shade value: {value}")]
    InvalidShade { value: String },

    #[error("Recipe configuration invalid: {details}")]
    InvalidConfig { details: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Whether the failure leaves the try-on feature usable.
    ///
    /// A missed detection on one image does not disable anything; a model
    /// load failure does, until the application reloads the detector.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Detection(DetectionError::NoFaceFound) => true,
            Self::Detection(DetectionError::ModelLoadFailed { .. }) => false,
            Self::Capture(CaptureError::PermissionDenied) => true,
            Self::Io(_) => true,
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Detection(DetectionError::NoFaceFound) => {
                "No face was detected in this image. Please try a clearer, front-facing photo.".to_string()
            }
            Self::Detection(DetectionError::ModelLoadFailed { .. }) => {
                "The face detector could not be loaded. Virtual try-on is unavailable until the page is reloaded.".to_string()
            }
            Self::Capture(CaptureError::PermissionDenied) => {
                "Camera access was denied. You can still upload a photo instead.".to_string()
            }
            Self::Capture(CaptureError::ImageLoadFailed { path }) => {
                format!("Could not load image '{}'. Please check the file exists and is a supported format.", path)
            }
            Self::Recipe(RecipeError::NotFound { name }) => {
                format!("Recipe '{}' not found. Available recipes: lip_tint, eyeliner, eyeshadow, foundation, blush", name)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_face_is_recoverable() {
        let err = CompositorError::from(DetectionError::NoFaceFound);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_model_load_failure_disables_feature() {
        let err = CompositorError::from(DetectionError::ModelLoadFailed {
            reason: "missing weights".to_string(),
        });
        assert!(!err.is_recoverable());
        assert!(err.user_message().contains("unavailable"));
    }

    #[test]
    fn test_permission_denied_suggests_upload() {
        let err = CompositorError::from(CaptureError::PermissionDenied);
        assert!(err.user_message().contains("upload"));
    }
}
