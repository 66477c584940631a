//! # Face Module
//!
//! The landmark data model and the detector seam. Landmarks arrive from an
//! external detection library as named point groups already scaled to the
//! drawing surface; nothing here depends on any detector's runtime types.

pub mod detector;
pub mod landmarks;

pub use detector::{JsonLandmarkSource, LandmarkDetector};
pub use landmarks::{FaceLandmarks, Point2, EYE_POINTS, JAW_POINTS, MIN_MOUTH_POINTS};
