//! # Capture Module
//!
//! Scoped acquisition of base-image frames: still uploads yield once, live
//! feeds poll until stopped, and the underlying media resource is released
//! deterministically on stop or drop.

pub mod session;

pub use session::{CaptureSession, FrameSource, StillImageSource};
