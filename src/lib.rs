//! # Try-On Compositor
//!
//! Overlay simulated makeup onto a face photograph from detector landmarks.
//!
//! The compositor consumes face-landmark geometry (named point groups for
//! eyes, lips, nose, and jaw) produced by an external detection library and
//! procedurally paints a product overlay — lip fill, eyeliner, eyeshadow,
//! foundation gradient, or blush — onto a drawing surface, parameterized by
//! product shade and intensity.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tryon_compositor::{
//!     compositor::TryOnEngine,
//!     config::Config,
//!     face::JsonLandmarkSource,
//!     product::{ApplicationMethod, Category, MakeupProduct},
//!     render::{Shade, Surface},
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let base = Surface::new(image::open("face.png")?.to_rgb8());
//! let landmarks = JsonLandmarkSource::from_file("face.json")?;
//!
//! let engine = TryOnEngine::new(Config::default(), base);
//! let product = MakeupProduct::new(
//!     "velvet matte",
//!     Category::Lips,
//!     ApplicationMethod::Overlay,
//!     vec![Shade::from_hex("#c0392b")?],
//! );
//!
//! let painted = engine.apply(&product, landmarks.landmarks())?;
//! painted.save_png("out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`face`] - Landmark data model and the detector seam
//! - [`capture`] - Scoped frame acquisition (still uploads, live feeds)
//! - [`render`] - Drawing surface, region geometry, and blending
//! - [`recipes`] - Per-category draw recipes and their dispatch table
//! - [`compositor`] - The apply/repaint engine
//! - [`config`] - Configuration management
//!
//! ## Creating Custom Recipes
//!
//! Additional recipes implement the [`Recipe`](recipes::Recipe) trait:
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use tryon_compositor::face::FaceLandmarks;
//! use tryon_compositor::recipes::{Recipe, RecipeConfig};
//! use tryon_compositor::render::Surface;
//!
//! struct GlitterRecipe;
//!
//! impl Recipe for GlitterRecipe {
//!     fn name(&self) -> &str {
//!         "glitter"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Sparkle overlay"
//!     }
//!
//!     fn apply(
//!         &self,
//!         surface: &mut Surface,
//!         landmarks: &FaceLandmarks,
//!         config: &RecipeConfig,
//!     ) -> tryon_compositor::error::Result<()> {
//!         // Your custom overlay implementation
//!         Ok(())
//!     }
//! }
//! ```

pub mod capture;
pub mod compositor;
pub mod config;
pub mod error;
pub mod face;
pub mod product;
pub mod recipes;
pub mod render;

// Re-export commonly used types for convenience
pub use crate::{
    compositor::TryOnEngine,
    config::Config,
    error::{CompositorError, Result},
    face::{FaceLandmarks, LandmarkDetector},
    product::{ApplicationMethod, Category, MakeupProduct},
    recipes::{Recipe, RecipeRegistry},
    render::{Shade, Surface},
};
