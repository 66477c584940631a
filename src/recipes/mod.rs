//! # Draw Recipe System
//!
//! Each product category renders through one recipe: a stateless,
//! deterministic procedure that turns landmark point groups into an overlay
//! on the drawing surface.
//!
//! ## Built-in Recipes
//!
//! - **lip_tint**: translucent fill over the mouth, optional gloss stroke
//! - **eyeliner**: outline strokes with winged outer corners
//! - **eyeshadow**: gradient-edged lid fill above each eye
//! - **foundation**: radial base-coat gradient over the whole face
//! - **blush**: soft circular gradients on the cheeks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tryon_compositor::product::{ApplicationMethod, Category};
//! use tryon_compositor::recipes::RecipeRegistry;
//!
//! let registry = RecipeRegistry::new();
//! let recipe = registry.select(Category::Lips, ApplicationMethod::Overlay).unwrap();
//! assert_eq!(recipe.name(), "lip_tint");
//! ```

pub mod registry;
pub mod traits;

// Recipe implementations
pub mod blush;
pub mod eyeliner;
pub mod eyeshadow;
pub mod foundation;
pub mod lips;

// Re-exports for convenience
pub use registry::RecipeRegistry;
pub use traits::{ConfigValue, Recipe, RecipeConfig, MAX_INTENSITY, MIN_INTENSITY};

// Re-export all built-in recipes
pub use blush::BlushRecipe;
pub use eyeliner::EyelinerRecipe;
pub use eyeshadow::EyeshadowRecipe;
pub use foundation::FoundationRecipe;
pub use lips::LipTintRecipe;
