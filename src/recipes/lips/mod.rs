//! # Lip Tint Recipe
//!
//! Flat translucent fill over the full mouth opening, with an optional
//! gloss highlight stroke for products sold as "highlight" finish.

mod effect;

pub use effect::LipTintRecipe;

// Lip-specific parameter constants
pub const GLOSS_HIGHLIGHT: &str = "gloss_highlight";
pub const GLOSS_STRENGTH: &str = "gloss_strength";
