//! # Eyeshadow Recipe
//!
//! Gradient-edged fill over an extended lid region: the lower eye outline
//! as the base, with synthesized raised points faking lid coverage where
//! the detector has no landmarks.

mod effect;

pub use effect::EyeshadowRecipe;

// Eyeshadow-specific parameter constants
pub const LID_RAISE: &str = "lid_raise";
pub const EDGE_SOFTNESS: &str = "edge_softness";
