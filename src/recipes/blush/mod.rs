//! # Blush Recipe
//!
//! Dual radial-gradient discs on the cheeks, anchored between the nose tip
//! and the jaw points nearest each cheek.

mod effect;

pub use effect::BlushRecipe;

// Blush-specific parameter constants
pub const CHEEK_RADIUS: &str = "cheek_radius";
