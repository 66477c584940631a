//! # Eyeliner Recipe
//!
//! Strokes each 6-point eye outline and adds winged tips at the outer
//! corners.

mod effect;

pub use effect::EyelinerRecipe;

// Eyeliner-specific parameter constants
pub const WING_LENGTH: &str = "wing_length";
pub const LINE_THICKNESS: &str = "line_thickness";
