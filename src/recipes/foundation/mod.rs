//! # Foundation Recipe
//!
//! Radial-gradient base coat over the jaw outline, closed across the top
//! by an arc that approximates forehead coverage without landmark data.

mod effect;

pub use effect::FoundationRecipe;

// Foundation-specific parameter constants
pub const FOREHEAD_MARGIN: &str = "forehead_margin";
pub const FOREHEAD_RAISE: &str = "forehead_raise";
