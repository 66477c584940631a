//! # Rendering Module
//!
//! The drawing surface and the geometry primitives recipes paint with:
//! translucent source-over blending, scanline polygon fills, radial
//! gradients, and polyline/curve strokes.

pub mod color;
pub mod region;
pub mod surface;

pub use color::{Shade, WHITE};
pub use region::Region;
pub use surface::{radial_falloff, Surface};
