//! # Compositor Module
//!
//! The apply engine: one product selection plus one landmark set in, one
//! repainted surface out.

pub mod engine;

pub use engine::TryOnEngine;
