use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    error::Result,
    face::FaceLandmarks,
    render::{Shade, Surface},
};

/// Bounds on the overlay intensity the UI slider can supply.
pub const MIN_INTENSITY: f32 = 0.1;
pub const MAX_INTENSITY: f32 = 1.0;

/// Core trait all draw recipes implement.
///
/// A recipe converts landmark point groups into one product overlay on the
/// surface. Recipes are stateless and deterministic: the same surface,
/// landmarks, and config always produce the same pixels.
pub trait Recipe: Send + Sync {
    /// Returns the unique name of this recipe
    fn name(&self) -> &str;

    /// Returns a human-readable description of this recipe
    fn description(&self) -> &str;

    /// Paint the overlay onto the surface in-place.
    ///
    /// # Arguments
    ///
    /// * `surface` - The repainted base image to draw over
    /// * `landmarks` - Validated point groups in surface pixel space
    /// * `config` - Shade, intensity, and recipe-specific parameters
    fn apply(&self, surface: &mut Surface, landmarks: &FaceLandmarks, config: &RecipeConfig) -> Result<()>;

    /// Get the default configuration for this recipe
    fn default_config(&self) -> RecipeConfig {
        RecipeConfig::default()
    }

    /// Validate that the given configuration is valid for this recipe
    fn validate_config(&self, config: &RecipeConfig) -> Result<()> {
        let _ = config;
        Ok(())
    }
}

/// Configuration for a single apply: active shade, intensity, and a
/// flexible per-recipe parameter map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Active product shade to composite.
    pub shade: Shade,

    /// Opacity multiplier for the overlay (clamped to [0.1, 1.0]).
    pub intensity: f32,

    /// Recipe-specific parameters
    pub parameters: HashMap<String, ConfigValue>,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            shade: Shade::new(192, 57, 43),
            intensity: 0.8,
            parameters: HashMap::new(),
        }
    }
}

impl RecipeConfig {
    /// Create a config for the given shade and intensity.
    pub fn new(shade: Shade, intensity: f32) -> Self {
        Self {
            shade,
            intensity: intensity.clamp(MIN_INTENSITY, MAX_INTENSITY),
            parameters: HashMap::new(),
        }
    }

    /// Set a parameter value
    pub fn set<K: Into<String>, V: Into<ConfigValue>>(mut self, key: K, value: V) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Get a parameter value as a specific type
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.parameters.get(key).and_then(|v| v.as_f32())
    }

    /// Get a parameter value with a default
    pub fn get_f32_or(&self, key: &str, default: f32) -> f32 {
        self.get_f32(key).unwrap_or(default)
    }

    /// Get a parameter value as a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.parameters.get(key).and_then(|v| v.as_bool())
    }

    /// Get a parameter value with a default
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }
}

/// Flexible configuration value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Float(f32),
    Bool(bool),
    Integer(i32),
}

impl ConfigValue {
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f32> for ConfigValue {
    fn from(value: f32) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_clamped_to_range() {
        let low = RecipeConfig::new(Shade::new(0, 0, 0), 0.0);
        assert_eq!(low.intensity, MIN_INTENSITY);

        let high = RecipeConfig::new(Shade::new(0, 0, 0), 2.5);
        assert_eq!(high.intensity, MAX_INTENSITY);

        let mid = RecipeConfig::new(Shade::new(0, 0, 0), 0.5);
        assert_eq!(mid.intensity, 0.5);
    }

    #[test]
    fn test_parameter_access() {
        let config = RecipeConfig::default()
            .set("lift", 12.0f32)
            .set("gloss", true);

        assert_eq!(config.get_f32("lift"), Some(12.0));
        assert_eq!(config.get_f32_or("missing", 3.0), 3.0);
        assert!(config.get_bool_or("gloss", false));
        assert_eq!(config.get_bool("lift"), None);
    }
}
