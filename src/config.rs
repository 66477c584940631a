use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    error::{ConfigError, Result},
    recipes::{RecipeConfig, MAX_INTENSITY, MIN_INTENSITY},
};

/// Main configuration for the try-on compositor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overlay rendering settings
    pub render: RenderConfig,

    /// Frame capture settings
    pub capture: CaptureConfig,

    /// Default recipe configuration
    pub recipe: RecipeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            capture: CaptureConfig::default(),
            recipe: RecipeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string(),
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.render.validate()?;
        self.capture.validate()?;
        Ok(())
    }
}

/// Overlay rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Overlay intensity supplied by the UI slider (0.1-1.0)
    pub intensity: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { intensity: 0.8 }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<()> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&self.intensity) {
            return Err(ConfigError::InvalidValue {
                key: "render.intensity".to_string(),
                value: self.intensity.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Frame capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Delay between live-feed detection polls, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { poll_interval_ms: 100 }
    }
}

impl CaptureConfig {
    fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "capture.poll_interval_ms".to_string(),
                value: self.poll_interval_ms.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
