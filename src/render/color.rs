use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

/// An opaque RGB product shade.
///
/// Product catalogs supply shades as hex strings ("#c0392b"); the alpha used
/// to composite a shade onto the surface comes from the recipe intensity,
/// never from the shade itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Gloss highlights are always plain white.
pub const WHITE: Shade = Shade { r: 255, g: 255, b: 255 };

impl Shade {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a "#rrggbb" or "rrggbb" hex string.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RecipeError::InvalidShade { value: value.to_string() }.into());
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| RecipeError::InvalidShade {
                value: value.to_string(),
            })
        };

        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Render back to "#rrggbb" form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
