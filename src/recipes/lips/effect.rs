use crate::{
    error::Result,
    face::{FaceLandmarks, Point2},
    recipes::{Recipe, RecipeConfig},
    render::{Region, Surface, WHITE},
};

use super::{GLOSS_HIGHLIGHT, GLOSS_STRENGTH};

/// Index of the last upper-lip point on the outer ring.
const UPPER_LIP_END: usize = 6;
/// Index the lower-lip trace starts from, walking back toward the corner.
const LOWER_LIP_START: usize = 12;

/// Lip fill covering the full mouth opening including the corners.
pub struct LipTintRecipe;

impl LipTintRecipe {
    pub fn new() -> Self {
        Self
    }

    /// One closed path: upper lip across points 0..=6, then the lower lip
    /// from point 12 (or the last available outer-ring point) back to 7.
    fn lip_region(mouth: &[Point2]) -> Region {
        let mut region = Region::new();
        region.extend_from(&mouth[..=UPPER_LIP_END]);

        let start = LOWER_LIP_START.min(mouth.len() - 1);
        for i in (UPPER_LIP_END + 1..=start).rev() {
            region.push(mouth[i]);
        }
        region
    }

    /// Short white curved stroke across the upper-middle lip simulating
    /// gloss shine.
    fn draw_gloss(&self, surface: &mut Surface, mouth: &[Point2], alpha: f32) {
        let from = mouth[2];
        let to = mouth[4];
        let ctrl = mouth[3].offset(0.0, -3.0);
        surface.stroke_quadratic(from, ctrl, to, WHITE, alpha, 1.5);
    }
}

impl Default for LipTintRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for LipTintRecipe {
    fn name(&self) -> &str {
        "lip_tint"
    }

    fn description(&self) -> &str {
        "Translucent fill over the full mouth opening, optional gloss shine stroke"
    }

    fn apply(&self, surface: &mut Surface, landmarks: &FaceLandmarks, config: &RecipeConfig) -> Result<()> {
        let region = Self::lip_region(&landmarks.mouth);
        // Direct fill: alpha is the intensity itself.
        surface.fill_region(&region, config.shade, config.intensity);

        if config.get_bool_or(GLOSS_HIGHLIGHT, false) {
            let gloss_alpha = config.get_f32_or(GLOSS_STRENGTH, 0.4) * config.intensity;
            self.draw_gloss(surface, &landmarks.mouth, gloss_alpha);
        }
        Ok(())
    }
}
