use crate::{
    error::Result,
    face::{FaceLandmarks, Point2},
    recipes::{Recipe, RecipeConfig},
    render::Surface,
};

use super::CHEEK_RADIUS;

/// Jaw indices nearest the left and right cheeks (17-point jaw, ear to ear).
const LEFT_CHEEK_JAW: usize = 2;
const RIGHT_CHEEK_JAW: usize = 14;

const BLUSH_ALPHA_FRACTION: f32 = 0.65;

pub struct BlushRecipe;

impl BlushRecipe {
    pub fn new() -> Self {
        Self
    }

    /// Cheek anchor: midpoint between the nose tip and the jaw point
    /// nearest that cheek.
    fn cheek_centers(landmarks: &FaceLandmarks) -> (Point2, Point2) {
        let tip = landmarks.nose_tip();
        (
            tip.midpoint(&landmarks.jaw_outline[LEFT_CHEEK_JAW]),
            tip.midpoint(&landmarks.jaw_outline[RIGHT_CHEEK_JAW]),
        )
    }
}

impl Default for BlushRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for BlushRecipe {
    fn name(&self) -> &str {
        "blush"
    }

    fn description(&self) -> &str {
        "Soft circular gradients centered on each cheek"
    }

    fn apply(&self, surface: &mut Surface, landmarks: &FaceLandmarks, config: &RecipeConfig) -> Result<()> {
        let radius = config.get_f32_or(CHEEK_RADIUS, 30.0);
        let max_alpha = BLUSH_ALPHA_FRACTION * config.intensity;

        let (left, right) = Self::cheek_centers(landmarks);
        surface.fill_circle_radial(left, radius, config.shade, max_alpha);
        surface.fill_circle_radial(right, radius, config.shade, max_alpha);
        Ok(())
    }
}
