use crate::{
    error::Result,
    face::{FaceLandmarks, Point2},
    recipes::{Recipe, RecipeConfig},
    render::{Region, Surface},
};

use super::{EDGE_SOFTNESS, LID_RAISE};

/// Fraction of the intensity used as peak alpha; gradient regions stay
/// softer than direct fills.
const SHADOW_ALPHA_FRACTION: f32 = 0.65;

/// Soft-edged lid shadow per eye.
pub struct EyeshadowRecipe;

impl EyeshadowRecipe {
    pub fn new() -> Self {
        Self
    }

    /// Extended lid region: the four lowest outline points form the base,
    /// and the two top points are re-synthesized `lift` pixels higher,
    /// joined with quadratic curves for smooth edges.
    fn lid_region(eye: &[Point2], lift: f32) -> Region {
        let mut by_height: Vec<Point2> = eye.to_vec();
        by_height.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

        let mut top: Vec<Point2> = by_height[..2].to_vec();
        let mut base: Vec<Point2> = by_height[2..].to_vec();
        let by_x = |a: &Point2, b: &Point2| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal);
        top.sort_by(by_x);
        base.sort_by(by_x);

        let raised_left = top[0].offset(0.0, -lift);
        let raised_right = top[1].offset(0.0, -lift);

        let mut region = Region::new();
        region.extend_from(&base);
        let base_right = base[base.len() - 1];
        region.push_quadratic(Point2::new(base_right.x, raised_right.y), raised_right);
        region.push_quadratic(raised_left.midpoint(&raised_right).offset(0.0, -2.0), raised_left);
        region
    }

    fn shade_one_eye(&self, surface: &mut Surface, eye: &[Point2], config: &RecipeConfig) {
        let lift = config.get_f32_or(LID_RAISE, 12.0);
        let softness = config.get_f32_or(EDGE_SOFTNESS, 1.0);
        let region = Self::lid_region(eye, lift);

        let center = region.centroid();
        let radius = region
            .points()
            .iter()
            .map(|p| center.distance(p))
            .fold(0.0f32, f32::max)
            * softness.max(0.1);

        let max_alpha = SHADOW_ALPHA_FRACTION * config.intensity;
        surface.fill_region_radial(&region, center, radius, config.shade, max_alpha);
    }
}

impl Default for EyeshadowRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for EyeshadowRecipe {
    fn name(&self) -> &str {
        "eyeshadow"
    }

    fn description(&self) -> &str {
        "Gradient-edged lid fill extending above the eye outline"
    }

    fn apply(&self, surface: &mut Surface, landmarks: &FaceLandmarks, config: &RecipeConfig) -> Result<()> {
        self.shade_one_eye(surface, &landmarks.left_eye, config);
        self.shade_one_eye(surface, &landmarks.right_eye, config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::landmarks::test_fixtures::frontal_face;
    use crate::render::Shade;

    const BASE: [u8; 3] = [180, 150, 130];
    const PLUM: Shade = Shade { r: 110, g: 50, b: 120 };

    fn apply(intensity: f32) -> Surface {
        let mut surface = Surface::new_filled(200, 200, BASE);
        let config = RecipeConfig::new(PLUM, intensity);
        EyeshadowRecipe::new()
            .apply(&mut surface, &frontal_face(), &config)
            .unwrap();
        surface
    }

    #[test]
    fn test_region_extends_above_eye() {
        let region = EyeshadowRecipe::lid_region(&frontal_face().left_eye, 12.0);
        let (min, _) = region.bounds();
        // Top eye points sit at y=80; the lid region reaches roughly 12px higher.
        assert!(min.y < 70.0);
    }

    #[test]
    fn test_shadow_covers_lid_not_cheek() {
        let surface = apply(1.0);
        // Center of the left lid region is tinted.
        assert_ne!(surface.get_pixel(70, 81), BASE);
        // Cheek well below the eye is untouched.
        assert_eq!(surface.get_pixel(70, 110), BASE);
    }

    #[test]
    fn test_gradient_softer_at_region_edge() {
        let surface = apply(1.0);
        // Green drops from the skin base toward the plum shade; the drop is
        // strongest near the anchor, weaker toward the edge.
        let center_drop = BASE[1] as i32 - surface.get_pixel(70, 81)[1] as i32;
        let edge_drop = BASE[1] as i32 - surface.get_pixel(58, 84)[1] as i32;
        assert!(center_drop > edge_drop);
        assert!(edge_drop >= 0);
    }

    #[test]
    fn test_intensity_scales_coverage() {
        let faint = apply(0.1);
        let full = apply(1.0);
        let faint_drop = BASE[1] as i32 - faint.get_pixel(70, 81)[1] as i32;
        let full_drop = BASE[1] as i32 - full.get_pixel(70, 81)[1] as i32;
        assert!(full_drop > faint_drop);
    }
}
