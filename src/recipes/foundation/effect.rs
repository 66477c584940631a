use crate::{
    error::Result,
    face::{FaceLandmarks, Point2},
    recipes::{Recipe, RecipeConfig},
    render::{Region, Surface},
};

use super::{FOREHEAD_MARGIN, FOREHEAD_RAISE};

/// Gradient regions use a reduced alpha fraction to avoid harsh coverage.
const FOUNDATION_ALPHA_FRACTION: f32 = 0.6;

/// Full-face base coat.
pub struct FoundationRecipe;

impl FoundationRecipe {
    pub fn new() -> Self {
        Self
    }

    /// Jaw outline closed across the top of the face with an arc. The arc
    /// is centered between the first and last jaw points, radius half the
    /// jaw bounding-box width plus `margin`, with its apex `raise` pixels
    /// above the topmost jaw point.
    fn face_region(jaw: &[Point2], margin: f32, raise: f32) -> Region {
        let (min, max) = FaceLandmarks::bounds(jaw);
        let radius = (max.x - min.x) / 2.0 + margin;

        let ends_mid = jaw[0].midpoint(&jaw[jaw.len() - 1]);
        // Place the arc center so its apex lands `raise` above the topmost
        // jaw point (screen coordinates, apex = center.y - radius).
        let center = Point2::new(ends_mid.x, min.y - raise + radius);

        let mut region = Region::from_outline(jaw);
        // Close from the last jaw point up and over to the first.
        region.push_arc(center, radius, 0.0, -std::f32::consts::PI);
        region
    }

    /// Anchor and falloff radius for the diffusion gradient.
    fn gradient(region: &Region) -> (Point2, f32) {
        let center = region.centroid();
        let radius = region
            .points()
            .iter()
            .map(|p| center.distance(p))
            .fold(0.0f32, f32::max);
        (center, radius)
    }
}

impl Default for FoundationRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for FoundationRecipe {
    fn name(&self) -> &str {
        "foundation"
    }

    fn description(&self) -> &str {
        "Radial base-coat gradient over the jaw outline and synthesized forehead"
    }

    fn apply(&self, surface: &mut Surface, landmarks: &FaceLandmarks, config: &RecipeConfig) -> Result<()> {
        let margin = config.get_f32_or(FOREHEAD_MARGIN, 20.0);
        let raise = config.get_f32_or(FOREHEAD_RAISE, 30.0);
        let region = Self::face_region(&landmarks.jaw_outline, margin, raise);

        let (center, radius) = Self::gradient(&region);
        let max_alpha = FOUNDATION_ALPHA_FRACTION * config.intensity;
        surface.fill_region_radial(&region, center, radius, config.shade, max_alpha);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::landmarks::test_fixtures::frontal_face;
    use crate::render::{radial_falloff, Shade};

    const BASE: [u8; 3] = [120, 120, 120];
    const BEIGE: Shade = Shade { r: 225, g: 190, b: 160 };

    fn apply() -> Surface {
        let mut surface = Surface::new_filled(200, 200, BASE);
        let config = RecipeConfig::new(BEIGE, 1.0);
        FoundationRecipe::new()
            .apply(&mut surface, &frontal_face(), &config)
            .unwrap();
        surface
    }

    #[test]
    fn test_region_covers_forehead() {
        let face = frontal_face();
        let region = FoundationRecipe::face_region(&face.jaw_outline, 20.0, 30.0);
        // Topmost jaw point is y=90; the arc apex sits 30px above it.
        let (min, _) = region.bounds();
        assert!((min.y - 60.0).abs() < 2.0);
        assert!(region.contains(100.0, 70.0));
    }

    #[test]
    fn test_gradient_transparent_at_outer_radius() {
        let face = frontal_face();
        let region = FoundationRecipe::face_region(&face.jaw_outline, 20.0, 30.0);
        let (center, radius) = FoundationRecipe::gradient(&region);

        assert!(radial_falloff(0.0, radius) > 0.0);
        assert!(radial_falloff(radius, radius).abs() < 1e-6);
        // Sanity: the gradient anchor sits inside the region.
        assert!(region.contains(center.x, center.y));
    }

    #[test]
    fn test_center_coated_edges_clean() {
        let surface = apply();
        // Cheek area near the anchor picks up the coat.
        assert_ne!(surface.get_pixel(100, 120), BASE);
        // Image corner stays base.
        assert_eq!(surface.get_pixel(3, 3), BASE);
    }
}
