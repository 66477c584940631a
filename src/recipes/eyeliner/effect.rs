use crate::{
    error::Result,
    face::{FaceLandmarks, Point2},
    recipes::{Recipe, RecipeConfig},
    render::Surface,
};

use super::{LINE_THICKNESS, WING_LENGTH};

/// Which side of the face an eye sits on; decides the wing direction.
#[derive(Clone, Copy)]
enum EyeSide {
    Left,
    Right,
}

impl EyeSide {
    /// Horizontal direction pointing away from the nose.
    fn outward(self) -> f32 {
        match self {
            EyeSide::Left => -1.0,
            EyeSide::Right => 1.0,
        }
    }
}

/// Eyeliner with winged tips at the outer corner of each eye.
pub struct EyelinerRecipe;

impl EyelinerRecipe {
    pub fn new() -> Self {
        Self
    }

    /// The outline point farthest toward the ear. Landmark ordering differs
    /// between detectors, so the corner is picked geometrically.
    fn outer_corner(eye: &[Point2], side: EyeSide) -> Point2 {
        let pick = |a: &&Point2, b: &&Point2| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal);
        let corner = match side {
            EyeSide::Left => eye.iter().min_by(pick),
            EyeSide::Right => eye.iter().max_by(pick),
        };
        corner.copied().unwrap_or(Point2::new(0.0, 0.0))
    }

    fn line_one_eye(
        &self,
        surface: &mut Surface,
        eye: &[Point2],
        side: EyeSide,
        config: &RecipeConfig,
    ) {
        let thickness = config.get_f32_or(LINE_THICKNESS, 2.0);
        let wing = config.get_f32_or(WING_LENGTH, 5.0);
        let alpha = config.intensity;

        surface.stroke_outline(eye, config.shade, alpha, thickness);

        // Two short wing strokes, outward and upward from the outer corner.
        let corner = Self::outer_corner(eye, side);
        let tip = corner.offset(side.outward() * wing, -wing);
        surface.stroke_line(corner, tip, config.shade, alpha, thickness);
        surface.stroke_line(corner.offset(0.0, 2.0), tip, config.shade, alpha, thickness * 0.75);
    }
}

impl Default for EyelinerRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for EyelinerRecipe {
    fn name(&self) -> &str {
        "eyeliner"
    }

    fn description(&self) -> &str {
        "Line stroke along each eye outline with winged outer corners"
    }

    fn apply(&self, surface: &mut Surface, landmarks: &FaceLandmarks, config: &RecipeConfig) -> Result<()> {
        self.line_one_eye(surface, &landmarks.left_eye, EyeSide::Left, config);
        self.line_one_eye(surface, &landmarks.right_eye, EyeSide::Right, config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::landmarks::test_fixtures::frontal_face;
    use crate::render::Shade;

    const BASE: [u8; 3] = [180, 150, 130];
    const BLACK: Shade = Shade { r: 10, g: 10, b: 10 };

    fn apply() -> Surface {
        let mut surface = Surface::new_filled(200, 200, BASE);
        let config = RecipeConfig::new(BLACK, 1.0);
        EyelinerRecipe::new()
            .apply(&mut surface, &frontal_face(), &config)
            .unwrap();
        surface
    }

    fn is_tinted(surface: &Surface, x: u32, y: u32) -> bool {
        surface.get_pixel(x, y) != BASE
    }

    #[test]
    fn test_outline_is_stroked() {
        let surface = apply();
        // Left eye outline runs through (55, 85) and (70, 80).
        assert!(is_tinted(&surface, 55, 85));
        assert!(is_tinted(&surface, 70, 80));
        // Eye interior is lined, not filled.
        assert!(!is_tinted(&surface, 70, 85));
    }

    #[test]
    fn test_wings_extend_past_outer_corners() {
        let surface = apply();
        // Left eye outer corner is (55, 85); the wing reaches toward (50, 80).
        assert!(is_tinted(&surface, 51, 81));
        // Right eye outer corner is (145, 85); wing toward (150, 80).
        assert!(is_tinted(&surface, 149, 81));
    }

    #[test]
    fn test_no_wings_at_inner_corners() {
        let surface = apply();
        // Between the eyes, diagonally up from each inner corner (85,85)/(115,85):
        // a wing there would tint these; only clean base may show.
        assert!(!is_tinted(&surface, 91, 79));
        assert!(!is_tinted(&surface, 109, 79));
    }

    #[test]
    fn test_outer_corner_selection() {
        let eye = frontal_face().left_eye;
        let corner = EyelinerRecipe::outer_corner(&eye, EyeSide::Left);
        assert_eq!(corner, Point2::new(55.0, 85.0));
        let corner = EyelinerRecipe::outer_corner(&eye, EyeSide::Right);
        assert_eq!(corner, Point2::new(85.0, 85.0));
    }
}
