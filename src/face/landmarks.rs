use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};

/// A single landmark coordinate, in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// This point shifted by the given offsets.
    pub fn offset(&self, dx: f32, dy: f32) -> Point2 {
        Point2::new(self.x + dx, self.y + dy)
    }
}

/// Expected point counts per group, fixed by the detector's output shape.
pub const EYE_POINTS: usize = 6;
pub const MIN_MOUTH_POINTS: usize = 12;
pub const JAW_POINTS: usize = 17;

/// One detection frame's worth of facial geometry.
///
/// Produced once per captured or uploaded image by an external detector and
/// consumed read-only by the compositor. All coordinates are already scaled
/// to the drawing surface; no normalization happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceLandmarks {
    /// Eye-outline polygon, 6 points in outline order.
    pub left_eye: Vec<Point2>,
    /// Eye-outline polygon, 6 points in outline order.
    pub right_eye: Vec<Point2>,
    /// Outer + inner lip polygon order, at least 12 points.
    pub mouth: Vec<Point2>,
    /// Point 0 is the nose-tip reference.
    pub nose: Vec<Point2>,
    /// 17 points, left ear to right ear along the jaw.
    pub jaw_outline: Vec<Point2>,
}

impl FaceLandmarks {
    /// Check the point-group counts the draw recipes rely on.
    pub fn validate(&self) -> Result<()> {
        let check = |name: &str, got: usize, want: usize, exact: bool| {
            let ok = if exact { got == want } else { got >= want };
            if ok {
                Ok(())
            } else {
                Err(DetectionError::InvalidLandmarks {
                    details: format!("{name}: expected {}{want} points, got {got}", if exact { "" } else { "at least " }),
                })
            }
        };

        check("left_eye", self.left_eye.len(), EYE_POINTS, true)?;
        check("right_eye", self.right_eye.len(), EYE_POINTS, true)?;
        check("mouth", self.mouth.len(), MIN_MOUTH_POINTS, false)?;
        check("nose", self.nose.len(), 1, false)?;
        check("jaw_outline", self.jaw_outline.len(), JAW_POINTS, true)?;
        Ok(())
    }

    /// The nose-tip reference point (nose point 0).
    pub fn nose_tip(&self) -> Point2 {
        self.nose[0]
    }

    /// Centroid of a point group.
    pub fn centroid(points: &[Point2]) -> Point2 {
        let n = points.len().max(1) as f32;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2::new(sx / n, sy / n)
    }

    /// Axis-aligned bounding box of a point group as (min, max).
    pub fn bounds(points: &[Point2]) -> (Point2, Point2) {
        let mut min = Point2::new(f32::MAX, f32::MAX);
        let mut max = Point2::new(f32::MIN, f32::MIN);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// A plausible frontal face in a 200x200 image, used across recipe tests.
    pub fn frontal_face() -> FaceLandmarks {
        let eye = |cx: f32, cy: f32| {
            vec![
                Point2::new(cx - 15.0, cy),
                Point2::new(cx - 7.0, cy - 5.0),
                Point2::new(cx + 7.0, cy - 5.0),
                Point2::new(cx + 15.0, cy),
                Point2::new(cx + 7.0, cy + 5.0),
                Point2::new(cx - 7.0, cy + 5.0),
            ]
        };

        // Outer lip ring (points 0-11): upper arc left->right, lower arc back.
        let mouth = vec![
            Point2::new(75.0, 140.0),
            Point2::new(83.0, 135.0),
            Point2::new(92.0, 132.0),
            Point2::new(100.0, 133.0),
            Point2::new(108.0, 132.0),
            Point2::new(117.0, 135.0),
            Point2::new(125.0, 140.0),
            Point2::new(117.0, 148.0),
            Point2::new(108.0, 152.0),
            Point2::new(100.0, 153.0),
            Point2::new(92.0, 152.0),
            Point2::new(83.0, 148.0),
        ];

        // 17 jaw points tracing an arc from left ear to right ear.
        let jaw_outline = (0..17)
            .map(|i| {
                let t = i as f32 / 16.0;
                let angle = std::f32::consts::PI * (1.0 - t);
                Point2::new(100.0 + 70.0 * angle.cos(), 90.0 + 90.0 * angle.sin())
            })
            .collect();

        FaceLandmarks {
            left_eye: eye(70.0, 85.0),
            right_eye: eye(130.0, 85.0),
            mouth,
            nose: vec![Point2::new(100.0, 115.0), Point2::new(95.0, 108.0), Point2::new(105.0, 108.0)],
            jaw_outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::frontal_face;
    use super::*;

    #[test]
    fn test_fixture_is_valid() {
        assert!(frontal_face().validate().is_ok());
    }

    #[test]
    fn test_wrong_eye_count_rejected() {
        let mut face = frontal_face();
        face.left_eye.pop();
        assert!(face.validate().is_err());
    }

    #[test]
    fn test_short_mouth_rejected() {
        let mut face = frontal_face();
        face.mouth.truncate(10);
        assert!(face.validate().is_err());
    }

    #[test]
    fn test_midpoint_and_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 3.0);
        assert_eq!(a.midpoint(&b), Point2::new(2.0, 1.5));
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_centroid_and_bounds() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 20.0)];
        assert_eq!(FaceLandmarks::centroid(&pts), Point2::new(5.0, 10.0));
        let (min, max) = FaceLandmarks::bounds(&pts);
        assert_eq!(min, Point2::new(0.0, 0.0));
        assert_eq!(max, Point2::new(10.0, 20.0));
    }
}
