use crate::face::Point2;

/// Number of line segments a quadratic curve is flattened into.
const CURVE_SEGMENTS: usize = 12;

/// A closed drawable path built from landmark subsets.
///
/// Regions are stored as a flat polygon outline; curved edges are appended
/// as flattened quadratic Bézier segments so the fill stays a plain
/// even-odd polygon test.
#[derive(Debug, Clone, Default)]
pub struct Region {
    points: Vec<Point2>,
}

impl Region {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a closed region directly from an ordered outline.
    pub fn from_outline(points: &[Point2]) -> Self {
        Self { points: points.to_vec() }
    }

    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    pub fn extend_from(&mut self, points: &[Point2]) {
        self.points.extend_from_slice(points);
    }

    /// Append a quadratic curve from the current endpoint through `ctrl`
    /// to `end`, flattened into line segments. No-op start if empty.
    pub fn push_quadratic(&mut self, ctrl: Point2, end: Point2) {
        let start = match self.points.last() {
            Some(p) => *p,
            None => {
                self.points.push(end);
                return;
            }
        };

        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            let x = u * u * start.x + 2.0 * u * t * ctrl.x + t * t * end.x;
            let y = u * u * start.y + 2.0 * u * t * ctrl.y + t * t * end.y;
            self.points.push(Point2::new(x, y));
        }
    }

    /// Append a circular arc around `center`, sampled from `start_angle` to
    /// `end_angle` (radians, screen coordinates so y grows downward).
    pub fn push_arc(&mut self, center: Point2, radius: f32, start_angle: f32, end_angle: f32) {
        const ARC_SEGMENTS: usize = 24;
        for i in 0..=ARC_SEGMENTS {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let angle = start_angle + (end_angle - start_angle) * t;
            self.points.push(Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Even-odd containment test against the closed outline.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > y) != (pj.y > y) {
                let x_cross = pj.x + (y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
                if x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Axis-aligned bounds as (min, max); (0,0)-(0,0) when empty.
    pub fn bounds(&self) -> (Point2, Point2) {
        if self.points.is_empty() {
            return (Point2::new(0.0, 0.0), Point2::new(0.0, 0.0));
        }
        crate::face::FaceLandmarks::bounds(&self.points)
    }

    /// Centroid of the outline points; the anchor for radial fills.
    pub fn centroid(&self) -> Point2 {
        crate::face::FaceLandmarks::centroid(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Region {
        Region::from_outline(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_square_containment() {
        let region = unit_square();
        assert!(region.contains(5.0, 5.0));
        assert!(!region.contains(15.0, 5.0));
        assert!(!region.contains(5.0, -1.0));
    }

    #[test]
    fn test_degenerate_region_contains_nothing() {
        let region = Region::from_outline(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert!(!region.contains(0.5, 0.5));
    }

    #[test]
    fn test_quadratic_flattening_reaches_endpoint() {
        let mut region = Region::new();
        region.push(Point2::new(0.0, 0.0));
        region.push_quadratic(Point2::new(5.0, -10.0), Point2::new(10.0, 0.0));

        let last = *region.points().last().unwrap();
        assert!((last.x - 10.0).abs() < 1e-4);
        assert!(last.y.abs() < 1e-4);
        // The curve bulges toward the control point.
        assert!(region.points().iter().any(|p| p.y < -2.0));
    }

    #[test]
    fn test_arc_sampling() {
        let mut region = Region::new();
        region.push_arc(Point2::new(0.0, 0.0), 10.0, std::f32::consts::PI, 2.0 * std::f32::consts::PI);

        let first = region.points()[0];
        let last = *region.points().last().unwrap();
        assert!((first.x + 10.0).abs() < 1e-3);
        assert!((last.x - 10.0).abs() < 1e-3);
        // Every sample stays on the circle.
        for p in region.points() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_bounds_and_centroid() {
        let region = unit_square();
        let (min, max) = region.bounds();
        assert_eq!(min, Point2::new(0.0, 0.0));
        assert_eq!(max, Point2::new(10.0, 10.0));
        assert_eq!(region.centroid(), Point2::new(5.0, 5.0));
    }
}
