use image::{ImageBuffer, Rgb, RgbImage};

use crate::face::Point2;
use crate::render::{Region, Shade};

/// Alpha at `dist` from the center of a radial gradient of the given
/// radius: 1.0 at the center, falling linearly to 0.0 at the outer edge.
pub fn radial_falloff(dist: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - dist / radius).clamp(0.0, 1.0)
}

/// The drawing surface the compositor paints on.
///
/// A thin wrapper around an RGB buffer sized to the source image. Overlays
/// are translucent shades composited source-over onto the opaque base, so
/// the buffer itself never carries an alpha channel. Every primitive guards
/// its own bounds; painting outside the surface is a silent no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    buffer: RgbImage,
}

impl Surface {
    /// Wrap an existing RGB image buffer.
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a surface with the given dimensions filled with black.
    pub fn new_black(width: u32, height: u32) -> Self {
        Self { buffer: ImageBuffer::new(width, height) }
    }

    /// Create a surface filled with a uniform color, used as a neutral
    /// "skin" base in tests.
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Save the surface as a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.buffer.save(path)
    }

    /// Source-over blend one pixel. Out-of-bounds coordinates and
    /// non-positive alpha are no-ops.
    pub fn blend_pixel(&mut self, x: i32, y: i32, shade: Shade, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let pixel = self.buffer.get_pixel_mut(x as u32, y as u32);
        let src = shade.channels();
        for channel in 0..3 {
            let base = pixel[channel] as f32;
            let over = src[channel] as f32;
            pixel[channel] = (base * (1.0 - alpha) + over * alpha).round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Scanline fill of a closed region with a flat translucent shade.
    pub fn fill_region(&mut self, region: &Region, shade: Shade, alpha: f32) {
        if region.len() < 3 {
            return;
        }
        let (min, max) = region.bounds();
        let y0 = min.y.floor() as i32;
        let y1 = max.y.ceil() as i32;
        let x0 = min.x.floor() as i32;
        let x1 = max.x.ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if region.contains(x as f32 + 0.5, y as f32 + 0.5) {
                    self.blend_pixel(x, y, shade, alpha);
                }
            }
        }
    }

    /// Fill a region with a radial gradient: `max_alpha` at `center`,
    /// fading linearly to transparent at `radius`.
    pub fn fill_region_radial(
        &mut self,
        region: &Region,
        center: Point2,
        radius: f32,
        shade: Shade,
        max_alpha: f32,
    ) {
        if region.len() < 3 || radius <= 0.0 {
            return;
        }
        let (min, max) = region.bounds();
        let y0 = min.y.floor() as i32;
        let y1 = max.y.ceil() as i32;
        let x0 = min.x.floor() as i32;
        let x1 = max.x.ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if !region.contains(px, py) {
                    continue;
                }
                let dist = center.distance(&Point2::new(px, py));
                let alpha = max_alpha * radial_falloff(dist, radius);
                self.blend_pixel(x, y, shade, alpha);
            }
        }
    }

    /// Radial-gradient disc, transparent at the rim.
    pub fn fill_circle_radial(&mut self, center: Point2, radius: f32, shade: Shade, max_alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let y0 = (center.y - radius).floor() as i32;
        let y1 = (center.y + radius).ceil() as i32;
        let x0 = (center.x - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dist = center.distance(&Point2::new(x as f32 + 0.5, y as f32 + 0.5));
                if dist > radius {
                    continue;
                }
                let alpha = max_alpha * radial_falloff(dist, radius);
                self.blend_pixel(x, y, shade, alpha);
            }
        }
    }

    /// Stroke a single segment with square caps of the given thickness.
    pub fn stroke_line(&mut self, from: Point2, to: Point2, shade: Shade, alpha: f32, thickness: f32) {
        let length = from.distance(&to);
        let steps = (length.ceil() as usize).max(1) * 2;
        let half = (thickness / 2.0).max(0.5);

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let cx = from.x + (to.x - from.x) * t;
            let cy = from.y + (to.y - from.y) * t;

            let r = half.ceil() as i32;
            for dy in -r..=r {
                for dx in -r..=r {
                    let dist = ((dx * dx + dy * dy) as f32).sqrt();
                    if dist <= half {
                        self.blend_pixel(cx.round() as i32 + dx, cy.round() as i32 + dy, shade, alpha);
                    }
                }
            }
        }
    }

    /// Stroke an open polyline; `points` shorter than two is a no-op.
    pub fn stroke_polyline(&mut self, points: &[Point2], shade: Shade, alpha: f32, thickness: f32) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], shade, alpha, thickness);
        }
    }

    /// Stroke a closed outline (polyline plus the closing segment).
    pub fn stroke_outline(&mut self, points: &[Point2], shade: Shade, alpha: f32, thickness: f32) {
        if points.len() < 2 {
            return;
        }
        self.stroke_polyline(points, shade, alpha, thickness);
        self.stroke_line(points[points.len() - 1], points[0], shade, alpha, thickness);
    }

    /// Stroke a flattened quadratic curve.
    pub fn stroke_quadratic(
        &mut self,
        from: Point2,
        ctrl: Point2,
        to: Point2,
        shade: Shade,
        alpha: f32,
        thickness: f32,
    ) {
        let mut flattened = Region::new();
        flattened.push(from);
        flattened.push_quadratic(ctrl, to);
        self.stroke_polyline(flattened.points(), shade, alpha, thickness);
    }
}
