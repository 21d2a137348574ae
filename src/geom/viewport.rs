//! Viewport description and the pixel ↔ math coordinate mapping.
//!
//! The canvas origin sits in the top-left corner with `y` growing downwards. The
//! mathematical origin is mapped onto the canvas centre, shifted by the pixel offsets.

use serde::Deserialize;

use super::core::Point;

/// Largest accepted canvas side in pixels. Samplers allocate per column, row or parameter
/// step, and all of those grow with the canvas.
pub const MAX_CANVAS_EXTENT: f64 = 32_768.0;

/// Visible region of the mathematical plane and the canvas it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportSpec {
    /// Mathematical width covered by the canvas.
    pub x_width: f64,
    /// Mathematical height covered by the canvas.
    pub y_width: f64,
    /// Horizontal pan in pixels.
    #[serde(default)]
    pub x_offset: f64,
    /// Vertical pan in pixels.
    #[serde(default)]
    pub y_offset: f64,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl ViewportSpec {
    /// Viewport without panning.
    #[must_use]
    pub const fn new(x_width: f64, y_width: f64, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            x_width,
            y_width,
            x_offset: 0.0,
            y_offset: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Same viewport panned by the given pixel offsets.
    #[must_use]
    pub fn with_offset(self, x_offset: f64, y_offset: f64) -> Self {
        Self {
            x_offset,
            y_offset,
            ..self
        }
    }

    /// Pixels per mathematical unit along x.
    #[must_use]
    pub fn x_scale_factor(&self) -> f64 {
        self.canvas_width / self.x_width
    }

    /// Pixels per mathematical unit along y.
    #[must_use]
    pub fn y_scale_factor(&self) -> f64 {
        self.canvas_height / self.y_width
    }

    /// Checks that all extents are positive, all values finite and the canvas no larger than
    /// [`MAX_CANVAS_EXTENT`] on either side.
    pub fn validate(&self) -> Result<(), String> {
        let extents = [
            ("x_width", self.x_width),
            ("y_width", self.y_width),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        for (name, value) in extents {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a finite positive number, got {value}"));
            }
        }
        for (name, value) in &extents[2..] {
            if *value > MAX_CANVAS_EXTENT {
                return Err(format!(
                    "{name} must not exceed {MAX_CANVAS_EXTENT} pixels, got {value}"
                ));
            }
        }
        for (name, value) in [("x_offset", self.x_offset), ("y_offset", self.y_offset)] {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(*self)
    }
}

/// Converts between pixel indices and mathematical coordinates for one viewport.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    viewport: ViewportSpec,
    x_scale: f64,
    y_scale: f64,
    half_width: f64,
    half_height: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(viewport: ViewportSpec) -> Self {
        Self {
            x_scale: viewport.x_scale_factor(),
            y_scale: viewport.y_scale_factor(),
            half_width: viewport.canvas_width / 2.0,
            half_height: viewport.canvas_height / 2.0,
            viewport,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportSpec {
        &self.viewport
    }

    /// Pixel column → mathematical x. Offsets are not applied here.
    #[must_use]
    pub fn column_to_x(&self, i: f64) -> f64 {
        ((i - self.half_width) / self.viewport.canvas_width) * self.viewport.x_width
    }

    /// Pixel row → mathematical y. Offsets are not applied here.
    #[must_use]
    pub fn row_to_y(&self, j: f64) -> f64 {
        -((j - self.half_height) / self.viewport.canvas_height) * self.viewport.y_width
    }

    /// Forward map of a pixel position into the mathematical plane.
    #[must_use]
    pub fn to_math(&self, i: f64, j: f64) -> (f64, f64) {
        (self.column_to_x(i), self.row_to_y(j))
    }

    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        x * self.x_scale + self.half_width + self.viewport.x_offset
    }

    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        -y * self.y_scale + self.half_height + self.viewport.y_offset
    }

    /// Inverse map of a mathematical point onto the canvas, offsets included.
    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> Point {
        Point::new(self.x_to_pixel(x), self.y_to_pixel(y))
    }

    /// Places the polar sample `(r, theta)` on the canvas.
    #[must_use]
    pub fn polar_to_pixel(&self, r: f64, theta: f64) -> Point {
        let (sin, cos) = theta.sin_cos();
        self.to_pixel(r * cos, r * sin)
    }

    /// Inclusive integer range of columns to scan, compensated for the horizontal pan.
    #[must_use]
    pub fn column_range(&self) -> (i64, i64) {
        pixel_range(self.viewport.canvas_width, self.viewport.x_offset)
    }

    /// Inclusive integer range of rows to scan, compensated for the vertical pan.
    #[must_use]
    pub fn row_range(&self) -> (i64, i64) {
        pixel_range(self.viewport.canvas_height, self.viewport.y_offset)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pixel_range(extent: f64, offset: f64) -> (i64, i64) {
    // Start truncates toward zero; the loop runs while the index stays within `extent - offset`.
    let start = (-offset).trunc() as i64;
    let end = (extent - offset).floor() as i64;
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ViewportSpec {
        ViewportSpec::new(10.0, 10.0, 200.0, 200.0)
    }

    #[test]
    fn forward_map_centres_origin() {
        let mapper = square().mapper();
        assert_eq!(mapper.to_math(100.0, 100.0), (0.0, 0.0));
        assert_eq!(mapper.to_math(0.0, 0.0), (-5.0, 5.0));
        assert_eq!(mapper.to_math(200.0, 200.0), (5.0, -5.0));
    }

    #[test]
    fn inverse_of_forward_is_identity_without_offsets() {
        let viewport = ViewportSpec::new(12.0, 7.5, 640.0, 400.0);
        let mapper = viewport.mapper();
        let mut x = -6.0;
        while x <= 6.0 {
            let mut y = -3.75;
            while y <= 3.75 {
                let pixel = mapper.to_pixel(x, y);
                let (mx, my) = mapper.to_math(pixel.x, pixel.y);
                assert!((mx - x).abs() < 1e-9, "x drift at ({x}, {y})");
                assert!((my - y).abs() < 1e-9, "y drift at ({x}, {y})");
                y += 0.25;
            }
            x += 0.5;
        }
    }

    #[test]
    fn offsets_translate_without_scaling() {
        let plain = square().mapper();
        let panned = square().with_offset(15.0, -7.0).mapper();
        let a = plain.to_pixel(1.5, -2.0);
        let b = panned.to_pixel(1.5, -2.0);
        assert!((b.x - a.x - 15.0).abs() < 1e-12);
        assert!((b.y - a.y + 7.0).abs() < 1e-12);
    }

    #[test]
    fn scale_factors_follow_canvas_over_extent() {
        let viewport = ViewportSpec::new(4.0, 2.0, 400.0, 300.0);
        assert_eq!(viewport.x_scale_factor(), 100.0);
        assert_eq!(viewport.y_scale_factor(), 150.0);
    }

    #[test]
    fn polar_zero_angle_lies_on_positive_x_axis() {
        let mapper = square().mapper();
        let point = mapper.polar_to_pixel(2.0, 0.0);
        assert!((point.x - 140.0).abs() < 1e-9);
        assert!((point.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn column_range_compensates_offset() {
        assert_eq!(square().mapper().column_range(), (0, 200));
        assert_eq!(square().with_offset(30.0, 0.0).mapper().column_range(), (-30, 170));
        assert_eq!(square().with_offset(-12.5, 0.0).mapper().column_range(), (12, 212));
        assert_eq!(square().with_offset(0.0, 8.0).mapper().row_range(), (-8, 192));
    }

    #[test]
    fn validate_rejects_degenerate_extents() {
        assert!(square().validate().is_ok());
        assert!(ViewportSpec::new(0.0, 1.0, 10.0, 10.0).validate().is_err());
        assert!(ViewportSpec::new(1.0, 1.0, -10.0, 10.0).validate().is_err());
        assert!(ViewportSpec::new(1.0, f64::NAN, 10.0, 10.0).validate().is_err());
        assert!(square().with_offset(f64::INFINITY, 0.0).validate().is_err());
    }

    #[test]
    fn validate_bounds_canvas_size() {
        let largest = ViewportSpec::new(1.0, 1.0, MAX_CANVAS_EXTENT, MAX_CANVAS_EXTENT);
        assert!(largest.validate().is_ok());
        assert!(ViewportSpec::new(1.0, 1.0, 1e19, 10.0).validate().is_err());
        assert!(ViewportSpec::new(1.0, 1.0, 10.0, MAX_CANVAS_EXTENT + 1.0).validate().is_err());
    }
}
