//! Point buffer produced by one sampling pass and its flattened boundary form.

use crate::geom::Point;

/// Ordered, append-only list of canvas points for a single call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of scalar coordinates, two per point.
    #[must_use]
    pub fn coordinate_count(&self) -> usize {
        self.points.len() * 2
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Flattens into `[x0, y0, x1, y1, …]` single-precision floats.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f32> {
        flatten(&self.points)
    }
}

impl From<Vec<Point>> for PointBuffer {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Interleaves the coordinates as `f32`, the format the canvas layer draws from.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn flatten(points: &[Point]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(points.len() * 2);
    for point in points {
        flat.push(point.x as f32);
        flat.push(point.y as f32);
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_point_order() {
        let buffer = PointBuffer::from(vec![Point::new(1.0, 2.0), Point::new(3.5, -4.25)]);
        assert_eq!(buffer.to_flat(), vec![1.0, 2.0, 3.5, -4.25]);
        assert_eq!(buffer.coordinate_count(), 4);
    }

    #[test]
    fn empty_buffer_flattens_to_nothing() {
        let buffer = PointBuffer::new();
        assert!(buffer.is_empty());
        assert!(buffer.to_flat().is_empty());
    }
}
