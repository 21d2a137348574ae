//! Bounds the size of a point buffer by dropping every other point.

use crate::geom::Point;

use super::output::PointBuffer;

/// Default cap on the number of coordinates handed back to the canvas (50 000 points).
pub const MAX_COORDINATES: usize = 100_000;

/// Halves `buffer` until it holds at most `max_coordinates` coordinates.
///
/// Each pass keeps one point, drops the next, and so on, preserving order. Returns the
/// number of passes performed; a buffer already within the cap is left untouched.
pub fn decimate(buffer: &mut PointBuffer, max_coordinates: usize) -> usize {
    let max_points = (max_coordinates / 2).max(1);
    let mut passes = 0;

    while buffer.len() > max_points {
        let thinned = remove_alternating_points(buffer.points());
        log::debug!(
            "decimation pass {}: {} -> {} points",
            passes + 1,
            buffer.len(),
            thinned.len()
        );
        *buffer = PointBuffer::from(thinned);
        passes += 1;
    }

    passes
}

/// One thinning pass: keeps points at even indices.
#[must_use]
pub fn remove_alternating_points(points: &[Point]) -> Vec<Point> {
    points.iter().step_by(2).copied().collect()
}
