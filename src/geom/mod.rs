mod core;
mod viewport;

pub use self::core::{Point, Tolerance, approx_equal};
pub use viewport::{CoordinateMapper, MAX_CANVAS_EXTENT, ViewportSpec};
