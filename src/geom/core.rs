use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Point
// ─────────────────────────────────────────────────────────────────────────────

/// A position on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance
// ─────────────────────────────────────────────────────────────────────────────

/// Relative tolerance used when deciding whether two sides of an equation agree.
///
/// - `Tolerance::IMPLICIT` - pixel acceptance for implicit curves (1%)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    /// Acceptance band for implicit sampling: both sides within 1% of the left side.
    pub const IMPLICIT: Self = Self { eps: 0.01 };

    #[must_use]
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Relative comparison anchored on `a`, see [`approx_equal`].
    #[must_use]
    pub fn approx_eq_relative(self, a: f64, b: f64) -> bool {
        approx_equal(a, b, self.eps)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::IMPLICIT
    }
}

/// Relative equality anchored on `a`.
///
/// For `a != 0` the relative difference `|(a - b) / a|` must be strictly below `eps`.
/// For `a == 0` only an exact match counts; the rule is intentionally asymmetric.
#[must_use]
pub fn approx_equal(a: f64, b: f64, eps: f64) -> bool {
    if a == 0.0 {
        a == b
    } else {
        ((a - b) / a).abs() < eps
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
