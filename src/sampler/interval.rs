//! Resolution of parameter domains (`t`, `theta`) and the sweeps that walk them.

use serde::Deserialize;

use crate::expr::Evaluator;

use super::PlotError;

/// Fallback polar domain `[0, 12π)` when the caller supplies none.
pub const POLAR_FALLBACK_END: f64 = 12.0 * std::f64::consts::PI;

/// Fixed step of the polar fallback domain.
pub const POLAR_FALLBACK_STEP: f64 = 0.1;

/// Unresolved interval bounds as typed by the user, e.g. `"0"` and `"2pi"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoundSpec {
    pub start: String,
    pub end: String,
}

impl BoundSpec {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// `None` when both bounds are blank, which is how hosts signal "not supplied".
    #[must_use]
    pub fn from_optional(start: &str, end: &str) -> Option<Self> {
        if start.trim().is_empty() && end.trim().is_empty() {
            None
        } else {
            Some(Self::new(start, end))
        }
    }
}

/// Evaluates both bounds of `spec` as closed expressions.
pub fn resolve_interval<E: Evaluator>(
    evaluator: &E,
    variable: &'static str,
    spec: &BoundSpec,
) -> Result<(f64, f64), PlotError> {
    let resolve = |bound: &'static str, source: &str| {
        evaluator
            .evaluate_constant(source)
            .map_err(|source| PlotError::Interval {
                variable,
                bound,
                source,
            })
    };

    let start = resolve("start", &spec.start)?;
    let end = resolve("end", &spec.end)?;
    log::debug!("{variable} interval resolved to [{start}, {end}]");
    Ok((start, end))
}

/// Evenly spaced parameter values, computed from an index so that no error accumulates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSweep {
    start: f64,
    end: f64,
    step: f64,
    count: usize,
}

impl ParameterSweep {
    /// `[start, end]` with two samples per canvas column.
    ///
    /// A reversed domain is empty; a degenerate one yields its single value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn per_column(start: f64, end: f64, canvas_width: f64) -> Self {
        if start.is_nan() || end.is_nan() || end < start {
            return Self::empty(start);
        }
        let span = end - start;
        if span == 0.0 {
            return Self {
                start,
                end,
                step: 0.0,
                count: 1,
            };
        }

        let step = span / (canvas_width * 2.0);
        let intervals = (span / step + 1e-9).floor();
        Self {
            start,
            end,
            step,
            count: intervals as usize + 1,
        }
    }

    /// `[start, end)` with a fixed step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn half_open(start: f64, end: f64, step: f64) -> Self {
        if start.is_nan() || end.is_nan() || end <= start || step.is_nan() || step <= 0.0 {
            return Self::empty(start);
        }
        let count = ((end - start) / step).ceil() as usize;
        Self {
            start,
            end,
            step,
            count,
        }
    }

    /// The polar domain used when no interval is configured.
    #[must_use]
    pub fn polar_fallback() -> Self {
        Self::half_open(0.0, POLAR_FALLBACK_END, POLAR_FALLBACK_STEP)
    }

    fn empty(start: f64) -> Self {
        Self {
            start,
            end: start,
            step: 0.0,
            count: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |index| (self.start + index as f64 * self.step).min(self.end))
    }
}
