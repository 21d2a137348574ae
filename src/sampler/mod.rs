//! Turns a classified equation into canvas points.
//!
//! The pipeline is a pure function of the viewport, the expression and the options:
//!
//! 1. [`classify`] picks the equation form,
//! 2. one sampler per form compiles its expression(s) once and walks its domain,
//! 3. [`decimate`] bounds the buffer,
//! 4. [`PlotOutput::into_flat`] interleaves the coordinates for the canvas.
//!
//! Fatal problems (unrecognized input, compile failures, unusable intervals) abort the
//! call with a [`PlotError`]. A sample that fails to evaluate or is not finite is skipped
//! and counted in [`SamplingDiagnostics`]; it never aborts a loop.
//!
//! # Example
//!
//! ```
//! use graph_engine::geom::ViewportSpec;
//! use graph_engine::sampler::{PlotOptions, plot};
//!
//! let viewport = ViewportSpec::new(10.0, 10.0, 200.0, 200.0);
//! let output = plot(&viewport, "y = x^2", &PlotOptions::default()).unwrap();
//! assert!(!output.points.is_empty());
//! ```

mod decimate;
mod explicit;
mod implicit;
mod interval;
mod output;
mod parametric;
mod polar;

use serde::{Deserialize, Serialize};

use crate::expr::{CompiledExpression, Evaluator, ExpressionError, MevalEvaluator};
use crate::geom::{Tolerance, ViewportSpec};
use crate::parse::{EquationForm, FormKind, classify};

pub use decimate::{MAX_COORDINATES, decimate, remove_alternating_points};
pub use explicit::sample_explicit;
pub use implicit::sample_implicit;
pub use interval::{
    BoundSpec, POLAR_FALLBACK_END, POLAR_FALLBACK_STEP, ParameterSweep, resolve_interval,
};
pub use output::{PointBuffer, flatten};
pub use parametric::sample_parametric;
pub use polar::sample_polar;

/// Errors that abort a plotting call before or instead of sampling.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
    #[error("`{0}` is not an explicit, implicit, parametric or polar equation")]
    Unrecognized(String),
    #[error("{role} does not compile: {source}")]
    Compile {
        role: &'static str,
        source: ExpressionError,
    },
    #[error("{variable} interval is required for this equation")]
    MissingInterval { variable: &'static str },
    #[error("{variable} interval {bound} bound is invalid: {source}")]
    Interval {
        variable: &'static str,
        bound: &'static str,
        source: ExpressionError,
    },
}

/// Options controlling one plotting call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Domain of `t` for parametric curves; required for that form.
    pub t_interval: Option<BoundSpec>,
    /// Domain of `theta` for polar curves; `None` uses `[0, 12π)` in steps of 0.1.
    pub theta_interval: Option<BoundSpec>,
    /// Relative tolerance for accepting an implicit pixel.
    pub tolerance: f64,
    /// Cap on returned coordinates (two per point).
    pub max_coordinates: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            t_interval: None,
            theta_interval: None,
            tolerance: Tolerance::IMPLICIT.eps,
            max_coordinates: MAX_COORDINATES,
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn with_t_interval(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.t_interval = Some(BoundSpec::new(start, end));
        self
    }

    #[must_use]
    pub fn with_theta_interval(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.theta_interval = Some(BoundSpec::new(start, end));
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_coordinates(mut self, max_coordinates: usize) -> Self {
        self.max_coordinates = max_coordinates;
        self
    }
}

/// Counters collected while sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SamplingDiagnostics {
    /// Form the expression was classified as.
    pub form: FormKind,
    /// Domain samples visited (columns, pixels or parameter values).
    pub samples_evaluated: usize,
    /// Points appended before decimation.
    pub samples_accepted: usize,
    /// Evaluations that produced NaN or an infinity.
    pub non_finite_samples: usize,
    /// Evaluations the backend reported as failed.
    pub evaluation_errors: usize,
    /// Thinning passes applied by the decimator.
    pub decimation_passes: usize,
    /// Points handed back to the caller.
    pub output_points: usize,
}

impl SamplingDiagnostics {
    #[must_use]
    pub fn new(form: FormKind) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Samples skipped because at least one evaluation was unusable.
    #[must_use]
    pub fn rejected_evaluations(&self) -> usize {
        self.non_finite_samples + self.evaluation_errors
    }

    /// One-line summary for logs and the CLI.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "form={} evaluated={} accepted={} non_finite={} errors={} decimation_passes={} output={}",
            self.form,
            self.samples_evaluated,
            self.samples_accepted,
            self.non_finite_samples,
            self.evaluation_errors,
            self.decimation_passes,
            self.output_points
        )
    }

    /// Evaluates `expression` and keeps the value only if it is finite.
    pub(crate) fn finite<C: CompiledExpression>(
        &mut self,
        expression: &C,
        values: &[f64],
    ) -> Option<f64> {
        match expression.evaluate(values) {
            Ok(value) if value.is_finite() => Some(value),
            Ok(_) => {
                self.non_finite_samples += 1;
                None
            }
            Err(error) => {
                log::trace!("sample at {values:?} rejected: {error}");
                self.evaluation_errors += 1;
                None
            }
        }
    }
}

/// Result of a successful plotting call.
#[derive(Debug, Clone)]
pub struct PlotOutput {
    pub form: EquationForm,
    pub points: PointBuffer,
    pub diagnostics: SamplingDiagnostics,
}

impl PlotOutput {
    /// Interleaved `f32` coordinates, ready for the canvas.
    #[must_use]
    pub fn into_flat(self) -> Vec<f32> {
        self.points.to_flat()
    }
}

/// Plots `expression` with the meval backend.
pub fn plot(
    viewport: &ViewportSpec,
    expression: &str,
    options: &PlotOptions,
) -> Result<PlotOutput, PlotError> {
    plot_with_evaluator(&MevalEvaluator::new(), viewport, expression, options)
}

/// Plots `expression` with a caller-supplied evaluator backend.
pub fn plot_with_evaluator<E: Evaluator>(
    evaluator: &E,
    viewport: &ViewportSpec,
    expression: &str,
    options: &PlotOptions,
) -> Result<PlotOutput, PlotError> {
    viewport.validate().map_err(PlotError::InvalidViewport)?;

    let form = classify(expression);
    log::debug!("`{}` classified as {}", expression.trim(), form.kind());

    let mapper = viewport.mapper();
    let mut diagnostics = SamplingDiagnostics::new(form.kind());

    let mut points = match &form {
        EquationForm::Explicit { rhs } => sample_explicit(evaluator, rhs, &mapper, &mut diagnostics)?,
        EquationForm::Implicit { lhs, rhs } => sample_implicit(
            evaluator,
            lhs,
            rhs,
            &mapper,
            Tolerance::new(options.tolerance),
            &mut diagnostics,
        )?,
        EquationForm::Parametric { x_expr, y_expr } => sample_parametric(
            evaluator,
            x_expr,
            y_expr,
            options.t_interval.as_ref(),
            &mapper,
            &mut diagnostics,
        )?,
        EquationForm::Polar { r_expr } => sample_polar(
            evaluator,
            r_expr,
            options.theta_interval.as_ref(),
            &mapper,
            &mut diagnostics,
        )?,
        EquationForm::Unrecognized => {
            return Err(PlotError::Unrecognized(expression.trim().to_owned()));
        }
    };

    diagnostics.samples_accepted = points.len();
    diagnostics.decimation_passes = decimate(&mut points, options.max_coordinates);
    diagnostics.output_points = points.len();
    log::debug!("{}", diagnostics.summary());

    Ok(PlotOutput {
        form,
        points,
        diagnostics,
    })
}

/// Compiles `source` or reports which part of the equation failed.
pub(crate) fn compile_part<E: Evaluator>(
    evaluator: &E,
    role: &'static str,
    source: &str,
    variables: &[&str],
) -> Result<E::Compiled, PlotError> {
    evaluator
        .compile(source, variables)
        .map_err(|source| PlotError::Compile { role, source })
}

#[cfg(test)]
mod tests;
