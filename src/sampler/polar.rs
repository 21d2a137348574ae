use crate::expr::Evaluator;
use crate::geom::CoordinateMapper;

use super::interval::{BoundSpec, ParameterSweep, resolve_interval};
use super::{PlotError, PointBuffer, SamplingDiagnostics, compile_part};

/// Samples `r = f(theta)`.
///
/// With an interval the sweep is inclusive with the parametric step; without one it covers
/// `[0, 12π)` in steps of 0.1.
pub fn sample_polar<E: Evaluator>(
    evaluator: &E,
    r_expr: &str,
    interval: Option<&BoundSpec>,
    mapper: &CoordinateMapper,
    diagnostics: &mut SamplingDiagnostics,
) -> Result<PointBuffer, PlotError> {
    let radius = compile_part(evaluator, "r(theta)", r_expr, &["theta"])?;

    let sweep = match interval {
        Some(spec) => {
            let (start, end) = resolve_interval(evaluator, "theta", spec)?;
            ParameterSweep::per_column(start, end, mapper.viewport().canvas_width)
        }
        None => ParameterSweep::polar_fallback(),
    };

    let mut points = PointBuffer::with_capacity(sweep.len());
    for theta in sweep.values() {
        diagnostics.samples_evaluated += 1;
        if let Some(r) = diagnostics.finite(&radius, &[theta]) {
            points.push(mapper.polar_to_pixel(r, theta));
        }
    }

    Ok(points)
}
