use crate::expr::Evaluator;
use crate::geom::CoordinateMapper;

use super::interval::{BoundSpec, ParameterSweep, resolve_interval};
use super::{PlotError, PointBuffer, SamplingDiagnostics, compile_part};

/// Samples `(x(t), y(t))` over the resolved `t` interval, about two samples per column.
pub fn sample_parametric<E: Evaluator>(
    evaluator: &E,
    x_expr: &str,
    y_expr: &str,
    interval: Option<&BoundSpec>,
    mapper: &CoordinateMapper,
    diagnostics: &mut SamplingDiagnostics,
) -> Result<PointBuffer, PlotError> {
    let spec = interval.ok_or(PlotError::MissingInterval { variable: "t" })?;
    let x_of_t = compile_part(evaluator, "x(t)", x_expr, &["t"])?;
    let y_of_t = compile_part(evaluator, "y(t)", y_expr, &["t"])?;

    let (start, end) = resolve_interval(evaluator, "t", spec)?;
    let sweep = ParameterSweep::per_column(start, end, mapper.viewport().canvas_width);
    if sweep.is_empty() {
        log::warn!("t interval [{start}, {end}] is reversed; nothing to sample");
    }

    let mut points = PointBuffer::with_capacity(sweep.len());
    for t in sweep.values() {
        diagnostics.samples_evaluated += 1;
        let Some(x) = diagnostics.finite(&x_of_t, &[t]) else {
            continue;
        };
        let Some(y) = diagnostics.finite(&y_of_t, &[t]) else {
            continue;
        };
        points.push(mapper.to_pixel(x, y));
    }

    Ok(points)
}
