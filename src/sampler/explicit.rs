use crate::expr::Evaluator;
use crate::geom::{CoordinateMapper, Point};

use super::{PlotError, PointBuffer, SamplingDiagnostics, compile_part};

/// Samples `y = rhs` once per pixel column.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sample_explicit<E: Evaluator>(
    evaluator: &E,
    rhs: &str,
    mapper: &CoordinateMapper,
    diagnostics: &mut SamplingDiagnostics,
) -> Result<PointBuffer, PlotError> {
    let function = compile_part(evaluator, "y(x)", rhs, &["x"])?;

    let (first, last) = mapper.column_range();
    let x_offset = mapper.viewport().x_offset;
    let mut points = PointBuffer::with_capacity((last - first + 1).max(0) as usize);

    for column in first..=last {
        let i = column as f64;
        diagnostics.samples_evaluated += 1;
        let Some(y) = diagnostics.finite(&function, &[mapper.column_to_x(i)]) else {
            continue;
        };
        points.push(Point::new(i + x_offset, mapper.y_to_pixel(y)));
    }

    Ok(points)
}
