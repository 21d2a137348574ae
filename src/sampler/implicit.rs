use crate::expr::Evaluator;
use crate::geom::{CoordinateMapper, Point, Tolerance};

use super::{PlotError, PointBuffer, SamplingDiagnostics, compile_part};

/// Scans every pixel and keeps those where `lhs ≈ rhs`.
///
/// Both sides are evaluated with `[x, y]`; a pixel whose sides are not both finite is
/// rejected without stopping the scan.
#[allow(clippy::cast_precision_loss)]
pub fn sample_implicit<E: Evaluator>(
    evaluator: &E,
    lhs: &str,
    rhs: &str,
    mapper: &CoordinateMapper,
    tolerance: Tolerance,
    diagnostics: &mut SamplingDiagnostics,
) -> Result<PointBuffer, PlotError> {
    let left = compile_part(evaluator, "lhs", lhs, &["x", "y"])?;
    let right = compile_part(evaluator, "rhs", rhs, &["x", "y"])?;

    let (first_column, last_column) = mapper.column_range();
    let (first_row, last_row) = mapper.row_range();
    let viewport = *mapper.viewport();
    let mut points = PointBuffer::new();

    for column in first_column..=last_column {
        let i = column as f64;
        let x = mapper.column_to_x(i);
        for row in first_row..=last_row {
            let j = row as f64;
            let values = [x, mapper.row_to_y(j)];
            diagnostics.samples_evaluated += 1;

            let Some(a) = diagnostics.finite(&left, &values) else {
                continue;
            };
            let Some(b) = diagnostics.finite(&right, &values) else {
                continue;
            };
            if tolerance.approx_eq_relative(a, b) {
                points.push(Point::new(i + viewport.x_offset, j + viewport.y_offset));
            }
        }
    }

    Ok(points)
}
