use super::FakeEvaluator;
use crate::expr::ExpressionError;
use crate::geom::{Point, Tolerance, ViewportSpec};
use crate::sampler::{PlotError, SamplingDiagnostics, sample_implicit};

fn window() -> ViewportSpec {
    // [-6, 6] x [-6, 6] at 10 px per unit.
    ViewportSpec::new(12.0, 12.0, 120.0, 120.0)
}

fn circle() -> FakeEvaluator {
    FakeEvaluator::new().with("x^2+y^2", |v| v[0] * v[0] + v[1] * v[1])
}

#[test]
fn circle_points_lie_within_tolerance_of_radius() {
    let mapper = window().mapper();
    let mut diagnostics = SamplingDiagnostics::default();

    let points = sample_implicit(
        &circle(),
        "x^2+y^2",
        "25",
        &mapper,
        Tolerance::IMPLICIT,
        &mut diagnostics,
    )
    .expect("samples");

    assert!(!points.is_empty());
    assert_eq!(diagnostics.samples_evaluated, 121 * 121);
    for point in &points {
        let (x, y) = mapper.to_math(point.x, point.y);
        let radius = x.hypot(y);
        assert!((radius - 5.0).abs() < 5.0 * Tolerance::IMPLICIT.eps, "{point:?} r={radius}");
    }
    assert!(points.iter().any(|p| *p == Point::new(110.0, 60.0)));
    assert!(points.iter().any(|p| *p == Point::new(60.0, 10.0)));
}

#[test]
fn zero_left_side_needs_exact_match() {
    // `x = 0` only holds on the centre column, where x is exactly zero.
    let evaluator = FakeEvaluator::new().with("x", |v| v[0]);
    let mut diagnostics = SamplingDiagnostics::default();

    let points = sample_implicit(
        &evaluator,
        "x",
        "0",
        &window().mapper(),
        Tolerance::IMPLICIT,
        &mut diagnostics,
    )
    .expect("samples");

    assert_eq!(points.len(), 121);
    assert!(points.iter().all(|p| p.x == 60.0));
}

#[test]
fn pixel_failures_do_not_abort_the_scan() {
    let evaluator = circle().with_fallible("guarded", |v| {
        if v[1] < 0.0 {
            Err(ExpressionError::Evaluate("below axis".to_owned()))
        } else {
            Ok(v[0] * v[0] + v[1] * v[1])
        }
    });
    let mapper = window().mapper();
    let mut diagnostics = SamplingDiagnostics::default();

    let points = sample_implicit(
        &evaluator,
        "guarded",
        "25",
        &mapper,
        Tolerance::IMPLICIT,
        &mut diagnostics,
    )
    .expect("samples");

    assert!(!points.is_empty());
    assert_eq!(diagnostics.evaluation_errors, 121 * 60);
    assert!(points.iter().all(|p| mapper.to_math(p.x, p.y).1 >= 0.0));
}

#[test]
fn offsets_translate_accepted_pixels() {
    let evaluator = FakeEvaluator::new().with("x", |v| v[0]);
    let mut diagnostics = SamplingDiagnostics::default();
    let viewport = window().with_offset(5.0, -3.0);

    let points = sample_implicit(
        &evaluator,
        "x",
        "0",
        &viewport.mapper(),
        Tolerance::IMPLICIT,
        &mut diagnostics,
    )
    .expect("samples");

    assert!(!points.is_empty());
    assert!(points.iter().all(|p| p.x == 65.0));
}

#[test]
fn compile_failure_on_right_side_is_reported() {
    let mut diagnostics = SamplingDiagnostics::default();
    let error = sample_implicit(
        &circle(),
        "x^2+y^2",
        "unknown",
        &window().mapper(),
        Tolerance::IMPLICIT,
        &mut diagnostics,
    )
    .unwrap_err();

    assert!(matches!(error, PlotError::Compile { role: "rhs", .. }));
}
