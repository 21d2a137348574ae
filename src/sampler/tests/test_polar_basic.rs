use std::f64::consts::TAU;

use super::{FakeEvaluator, approx_eq};
use crate::geom::{Point, ViewportSpec};
use crate::sampler::{BoundSpec, PlotError, SamplingDiagnostics, sample_polar};

fn viewport() -> ViewportSpec {
    ViewportSpec::new(10.0, 10.0, 200.0, 200.0)
}

#[test]
fn fallback_domain_samples_twelve_pi_in_tenths() {
    let evaluator = FakeEvaluator::new();
    let mut diagnostics = SamplingDiagnostics::default();

    let points = sample_polar(&evaluator, "2", None, &viewport().mapper(), &mut diagnostics)
        .expect("samples");

    assert_eq!(diagnostics.samples_evaluated, 377);
    assert_eq!(points.len(), 377);
    let centre = Point::new(100.0, 100.0);
    assert!(points.iter().all(|p| approx_eq(p.distance(centre), 40.0, 1e-9)));
}

#[test]
fn explicit_domain_uses_the_parametric_step() {
    let evaluator = FakeEvaluator::new()
        .with("theta", |v| v[0])
        .with_constant("2pi", TAU);
    let interval = BoundSpec::new("0", "2pi");
    let mut diagnostics = SamplingDiagnostics::default();

    let points = sample_polar(
        &evaluator,
        "theta",
        Some(&interval),
        &viewport().mapper(),
        &mut diagnostics,
    )
    .expect("samples");

    assert_eq!(points.len(), 401);
    // r = theta starts at the centre and ends one turn out on the positive x axis.
    assert_eq!(points.points()[0], Point::new(100.0, 100.0));
    let last = points.points()[400];
    assert!(approx_eq(last.x, 100.0 + TAU * 20.0, 1e-9));
    assert!(approx_eq(last.y, 100.0, 1e-9));
}

#[test]
fn non_finite_radius_is_skipped() {
    let evaluator = FakeEvaluator::new().with("1/theta", |v| 1.0 / v[0]);
    let mut diagnostics = SamplingDiagnostics::default();

    let points = sample_polar(&evaluator, "1/theta", None, &viewport().mapper(), &mut diagnostics)
        .expect("samples");

    assert_eq!(diagnostics.non_finite_samples, 1);
    assert_eq!(points.len(), 376);
}

#[test]
fn offsets_translate_polar_points() {
    let evaluator = FakeEvaluator::new();
    let mut diagnostics = SamplingDiagnostics::default();
    let viewport = viewport().with_offset(10.0, 20.0);

    let points = sample_polar(&evaluator, "1", None, &viewport.mapper(), &mut diagnostics)
        .expect("samples");

    assert!(approx_eq(points.points()[0].x, 130.0, 1e-9));
    assert!(approx_eq(points.points()[0].y, 120.0, 1e-9));
}

#[test]
fn bad_theta_bound_is_reported() {
    let evaluator = FakeEvaluator::new().with("theta", |v| v[0]);
    let interval = BoundSpec::new("start", "1");
    let mut diagnostics = SamplingDiagnostics::default();

    let error = sample_polar(
        &evaluator,
        "theta",
        Some(&interval),
        &viewport().mapper(),
        &mut diagnostics,
    )
    .unwrap_err();

    assert!(matches!(
        error,
        PlotError::Interval {
            variable: "theta",
            bound: "start",
            ..
        }
    ));
}
