//! Constants and helper functions available to every expression.

use meval::Context;

/// The golden ratio, bound as `phi`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// The Euler–Mascheroni constant, bound as `gamma`.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Builds the symbol table shared by all compiled expressions of one call.
///
/// On top of meval's builtins (`e`, `pi`, `sqrt`, `exp`, `ln`, `abs`, the trigonometric and
/// hyperbolic families, `floor`, `ceil`, `round`, `signum`, `atan2`, `min`, `max`) this adds
/// `phi`, `gamma` and the helpers users expect from a graphing calculator.
#[must_use]
pub fn build_context() -> Context<'static> {
    let mut context = Context::new();
    context.var("phi", GOLDEN_RATIO);
    context.var("gamma", EULER_GAMMA);
    context.func("log", f64::ln);
    context.func("log10", f64::log10);
    context.func("log2", f64::log2);
    context.func("cbrt", f64::cbrt);
    context.func("sec", |value| 1.0 / value.cos());
    context.func("csc", |value| 1.0 / value.sin());
    context.func("cot", |value| 1.0 / value.tan());
    context.func("sign", f64::signum);
    context.func("sgn", f64::signum);
    context.func("frac", f64::fract);
    context.func("deg", f64::to_degrees);
    context.func("rad", f64::to_radians);
    context.func2("mod", modulo);
    context.func2("hypot", f64::hypot);
    context.func3("clamp", clamp);
    context.func3("lerp", lerp);
    context.funcn("if", conditional, 2..4);
    context
}

fn modulo(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return f64::NAN;
    }
    let remainder = dividend % divisor;
    if remainder == 0.0 {
        0.0
    } else if (remainder > 0.0) == (divisor > 0.0) {
        remainder
    } else {
        remainder + divisor
    }
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let lower = min.min(max);
    let upper = min.max(max);
    if value <= lower {
        lower
    } else if value >= upper {
        upper
    } else {
        value
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn conditional(values: &[f64]) -> f64 {
    let truthy = values[0] != 0.0;
    match (truthy, values.get(2)) {
        (true, _) => values[1],
        (false, Some(falsy)) => *falsy,
        // Missing else-branch leaves a gap in the curve.
        (false, None) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_follows_divisor_sign() {
        assert_eq!(modulo(7.0, 3.0), 1.0);
        assert_eq!(modulo(-7.0, 3.0), 2.0);
        assert_eq!(modulo(7.0, -3.0), -2.0);
        assert!(modulo(1.0, 0.0).is_nan());
    }

    #[test]
    fn clamp_accepts_swapped_bounds() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 5.0);
        assert_eq!(clamp(-1.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn conditional_without_else_is_a_gap() {
        assert_eq!(conditional(&[1.0, 4.0]), 4.0);
        assert!(conditional(&[0.0, 4.0]).is_nan());
        assert_eq!(conditional(&[0.0, 4.0, 2.0]), 2.0);
    }

    #[test]
    fn lerp_interpolates_linearly() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
