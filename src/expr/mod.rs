//! Expression compilation and evaluation behind a swappable backend.
//!
//! Samplers only talk to [`Evaluator`] and [`CompiledExpression`]. The production
//! backend is [`MevalEvaluator`]; tests substitute closures.

mod context;
mod meval_backend;
mod normalize;

pub use context::{EULER_GAMMA, GOLDEN_RATIO, build_context};
pub use meval_backend::{MevalEvaluator, MevalExpression};
pub use normalize::normalize_source;

/// Errors raised while compiling or evaluating an expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,
    #[error("cannot compile `{expression}`: {reason}")]
    Compile { expression: String, reason: String },
    #[error("evaluation failed: {0}")]
    Evaluate(String),
    #[error("expression evaluated to non-finite value {0}")]
    NonFinite(f64),
    #[error("expected {expected} variable values, got {got}")]
    Arity { expected: usize, got: usize },
}

impl ExpressionError {
    pub(crate) fn compile(expression: &str, reason: impl ToString) -> Self {
        Self::Compile {
            expression: expression.trim().to_owned(),
            reason: reason.to_string(),
        }
    }
}

/// An expression compiled once and evaluated many times.
pub trait CompiledExpression {
    /// Names of the free variables, in the order `evaluate` expects their values.
    fn variables(&self) -> &[String];

    /// Evaluates with `values[i]` bound to `variables()[i]`.
    fn evaluate(&self, values: &[f64]) -> Result<f64, ExpressionError>;
}

/// Compiles expression text against a fixed set of free variables.
pub trait Evaluator {
    type Compiled: CompiledExpression;

    /// Parses and validates `source`. Unknown identifiers are rejected here, not per sample.
    fn compile(&self, source: &str, variables: &[&str]) -> Result<Self::Compiled, ExpressionError>;

    /// Evaluates a closed expression such as an interval bound.
    fn evaluate_constant(&self, source: &str) -> Result<f64, ExpressionError> {
        let value = self.compile(source, &[])?.evaluate(&[])?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExpressionError::NonFinite(value))
        }
    }
}
