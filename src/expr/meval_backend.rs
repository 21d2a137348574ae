//! [`Evaluator`] implementation on top of the `meval` crate.

use std::rc::Rc;

use meval::{Context, ContextProvider, Expr};

use super::context::build_context;
use super::normalize::normalize_source;
use super::{CompiledExpression, Evaluator, ExpressionError};

/// Compiles expressions with meval against the shared constant/function table.
///
/// The table is reference-counted rather than shared across threads; create one
/// evaluator per plotting call.
#[derive(Clone)]
pub struct MevalEvaluator {
    context: Rc<Context<'static>>,
}

impl MevalEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            context: Rc::new(build_context()),
        }
    }
}

impl Default for MevalEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for MevalEvaluator {
    type Compiled = MevalExpression;

    fn compile(&self, source: &str, variables: &[&str]) -> Result<MevalExpression, ExpressionError> {
        let normalized = normalize_source(source);
        if normalized.is_empty() {
            return Err(ExpressionError::Empty);
        }

        let expr: Expr = normalized
            .parse()
            .map_err(|error| ExpressionError::compile(source, error))?;

        let compiled = MevalExpression {
            expr,
            variables: variables.iter().map(|name| (*name).to_owned()).collect(),
            context: Rc::clone(&self.context),
        };

        // meval resolves names lazily; a dry run surfaces unknown variables and
        // functions (or wrong arities) once, before any sampling loop.
        let probe = vec![0.0; compiled.variables.len()];
        compiled
            .eval_raw(&probe)
            .map_err(|error| ExpressionError::compile(source, error))?;

        Ok(compiled)
    }
}

/// A parsed meval expression together with its variable slots.
#[derive(Clone)]
pub struct MevalExpression {
    expr: Expr,
    variables: Vec<String>,
    context: Rc<Context<'static>>,
}

impl MevalExpression {
    fn eval_raw(&self, values: &[f64]) -> Result<f64, meval::Error> {
        let slots = SlotContext {
            names: &self.variables,
            values,
        };
        self.expr.eval_with_context((slots, &*self.context))
    }
}

impl CompiledExpression for MevalExpression {
    fn variables(&self) -> &[String] {
        &self.variables
    }

    fn evaluate(&self, values: &[f64]) -> Result<f64, ExpressionError> {
        if values.len() != self.variables.len() {
            return Err(ExpressionError::Arity {
                expected: self.variables.len(),
                got: values.len(),
            });
        }
        self.eval_raw(values)
            .map_err(|error| ExpressionError::Evaluate(error.to_string()))
    }
}

impl std::fmt::Debug for MevalExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MevalExpression")
            .field("expr", &self.expr)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

/// Binds positional values to variable names; falls through to the shared table.
struct SlotContext<'a> {
    names: &'a [String],
    values: &'a [f64],
}

impl ContextProvider for SlotContext<'_> {
    fn get_var(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .and_then(|index| self.values.get(index))
            .copied()
    }
}
