use std::collections::HashMap;
use std::rc::Rc;

use crate::expr::{CompiledExpression, Evaluator, ExpressionError};

mod test_implicit_basic;
mod test_polar_basic;

type Function = Rc<dyn Fn(&[f64]) -> Result<f64, ExpressionError>>;

/// Evaluator backed by closures registered under their source text.
#[derive(Default)]
pub(super) struct FakeEvaluator {
    functions: HashMap<String, Function>,
}

impl FakeEvaluator {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn with(mut self, source: &str, function: impl Fn(&[f64]) -> f64 + 'static) -> Self {
        let function: Function =
            Rc::new(move |values: &[f64]| Ok::<f64, ExpressionError>(function(values)));
        self.functions.insert(source.to_owned(), function);
        self
    }

    pub(super) fn with_fallible(
        mut self,
        source: &str,
        function: impl Fn(&[f64]) -> Result<f64, ExpressionError> + 'static,
    ) -> Self {
        self.functions.insert(source.to_owned(), Rc::new(function));
        self
    }

    pub(super) fn with_constant(self, source: &str, value: f64) -> Self {
        self.with(source, move |_| value)
    }
}

pub(super) struct FakeExpression {
    variables: Vec<String>,
    function: Function,
}

impl CompiledExpression for FakeExpression {
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
        (self.function)(values)
    }
}

impl Evaluator for FakeEvaluator {
    type Compiled = FakeExpression;

    fn compile(&self, source: &str, variables: &[&str]) -> Result<FakeExpression, ExpressionError> {
        let source = source.trim();
        let function: Function = match self.functions.get(source) {
            Some(function) => Rc::clone(function),
            None => {
                let value: f64 = source
                    .parse()
                    .map_err(|_| ExpressionError::compile(source, "not registered"))?;
                Rc::new(move |_: &[f64]| Ok::<f64, ExpressionError>(value))
            }
        };
        Ok(FakeExpression {
            variables: variables.iter().map(|name| (*name).to_owned()).collect(),
            function,
        })
    }
}

pub(super) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
