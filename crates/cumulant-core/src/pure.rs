//! Stateless named functions over fixed parameters.

use crate::compare::Comparison;
use crate::definition::validate_signature;
use crate::error::FunctionError;
use cumulant_expr::{compile, CompiledExpr, EvalError, Value};

/// A named expression over ordered parameters, with no retained state
/// between calls. Immutable after construction.
#[derive(Debug, Clone)]
pub struct PureFunction {
    name: String,
    parameters: Vec<String>,
    body: CompiledExpr,
}

impl PureFunction {
    pub fn new(name: &str, parameters: &[&str], expr: &str) -> Result<Self, FunctionError> {
        let parameters = validate_signature(name, parameters)?;
        let body = compile(expr, &parameters)?;
        Ok(PureFunction {
            name: name.to_string(),
            parameters,
            body,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Evaluate the body against positional `values`, one per parameter.
    pub fn apply(&self, values: &[Value]) -> Result<Value, EvalError> {
        self.body.evaluate(values)
    }

    /// Canonical text: `name(p1, p2, ...) = expr`.
    pub fn render(&self) -> String {
        format!(
            "{}({}) = {}",
            self.name,
            self.parameters.join(", "),
            self.body
        )
    }

    /// Lexicographic order: name, parameter count, parameter names,
    /// rendered body text.
    pub fn compare(&self, other: &PureFunction) -> Comparison {
        self.name
            .cmp(&other.name)
            .then_with(|| self.parameters.len().cmp(&other.parameters.len()))
            .then_with(|| self.parameters.cmp(&other.parameters))
            .then_with(|| self.body.render().cmp(&other.body.render()))
            .into()
    }
}
