//! Stateful aggregate functions folded over a sequence of inputs.

use crate::compare::Comparison;
use crate::definition::{validate_identifier, validate_signature};
use crate::error::{FunctionError, ValidationError};
use crate::state::StateValue;
use cumulant_expr::{compile, CompiledExpr, EvalError, Value};
use std::cmp::Ordering;

/// A named aggregate: state variables with initial values, one update
/// expression per variable, and a result expression over the state.
///
/// Usage is `initialize()`, then `apply(values)` once per input, then
/// `compute()`. An instance owns its state exclusively; concurrent
/// traversals must each hold their own clone.
#[derive(Debug, Clone)]
pub struct FoldFunction {
    name: String,
    parameters: Vec<String>,
    variables: Vec<String>,
    initials: Vec<StateValue>,
    steps: Vec<CompiledExpr>,
    result: CompiledExpr,
    state: Vec<StateValue>,
}

impl FoldFunction {
    /// Each step expression is compiled over `variables ++ parameters` in
    /// that fixed order. The result expression uses the same signature so
    /// the compiler sees one arity, but it is meant to reference variables
    /// only; its parameter slots are bound to zero at `compute` time.
    pub fn new(
        name: &str,
        parameters: &[&str],
        variables: &[&str],
        initials: &[StateValue],
        steps: &[&str],
        result: &str,
    ) -> Result<Self, FunctionError> {
        let parameters = validate_signature(name, parameters)?;

        if variables.len() != initials.len() || variables.len() != steps.len() {
            return Err(ValidationError::LengthMismatch {
                variables: variables.len(),
                initials: initials.len(),
                steps: steps.len(),
            }
            .into());
        }

        let mut signature: Vec<String> = Vec::with_capacity(variables.len() + parameters.len());
        for variable in variables {
            validate_identifier(variable)?;
            if signature.iter().any(|v| v == variable) {
                return Err(ValidationError::DuplicateName(variable.to_string()).into());
            }
            signature.push(variable.to_string());
        }
        let variables = signature.clone();
        for parameter in &parameters {
            if signature.iter().any(|n| n == parameter) {
                return Err(ValidationError::DuplicateName(parameter.clone()).into());
            }
            signature.push(parameter.clone());
        }

        let steps = steps
            .iter()
            .map(|step| compile(step, &signature))
            .collect::<Result<Vec<_>, _>>()?;
        let result = compile(result, &signature)?;

        let initials = initials.to_vec();
        let state = initials.clone();
        Ok(FoldFunction {
            name: name.to_string(),
            parameters,
            variables,
            initials,
            steps,
            result,
            state,
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

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Current state, in variable order.
    pub fn state(&self) -> &[StateValue] {
        &self.state
    }

    /// Reset the state to a fresh copy of the initials.
    pub fn initialize(&mut self) {
        self.state = self.initials.clone();
    }

    /// Fold one input into the state.
    ///
    /// Every step expression is evaluated against the same pre-call
    /// snapshot of the state, and the new state replaces the old one as
    /// a single unit afterwards. A step must never observe another
    /// variable already updated in the same call. If any step fails, the
    /// state is left untouched.
    pub fn apply(&mut self, values: &[Value]) -> Result<(), EvalError> {
        if values.len() != self.parameters.len() {
            return Err(EvalError::ArityMismatch {
                expected: self.parameters.len(),
                got: values.len(),
            });
        }

        let mut args: Vec<Value> = Vec::with_capacity(self.state.len() + values.len());
        args.extend(self.state.iter().map(|slot| slot.to_value()));
        args.extend_from_slice(values);

        let mut next: Vec<StateValue> = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            next.push(StateValue::Finite(step.evaluate(&args)?));
        }
        self.state = next;
        Ok(())
    }

    /// Evaluate the result expression against the current state. Does not
    /// mutate the state; calling it twice without an `apply` in between
    /// yields the same value.
    pub fn compute(&self) -> Result<Value, EvalError> {
        let mut args: Vec<Value> = Vec::with_capacity(self.state.len() + self.parameters.len());
        args.extend(self.state.iter().map(|slot| slot.to_value()));
        // Arity convention: the result was compiled with parameter slots
        // it must not reference; bind them to a neutral zero.
        args.extend(std::iter::repeat(Value::Number(0.0)).take(self.parameters.len()));
        self.result.evaluate(&args)
    }

    /// Canonical text:
    /// `name(p1, ...) = result : { v1(0)=init1, v1(+1)=step1, ... }`,
    /// with sentinel initials rendered as `inf` / `-inf`.
    pub fn render(&self) -> String {
        let mut clauses = String::new();
        for (i, variable) in self.variables.iter().enumerate() {
            if i > 0 {
                clauses.push_str(", ");
            }
            clauses.push_str(&format!(
                "{}(0)={}, {}(+1)={}",
                variable, self.initials[i], variable, self.steps[i]
            ));
        }
        format!(
            "{}({}) = {} : {{ {} }}",
            self.name,
            self.parameters.join(", "),
            self.result,
            clauses
        )
    }

    /// Lexicographic order: name, parameter count, parameter names,
    /// variable count, variable names, step texts in variable order,
    /// result text.
    pub fn compare(&self, other: &FoldFunction) -> Comparison {
        self.name
            .cmp(&other.name)
            .then_with(|| self.parameters.len().cmp(&other.parameters.len()))
            .then_with(|| self.parameters.cmp(&other.parameters))
            .then_with(|| self.variables.len().cmp(&other.variables.len()))
            .then_with(|| self.variables.cmp(&other.variables))
            .then_with(|| {
                for (a, b) in self.steps.iter().zip(&other.steps) {
                    let ord = a.render().cmp(&b.render());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            })
            .then_with(|| self.result.render().cmp(&other.result.render()))
            .into()
    }
}
