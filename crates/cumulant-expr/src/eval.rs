//! Positional evaluation of compiled expressions.

use crate::compiler::{CompiledExpr, Node, UnaryFn};
use crate::error::EvalError;
use crate::value::Value;
use cumulant_parser::ast::BinaryOp;
use std::f64::consts::PI;

impl CompiledExpr {
    /// Evaluate against positional `values`, one per signature slot.
    pub fn evaluate(&self, values: &[Value]) -> Result<Value, EvalError> {
        if values.len() != self.arity() {
            return Err(EvalError::ArityMismatch {
                expected: self.arity(),
                got: values.len(),
            });
        }
        eval_node(self.root(), values)
    }
}

fn eval_node(node: &Node, values: &[Value]) -> Result<Value, EvalError> {
    match node {
        Node::Number(n) => Ok(Value::Number(*n)),
        Node::Boolean(b) => Ok(Value::Boolean(*b)),
        Node::Pi => Ok(Value::Number(PI)),
        Node::Slot(i) => Ok(values[*i]),
        Node::Vector(parts) => {
            let x = component(eval_node(&parts[0], values)?)?;
            let y = component(eval_node(&parts[1], values)?)?;
            let z = component(eval_node(&parts[2], values)?)?;
            Ok(Value::Vector([x, y, z]))
        }
        Node::Neg(inner) => match eval_node(inner, values)? {
            Value::Number(n) => Ok(Value::Number(-n)),
            Value::Vector(v) => Ok(Value::Vector([-v[0], -v[1], -v[2]])),
            other => Err(type_error("-", "number or vector", other.type_name())),
        },
        Node::Binary { op, left, right } => {
            let left = eval_node(left, values)?;
            let right = eval_node(right, values)?;
            eval_binary(*op, left, right)
        }
        Node::Func { function, argument } => {
            let argument = eval_node(argument, values)?;
            eval_func(*function, argument)
        }
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => match eval_node(condition, values)? {
            Value::Boolean(true) => eval_node(then_branch, values),
            Value::Boolean(false) => eval_node(else_branch, values),
            other => Err(type_error("if", "boolean condition", other.type_name())),
        },
    }
}

fn component(value: Value) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_error("vector literal", "number components", value.type_name()))
}

fn eval_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    use Value::{Boolean, Number, Vector};

    match (op, left, right) {
        (BinaryOp::Pow, Number(a), Number(b)) => Ok(Number(a.powf(b))),

        (BinaryOp::Cross, Vector(a), Vector(b)) => Ok(Vector(cross(a, b))),

        (BinaryOp::Mul, Number(a), Number(b)) => Ok(Number(a * b)),
        (BinaryOp::Mul, Number(a), Vector(b)) => Ok(Vector(scale(b, a))),
        (BinaryOp::Mul, Vector(a), Number(b)) => Ok(Vector(scale(a, b))),
        // `*` on two vectors is the dot product.
        (BinaryOp::Mul, Vector(a), Vector(b)) => Ok(Number(dot(a, b))),

        (BinaryOp::Div, Number(a), Number(b)) => Ok(Number(a / b)),
        (BinaryOp::Div, Vector(a), Number(b)) => Ok(Vector([a[0] / b, a[1] / b, a[2] / b])),

        // Floored modulo: the result carries the divisor's sign.
        (BinaryOp::Mod, Number(a), Number(b)) => Ok(Number(a - b * (a / b).floor())),

        (BinaryOp::Add, Number(a), Number(b)) => Ok(Number(a + b)),
        (BinaryOp::Add, Vector(a), Vector(b)) => {
            Ok(Vector([a[0] + b[0], a[1] + b[1], a[2] + b[2]]))
        }
        (BinaryOp::Sub, Number(a), Number(b)) => Ok(Number(a - b)),
        (BinaryOp::Sub, Vector(a), Vector(b)) => {
            Ok(Vector([a[0] - b[0], a[1] - b[1], a[2] - b[2]]))
        }

        (BinaryOp::Ge, Number(a), Number(b)) => Ok(Boolean(a >= b)),
        (BinaryOp::Le, Number(a), Number(b)) => Ok(Boolean(a <= b)),
        (BinaryOp::Gt, Number(a), Number(b)) => Ok(Boolean(a > b)),
        (BinaryOp::Lt, Number(a), Number(b)) => Ok(Boolean(a < b)),

        (BinaryOp::Eq, left, right) => values_equal("=", left, right).map(Boolean),
        (BinaryOp::Ne, left, right) => values_equal("<>", left, right).map(|eq| Boolean(!eq)),

        (BinaryOp::And, Boolean(a), Boolean(b)) => Ok(Boolean(a && b)),
        (BinaryOp::Xor, Boolean(a), Boolean(b)) => Ok(Boolean(a ^ b)),
        (BinaryOp::Or, Boolean(a), Boolean(b)) => Ok(Boolean(a || b)),

        (op, left, right) => Err(type_error(
            op.symbol(),
            expected_operands(op),
            &format!("{} and {}", left.type_name(), right.type_name()),
        )),
    }
}

fn values_equal(operation: &str, left: Value, right: Value) -> Result<bool, EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(a == b),
        (Value::Vector(a), Value::Vector(b)) => Ok(a == b),
        (left, right) => Err(type_error(
            operation,
            "two values of the same type",
            &format!("{} and {}", left.type_name(), right.type_name()),
        )),
    }
}

fn expected_operands(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Pow | BinaryOp::Mod => "two numbers",
        BinaryOp::Cross => "two vectors",
        BinaryOp::Mul => "numbers or vectors",
        BinaryOp::Div => "a number or vector dividend and a number divisor",
        BinaryOp::Add | BinaryOp::Sub => "two numbers or two vectors",
        BinaryOp::Ge | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Lt => "two numbers",
        BinaryOp::Eq | BinaryOp::Ne => "two values of the same type",
        BinaryOp::And | BinaryOp::Xor | BinaryOp::Or => "two booleans",
    }
}

fn eval_func(function: UnaryFn, argument: Value) -> Result<Value, EvalError> {
    use Value::{Boolean, Number, Vector};

    match (function, argument) {
        (UnaryFn::Ln, Number(n)) => Ok(Number(n.ln())),
        (UnaryFn::Log, Number(n)) => Ok(Number(n.log10())),
        (UnaryFn::Exp, Number(n)) => Ok(Number(n.exp())),
        (UnaryFn::Sqrt, Number(n)) => Ok(Number(n.sqrt())),
        (UnaryFn::Sqr, Number(n)) => Ok(Number(n * n)),
        (UnaryFn::Sqr, Vector(v)) => Ok(Number(dot(v, v))),
        (UnaryFn::Cos, Number(n)) => Ok(Number(n.cos())),
        (UnaryFn::Sin, Number(n)) => Ok(Number(n.sin())),
        (UnaryFn::Tan, Number(n)) => Ok(Number(n.tan())),
        (UnaryFn::Acos, Number(n)) => Ok(Number(n.acos())),
        (UnaryFn::Asin, Number(n)) => Ok(Number(n.asin())),
        (UnaryFn::Atan, Number(n)) => Ok(Number(n.atan())),
        (UnaryFn::Cosh, Number(n)) => Ok(Number(n.cosh())),
        (UnaryFn::Sinh, Number(n)) => Ok(Number(n.sinh())),
        (UnaryFn::Tanh, Number(n)) => Ok(Number(n.tanh())),
        (UnaryFn::Int, Number(n)) => Ok(Number(n.trunc())),
        (UnaryFn::Abs, Number(n)) => Ok(Number(n.abs())),
        (UnaryFn::Opp, Number(n)) => Ok(Number(-n)),
        (UnaryFn::Opp, Vector(v)) => Ok(Vector([-v[0], -v[1], -v[2]])),
        (UnaryFn::Not, Boolean(b)) => Ok(Boolean(!b)),
        (UnaryFn::Mag, Vector(v)) => Ok(Number(dot(v, v).sqrt())),
        (UnaryFn::Mag, Number(n)) => Ok(Number(n.abs())),

        (function, argument) => Err(type_error(
            function.name(),
            expected_argument(function),
            argument.type_name(),
        )),
    }
}

fn expected_argument(function: UnaryFn) -> &'static str {
    match function {
        UnaryFn::Not => "a boolean",
        UnaryFn::Opp | UnaryFn::Sqr | UnaryFn::Mag => "a number or vector",
        _ => "a number",
    }
}

fn type_error(operation: &str, expected: &str, got: &str) -> EvalError {
    EvalError::TypeError {
        operation: operation.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn scale(v: [f64; 3], s: f64) -> [f64; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}
