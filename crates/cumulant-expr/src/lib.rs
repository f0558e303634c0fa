//! Compiled expressions over scalars, booleans, and 3-vectors.
//!
//! This crate is the expression collaborator behind the function system:
//! it compiles a textual formula against an ordered signature and
//! evaluates it positionally.
//!
//! # Modules
//!
//! - `compiler`: name resolution, lowering, canonical rendering
//! - `eval`: positional evaluation
//! - `value`: runtime value type
//! - `error`: compile and evaluation errors
//!
//! ```
//! use cumulant_expr::{compile, Value};
//!
//! let expr = compile("x * y + 1", &["x", "y"]).unwrap();
//! let result = expr.evaluate(&[Value::Number(2.0), Value::Number(3.0)]).unwrap();
//! assert_eq!(result, Value::Number(7.0));
//! ```

pub mod compiler;
pub mod error;
pub mod eval;
pub mod value;

// Re-export main types
pub use compiler::{compile, CompiledExpr, UnaryFn};
pub use error::{CompileError, EvalError};
pub use value::Value;
