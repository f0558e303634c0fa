//! Error types for expression compilation and evaluation.

use thiserror::Error;

/// Rejection of an expression text against a signature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// The grammar rejected the input.
    #[error("{0}")]
    Parse(String),

    /// Free identifier that is neither a signature name nor a constant.
    #[error("unknown identifier: '{0}'")]
    UnknownIdentifier(String),

    /// Call to a name outside the builtin function set.
    #[error("unknown function: '{0}'")]
    UnknownFunction(String),

    /// The signature contains a repeated name; the positional slot
    /// mapping would be ambiguous.
    #[error("duplicate name in signature: '{0}'")]
    DuplicateParameter(String),
}

/// Runtime failure while evaluating a compiled expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("arity mismatch: expected {expected} values, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("type error in {operation}: expected {expected}, got {got}")]
    TypeError {
        operation: String,
        expected: String,
        got: String,
    },
}
