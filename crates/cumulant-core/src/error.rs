//! Error types for function construction and the registry.

use cumulant_expr::CompileError;
use thiserror::Error;

/// Structural rejection of a function definition, raised before any
/// expression text reaches the compiler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("function requires at least one parameter")]
    EmptyParameters,

    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("duplicate name in signature: '{0}'")]
    DuplicateName(String),

    #[error(
        "mismatched definition lengths: {variables} variables, {initials} initials, {steps} steps"
    )]
    LengthMismatch {
        variables: usize,
        initials: usize,
        steps: usize,
    },
}

/// Construction failure of a pure or fold function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// `put` against a name that is already active or user-defined.
/// Recoverable; the caller decides whether to ignore, rename, or abort.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("function '{name}' already assigned in profile '{profile}'")]
pub struct OverwriteError {
    pub profile: String,
    pub name: String,
}
