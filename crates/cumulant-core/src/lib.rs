//! Expression-defined pure and fold functions.
//!
//! A *pure* function is a named formula over fixed parameters; a *fold*
//! function is a named aggregate folded over a sequence of inputs
//! (count, sum, average, extrema, inner product, ...). Both are defined
//! from small expression texts compiled by `cumulant-expr`, and both are
//! catalogued per profile in a [`FunctionRegistry`] with a once-only
//! overwrite/activation lifecycle.
//!
//! The fold protocol is `initialize()` once, `apply(values)` per input,
//! `compute()` for the aggregate. Updates are *simultaneous*: every step
//! expression of one `apply` call sees the same pre-call state snapshot,
//! and the new state is committed as one unit.
//!
//! # Modules
//!
//! - `pure`: stateless functions
//! - `fold`: stateful aggregates
//! - `registry`: per-profile catalog with the predefined seed functions
//! - `definition`: the common `FunctionDefinition` face
//! - `compare`: the four-valued ordering contract
//! - `state`: fold state slots and the infinity sentinels
//! - `error`: construction and registry errors
//!
//! Everything here is single-threaded and synchronous; callers confine
//! each profile's registry to one execution context.

pub mod compare;
pub mod definition;
pub mod error;
pub mod fold;
pub mod pure;
pub mod registry;
pub mod state;

// Re-export main types
pub use compare::Comparison;
pub use definition::FunctionDefinition;
pub use error::{FunctionError, OverwriteError, ValidationError};
pub use fold::FoldFunction;
pub use pure::PureFunction;
pub use registry::{FunctionRegistry, LifecycleState};
pub use state::StateValue;

// Expression collaborator types that appear in this crate's API.
pub use cumulant_expr::{CompileError, EvalError, Value};
