//! Parser for the cumulant expression grammar.
//!
//! Expressions are small arithmetic/boolean formulas over scalars and
//! 3-vectors: numeric literals, identifiers, `pi`/`true`/`false`, unary
//! sign, `^`, `xprod`, `* / mod`, `+ -`, the comparisons
//! `>= <= > < = <>`, `and`/`xor`/`or`, `if … then … else`, vector
//! literals `(x, y, z)` and unary builtin calls such as `mag(p - q)`.
//!
//! Parsing produces an [`ast::AstNode`]; name resolution and evaluation
//! live downstream in `cumulant-expr`.

pub mod ast;
pub mod parser;
pub mod pest_parser;

// Re-export commonly used items
pub use ast::{AstNode, BinaryOp};
pub use pest_parser::parse;
