//! Name resolution and lowering of parsed expressions.
//!
//! `compile` turns an expression text plus an ordered signature into a
//! [`CompiledExpr`]: every free identifier is resolved to a positional
//! slot, every call to a member of the builtin set. Evaluation then works
//! purely positionally (see `eval`), and `Display` produces the canonical
//! rendering that function comparison and `render()` are defined over.

use crate::error::CompileError;
use cumulant_parser::ast::{AstNode, BinaryOp};
use cumulant_parser::parse;
use std::fmt;

/// Builtin unary functions of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Ln,
    Log,
    Exp,
    Sqrt,
    Sqr,
    Cos,
    Sin,
    Tan,
    Acos,
    Asin,
    Atan,
    Cosh,
    Sinh,
    Tanh,
    Int,
    Abs,
    Opp,
    Not,
    Mag,
}

impl UnaryFn {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ln" => Some(UnaryFn::Ln),
            "log" => Some(UnaryFn::Log),
            "exp" => Some(UnaryFn::Exp),
            "sqrt" => Some(UnaryFn::Sqrt),
            "sqr" => Some(UnaryFn::Sqr),
            "cos" => Some(UnaryFn::Cos),
            "sin" => Some(UnaryFn::Sin),
            "tan" => Some(UnaryFn::Tan),
            "acos" => Some(UnaryFn::Acos),
            "asin" => Some(UnaryFn::Asin),
            "atan" => Some(UnaryFn::Atan),
            "cosh" => Some(UnaryFn::Cosh),
            "sinh" => Some(UnaryFn::Sinh),
            "tanh" => Some(UnaryFn::Tanh),
            "int" => Some(UnaryFn::Int),
            "abs" => Some(UnaryFn::Abs),
            "opp" => Some(UnaryFn::Opp),
            "not" => Some(UnaryFn::Not),
            "mag" => Some(UnaryFn::Mag),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Ln => "ln",
            UnaryFn::Log => "log",
            UnaryFn::Exp => "exp",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Sqr => "sqr",
            UnaryFn::Cos => "cos",
            UnaryFn::Sin => "sin",
            UnaryFn::Tan => "tan",
            UnaryFn::Acos => "acos",
            UnaryFn::Asin => "asin",
            UnaryFn::Atan => "atan",
            UnaryFn::Cosh => "cosh",
            UnaryFn::Sinh => "sinh",
            UnaryFn::Tanh => "tanh",
            UnaryFn::Int => "int",
            UnaryFn::Abs => "abs",
            UnaryFn::Opp => "opp",
            UnaryFn::Not => "not",
            UnaryFn::Mag => "mag",
        }
    }
}

/// Resolved expression node. Identifiers are gone; slots index into the
/// positional value sequence passed to `evaluate`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Boolean(bool),
    Pi,
    Slot(usize),
    Vector(Box<[Node; 3]>),
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Func {
        function: UnaryFn,
        argument: Box<Node>,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Box<Node>,
    },
}

/// An expression compiled against an ordered signature.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    params: Vec<String>,
    root: Node,
}

/// Compile `text` against the ordered signature `params`.
pub fn compile<S: AsRef<str>>(text: &str, params: &[S]) -> Result<CompiledExpr, CompileError> {
    let params: Vec<String> = params.iter().map(|s| s.as_ref().to_string()).collect();
    for (i, name) in params.iter().enumerate() {
        if params[..i].contains(name) {
            return Err(CompileError::DuplicateParameter(name.clone()));
        }
    }

    let ast = parse(text).map_err(CompileError::Parse)?;
    let root = lower(&ast, &params)?;
    Ok(CompiledExpr { params, root })
}

fn lower(ast: &AstNode, params: &[String]) -> Result<Node, CompileError> {
    match ast {
        AstNode::Number(n) => Ok(Node::Number(*n)),
        AstNode::Boolean(b) => Ok(Node::Boolean(*b)),
        AstNode::Pi => Ok(Node::Pi),
        AstNode::Identifier(name) => params
            .iter()
            .position(|p| p == name)
            .map(Node::Slot)
            .ok_or_else(|| CompileError::UnknownIdentifier(name.clone())),
        AstNode::Vector(parts) => Ok(Node::Vector(Box::new([
            lower(&parts[0], params)?,
            lower(&parts[1], params)?,
            lower(&parts[2], params)?,
        ]))),
        AstNode::Neg(inner) => Ok(Node::Neg(Box::new(lower(inner, params)?))),
        AstNode::Binary { op, left, right } => Ok(Node::Binary {
            op: *op,
            left: Box::new(lower(left, params)?),
            right: Box::new(lower(right, params)?),
        }),
        AstNode::Call { function, argument } => {
            let function = UnaryFn::from_name(function)
                .ok_or_else(|| CompileError::UnknownFunction(function.clone()))?;
            Ok(Node::Func {
                function,
                argument: Box::new(lower(argument, params)?),
            })
        }
        AstNode::If {
            condition,
            then_branch,
            else_branch,
        } => Ok(Node::If {
            condition: Box::new(lower(condition, params)?),
            then_branch: Box::new(lower(then_branch, params)?),
            else_branch: Box::new(lower(else_branch, params)?),
        }),
    }
}

impl CompiledExpr {
    /// Number of positional values `evaluate` expects.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The signature the expression was compiled against, in slot order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Canonical text of the expression, independent of input formatting.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}

// Rendering precedence levels. Atoms sit above every operator; `if` sits
// below, so a conditional is parenthesized inside any operator context.
const PREC_IF: u8 = 0;
const PREC_NEG: u8 = 7;
const PREC_ATOM: u8 = 10;

fn precedence(node: &Node) -> u8 {
    match node {
        Node::If { .. } => PREC_IF,
        Node::Binary { op, .. } => match op {
            BinaryOp::Or => 1,
            BinaryOp::Xor => 2,
            BinaryOp::And => 3,
            BinaryOp::Ge
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Lt
            | BinaryOp::Eq
            | BinaryOp::Ne => 4,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 6,
            BinaryOp::Cross => 8,
            BinaryOp::Pow => 9,
        },
        Node::Neg(_) => PREC_NEG,
        _ => PREC_ATOM,
    }
}

fn write_node(node: &Node, params: &[String], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match node {
        Node::Number(n) => write!(f, "{}", n),
        Node::Boolean(b) => write!(f, "{}", b),
        Node::Pi => write!(f, "pi"),
        Node::Slot(i) => write!(f, "{}", params[*i]),
        Node::Vector(parts) => {
            write!(f, "(")?;
            write_node(&parts[0], params, f)?;
            write!(f, ", ")?;
            write_node(&parts[1], params, f)?;
            write!(f, ", ")?;
            write_node(&parts[2], params, f)?;
            write!(f, ")")
        }
        Node::Neg(inner) => {
            write!(f, "-")?;
            write_child(inner, params, f, PREC_NEG)
        }
        Node::Binary { op, left, right } => {
            let prec = precedence(node);
            // The loose side of an associative chain needs parentheses:
            // the right child for left-associative operators, the left
            // child for the right-associative `^`.
            let (left_min, right_min) = if *op == BinaryOp::Pow {
                (prec + 1, prec)
            } else {
                (prec, prec + 1)
            };
            write_child(left, params, f, left_min)?;
            write!(f, " {} ", op.symbol())?;
            write_child(right, params, f, right_min)
        }
        Node::Func { function, argument } => {
            write!(f, "{}(", function.name())?;
            write_node(argument, params, f)?;
            write!(f, ")")
        }
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => {
            write!(f, "if ")?;
            write_node(condition, params, f)?;
            write!(f, " then ")?;
            write_node(then_branch, params, f)?;
            write!(f, " else ")?;
            write_node(else_branch, params, f)
        }
    }
}

fn write_child(
    node: &Node,
    params: &[String],
    f: &mut fmt::Formatter<'_>,
    min_prec: u8,
) -> fmt::Result {
    if precedence(node) < min_prec {
        write!(f, "(")?;
        write_node(node, params, f)?;
        write!(f, ")")
    } else {
        write_node(node, params, f)
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(&self.root, self.params(), f)
    }
}
