//! Abstract syntax tree for the expression grammar.

/// Binary operators, from tightest (`Pow`) to loosest (`Or`) binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Pow,
    Cross,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Ge,
    Le,
    Gt,
    Lt,
    Eq,
    Ne,
    And,
    Xor,
    Or,
}

impl BinaryOp {
    /// Surface syntax for the operator, as used by the canonical renderer.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Pow => "^",
            BinaryOp::Cross => "xprod",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "mod",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Ge => ">=",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
            BinaryOp::And => "and",
            BinaryOp::Xor => "xor",
            BinaryOp::Or => "or",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Number(f64),
    Boolean(bool),
    /// The constant `pi`. Kept symbolic so rendering prints `pi`, not a decimal.
    Pi,
    Identifier(String),
    /// 3-vector literal `(x, y, z)`.
    Vector(Box<[AstNode; 3]>),
    /// Unary minus. Unary plus is the identity and is dropped at parse time.
    Neg(Box<AstNode>),
    Binary {
        op: BinaryOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    /// Builtin unary function application, e.g. `mag(p - q)`. Name resolution
    /// against the builtin set happens at compile time, not parse time.
    Call {
        function: String,
        argument: Box<AstNode>,
    },
    If {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Box<AstNode>,
    },
}
