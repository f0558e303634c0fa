use crate::ast::{AstNode, BinaryOp};
use crate::pest_parser::Rule;
use pest::iterators::Pair;

/// Builds `AstNode` trees out of pest parse pairs.
pub struct AstParser;

impl AstParser {
    pub fn new() -> Self {
        AstParser
    }

    pub fn build_ast_from_expr(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        let inner = pair.into_inner().next().ok_or("Empty expression")?;
        match inner.as_rule() {
            Rule::if_expr => self.build_if_expr(inner),
            Rule::or_expr => self.build_binary_chain(inner),
            other => Err(format!("Unexpected expression rule: {:?}", other)),
        }
    }

    fn build_if_expr(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        // Grammar: kw_if ~ expr ~ kw_then ~ expr ~ kw_else ~ expr
        let mut exprs = pair.into_inner().filter(|p| p.as_rule() == Rule::expr);

        let condition = self.build_ast_from_expr(exprs.next().ok_or("Missing if condition")?)?;
        let then_branch = self.build_ast_from_expr(exprs.next().ok_or("Missing then branch")?)?;
        let else_branch = self.build_ast_from_expr(exprs.next().ok_or("Missing else branch")?)?;

        Ok(AstNode::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// Fold a `operand (op operand)*` precedence layer left-to-right.
    fn build_binary_chain(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        let mut inner = pair.into_inner();
        let first = inner.next().ok_or("Empty operator chain")?;
        let mut node = self.build_operand(first)?;

        while let Some(op_pair) = inner.next() {
            let op = binary_op_from(&op_pair)?;
            let rhs_pair = inner.next().ok_or("Operator without right operand")?;
            let rhs = self.build_operand(rhs_pair)?;
            node = AstNode::Binary {
                op,
                left: Box::new(node),
                right: Box::new(rhs),
            };
        }

        Ok(node)
    }

    fn build_operand(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        match pair.as_rule() {
            Rule::expr => self.build_ast_from_expr(pair),
            Rule::or_expr
            | Rule::xor_expr
            | Rule::and_expr
            | Rule::cmp_expr
            | Rule::add_expr
            | Rule::mul_expr
            | Rule::cross_expr => self.build_binary_chain(pair),
            Rule::unary_expr => self.build_unary_expr(pair),
            Rule::pow_expr => self.build_pow_expr(pair),
            Rule::primary => self.build_primary(pair),
            other => Err(format!("Unexpected operand rule: {:?}", other)),
        }
    }

    fn build_unary_expr(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        // Grammar: unary_op* ~ cross_expr; the operand is always last.
        let pairs: Vec<Pair<Rule>> = pair.into_inner().collect();
        let (operand, signs) = pairs.split_last().ok_or("Empty unary expression")?;

        let mut node = self.build_operand(operand.clone())?;
        for sign in signs.iter().rev() {
            if sign.as_str() == "-" {
                node = AstNode::Neg(Box::new(node));
            }
            // Unary plus is the identity.
        }
        Ok(node)
    }

    fn build_pow_expr(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        let mut inner = pair.into_inner();
        let base = self.build_operand(inner.next().ok_or("Empty power expression")?)?;

        match inner.next() {
            Some(exponent) => Ok(AstNode::Binary {
                op: BinaryOp::Pow,
                left: Box::new(base),
                right: Box::new(self.build_operand(exponent)?),
            }),
            None => Ok(base),
        }
    }

    fn build_primary(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        let inner = pair.into_inner().next().ok_or("Empty primary expression")?;
        match inner.as_rule() {
            Rule::boolean => Ok(AstNode::Boolean(inner.as_str() == "true")),
            Rule::pi_const => Ok(AstNode::Pi),
            Rule::number => inner
                .as_str()
                .parse::<f64>()
                .map(AstNode::Number)
                .map_err(|e| format!("Failed to parse number: {}", e)),
            Rule::identifier => Ok(AstNode::Identifier(inner.as_str().to_string())),
            Rule::call => self.build_call(inner),
            Rule::vector => self.build_vector(inner),
            Rule::paren => {
                let expr = inner.into_inner().next().ok_or("Empty parentheses")?;
                self.build_ast_from_expr(expr)
            }
            other => Err(format!("Unexpected primary rule: {:?}", other)),
        }
    }

    fn build_call(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        let mut inner = pair.into_inner();
        let function = inner
            .next()
            .ok_or("Missing function name in call")?
            .as_str()
            .to_string();
        let argument = self.build_ast_from_expr(inner.next().ok_or("Missing call argument")?)?;

        Ok(AstNode::Call {
            function,
            argument: Box::new(argument),
        })
    }

    fn build_vector(&mut self, pair: Pair<Rule>) -> Result<AstNode, String> {
        let mut inner = pair.into_inner();
        let x = self.build_ast_from_expr(inner.next().ok_or("Missing vector component")?)?;
        let y = self.build_ast_from_expr(inner.next().ok_or("Missing vector component")?)?;
        let z = self.build_ast_from_expr(inner.next().ok_or("Missing vector component")?)?;

        Ok(AstNode::Vector(Box::new([x, y, z])))
    }
}

impl Default for AstParser {
    fn default() -> Self {
        Self::new()
    }
}

fn binary_op_from(pair: &Pair<Rule>) -> Result<BinaryOp, String> {
    match pair.as_str() {
        "^" => Ok(BinaryOp::Pow),
        "xprod" => Ok(BinaryOp::Cross),
        "*" => Ok(BinaryOp::Mul),
        "/" => Ok(BinaryOp::Div),
        "mod" => Ok(BinaryOp::Mod),
        "+" => Ok(BinaryOp::Add),
        "-" => Ok(BinaryOp::Sub),
        ">=" => Ok(BinaryOp::Ge),
        "<=" => Ok(BinaryOp::Le),
        ">" => Ok(BinaryOp::Gt),
        "<" => Ok(BinaryOp::Lt),
        "=" => Ok(BinaryOp::Eq),
        "<>" => Ok(BinaryOp::Ne),
        "and" => Ok(BinaryOp::And),
        "xor" => Ok(BinaryOp::Xor),
        "or" => Ok(BinaryOp::Or),
        other => Err(format!("Unexpected operator: {}", other)),
    }
}
