use crate::ast::AstNode;
use crate::parser::AstParser;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct ExprParser;

/// Parse a single expression into an AST.
///
/// The whole input must be one expression; trailing input is a parse error.
pub fn parse(source: &str) -> Result<AstNode, String> {
    let mut pairs =
        ExprParser::parse(Rule::input, source).map_err(|e| format!("Parse error: {}", e))?;

    let input = pairs.next().ok_or("Empty parse result")?;
    let expr = input
        .into_inner()
        .find(|p| p.as_rule() == Rule::expr)
        .ok_or("Missing expression in input")?;

    let mut parser = AstParser::new();
    parser.build_ast_from_expr(expr)
}
