use std::fmt;

use itertools::Itertools;

use crate::ast::{Expr, LiteralValue, Stmt};

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

/// Renders an expression as a parenthesized prefix form.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::scan, parser::core::Parser};
///
/// let (tokens, _) = scan("-3 * (47.56)");
/// let expr = Parser::new(&tokens).parse_expression();
///
/// assert_eq!(expr.to_string(), "(* (- 3) (group 47.56))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { name, value } => write!(f, "(assign {} {value})", name.lexeme),
            Self::Binary { left,
                           operator,
                           right, } => write!(f, "({} {left} {right})", operator.lexeme),
            Self::Grouping { inner } => write!(f, "(group {inner})"),
            Self::Literal { value } => write!(f, "{value}"),
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Variable { name } => write!(f, "(var {})", name.lexeme),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block { statements } if statements.is_empty() => write!(f, "(block)"),
            Self::Block { statements } => write!(f, "(block {})", statements.iter().join(" ")),
            Self::Expression { expr } => write!(f, "(expr {expr})"),
            Self::Print { expr } => write!(f, "(print {expr})"),
            Self::VarDecl { name,
                            initializer: Some(init), } => write!(f, "(define {} {init})", name.lexeme),
            Self::VarDecl { name,
                            initializer: None, } => write!(f, "(define {})", name.lexeme),
            Self::While { condition, body } => write!(f, "(while {condition} {body})"),
        }
    }
}
