use log::debug;

use crate::{ast::Stmt, error::ParseError, interpreter::lexer::Token};

/// Parser state and shared token-handling helpers.
///
/// Holds the cursor over the token list, the collected errors, and the
/// `consume`/`matches` primitives every grammar rule is written in terms of.
pub mod core;

/// Prefix operators and primary expressions.
///
/// Handles `!` and `-` and the atoms of the grammar: literals, variable
/// references and parenthesized expressions.
pub mod unary;

/// Binary operator tiers and assignment.
///
/// One method per precedence level, from assignment down to exponentiation.
pub mod binary;

/// Block parsing.
///
/// Parses the declarations between `{` and `}`.
pub mod block;

/// Declarations and statements.
///
/// Parses `var` declarations and the `print`, `while`, block and expression
/// statements.
pub mod statement;

/// Parses a whole program.
///
/// `tokens` must end with an `Eof` token, as produced by
/// [`scan`](crate::interpreter::lexer::scan). Parsing never stops early: every
/// error is recorded and parsing resumes at the same position, so the
/// returned statements may contain placeholder nodes when errors are present.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::scan, parser::parse};
///
/// let (tokens, _) = scan("var x = 1; print x;");
/// let (statements, errors) = parse(&tokens);
///
/// assert!(errors.is_empty());
/// assert_eq!(statements.len(), 2);
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> (Vec<Stmt>, Vec<ParseError>) {
    let (statements, errors) = core::Parser::new(tokens).parse();
    debug!("parsed {} statements with {} errors",
           statements.len(),
           errors.len());
    (statements, errors)
}
