use crate::{
    ast::Stmt,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses the body of a block after its opening brace.
    ///
    /// Declarations are collected until a closing `}` or the end of input. A
    /// missing `}` is reported; the statements read so far are still returned.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration_with_progress());
        }

        self.consume(TokenKind::RightBrace, "Expected '}' after block.");
        statements
    }
}
