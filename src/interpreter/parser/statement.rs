use crate::{
    ast::Stmt,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a declaration.
    ///
    /// Grammar:
    /// ```text
    ///     declaration := var_decl | statement
    /// ```
    pub(in crate::interpreter::parser) fn parse_declaration(&mut self) -> Stmt {
        if self.matches(&[TokenKind::Var]) {
            return self.parse_var_declaration();
        }
        self.parse_statement()
    }

    /// Parses a variable declaration after its `var` keyword.
    ///
    /// Grammar: `var_decl := "var" IDENTIFIER ("=" expression)? ";"`
    ///
    /// A missing name still yields a declaration, named by a placeholder token
    /// with an empty lexeme.
    fn parse_var_declaration(&mut self) -> Stmt {
        let name = self.consume(TokenKind::Identifier, "Expected variable name.");

        let initializer = if self.matches(&[TokenKind::Equal]) {
            Some(self.parse_expression())
        } else {
            None
        };

        self.consume(TokenKind::Semicolon,
                     "Expected ';' after variable declaration.");

        Stmt::VarDecl { name, initializer }
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := print_stmt | while_stmt | block | expr_stmt
    /// ```
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Stmt {
        if self.matches(&[TokenKind::Print]) {
            return self.parse_print_statement();
        }
        if self.matches(&[TokenKind::While]) {
            return self.parse_while_statement();
        }
        if self.matches(&[TokenKind::LeftBrace]) {
            if !self.enter_nested() {
                return Stmt::Block { statements: Vec::new() };
            }
            let statements = self.parse_block();
            self.leave_nested();
            return Stmt::Block { statements };
        }
        self.parse_expression_statement()
    }

    /// Grammar: `print_stmt := "print" expression ";"`
    fn parse_print_statement(&mut self) -> Stmt {
        let expr = self.parse_expression();
        self.consume(TokenKind::Semicolon, "Expected ';' after value.");
        Stmt::Print { expr }
    }

    /// Parses a `while` loop after its keyword.
    ///
    /// Grammar: `while_stmt := "while" "(" expression ")" statement`
    fn parse_while_statement(&mut self) -> Stmt {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'while'.");
        let condition = self.parse_expression();
        self.consume(TokenKind::RightParen, "Expected ')' after condition.");
        let body = if self.enter_nested() {
            let body = self.parse_statement();
            self.leave_nested();
            body
        } else {
            Stmt::Block { statements: Vec::new() }
        };

        Stmt::While { condition,
                      body: Box::new(body) }
    }

    /// Grammar: `expr_stmt := expression ";"`
    fn parse_expression_statement(&mut self) -> Stmt {
        let expr = self.parse_expression();
        self.consume(TokenKind::Semicolon, "Expected ';' after expression.");
        Stmt::Expression { expr }
    }
}
