use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

/// Returned by [`Parser::peek`] when the token list does not end with `Eof`.
static END: Token = Token::eof(0);

/// How deeply expressions and statements may nest before parsing gives up.
///
/// Both the parser and the evaluator recurse once per level, so this also
/// bounds their stack use.
pub const MAX_NESTING: usize = 128;

/// A recursive-descent parser over a scanned token list.
///
/// The parser keeps a single cursor into `tokens` and never moves it past the
/// final `Eof` token. Grammar rules live in the sibling modules as further
/// `impl Parser` blocks.
pub struct Parser<'a> {
    tokens:    &'a [Token],
    current:   usize,
    errors:    Vec<ParseError>,
    depth:     usize,
    abandoned: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0,
               errors: Vec::new(),
               depth: 0,
               abandoned: false }
    }

    /// Parses declarations until the end of input.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// # Returns
    /// The statements in source order together with every error recorded
    /// along the way.
    #[must_use]
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.declaration_with_progress());
        }

        (statements, self.errors)
    }

    /// Parses a single expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub fn parse_expression(&mut self) -> Expr {
        self.parse_assignment()
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses a declaration, skipping one token if the declaration consumed
    /// nothing. Keeps the declaration loops finite on input where no rule
    /// applies, such as a stray `)`.
    pub(in crate::interpreter::parser) fn declaration_with_progress(&mut self) -> Stmt {
        let start = self.current;
        let statement = self.parse_declaration();
        if self.current == start {
            self.advance();
        }
        statement
    }

    /// Enters one level of nesting.
    ///
    /// Past [`MAX_NESTING`] levels an error is recorded, the rest of the input
    /// is skipped and `false` is returned; the caller must not descend. Errors
    /// from the enclosing rules unwinding over the skipped input are dropped.
    pub(in crate::interpreter::parser) fn enter_nested(&mut self) -> bool {
        if self.abandoned {
            return false;
        }
        if self.depth >= MAX_NESTING {
            self.error_at_current("Too much nesting.");
            self.abandoned = true;
            while !self.is_at_end() {
                self.advance();
            }
            return false;
        }
        self.depth += 1;
        true
    }

    /// Leaves a level entered with [`enter_nested`](Self::enter_nested).
    pub(in crate::interpreter::parser) const fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    pub(in crate::interpreter::parser) const fn depth(&self) -> usize {
        self.depth
    }

    /// Restores a depth saved with [`depth`](Self::depth).
    pub(in crate::interpreter::parser) const fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Checks the current token against `kind` and consumes it on a match.
    ///
    /// On a mismatch a [`ParseError`] carrying `message` is recorded, nothing
    /// is consumed, and a placeholder token of the expected kind with an empty
    /// lexeme is returned in its place.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &str)
                                                  -> Token {
        if self.check(kind) {
            return self.advance().clone();
        }

        let line = self.peek().line;
        self.error_at_current(message);
        Token::new(kind, "", line)
    }

    /// Consumes the current token if it is any of `kinds`.
    pub(in crate::interpreter::parser) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Returns `true` if the current token is of `kind`. Always `false` at the
    /// end of input.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Moves past the current token unless it is the end marker, and returns
    /// the token just passed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(in crate::interpreter::parser) fn previous(&self) -> &Token {
        self.current
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&END)
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&END)
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Records an error at the current token.
    pub(in crate::interpreter::parser) fn error_at_current(&mut self, message: &str) {
        if self.abandoned {
            return;
        }
        let token = self.peek();
        let error = ParseError { lexeme:  token.lexeme.clone(),
                                 message: message.to_string(),
                                 line:    token.line, };
        self.errors.push(error);
    }

    /// Records an error at an already consumed token.
    pub(in crate::interpreter::parser) fn error_at(&mut self, token: &Token, message: &str) {
        if self.abandoned {
            return;
        }
        self.errors.push(ParseError { lexeme:  token.lexeme.clone(),
                                      message: message.to_string(),
                                      line:    token.line, });
    }
}
