use crate::{
    ast::{Expr, LiteralValue},
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("!" | "-") unary
    ///            | primary
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> Expr {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            if !self.enter_nested() {
                return Expr::nil();
            }
            let right = self.parse_unary();
            self.leave_nested();
            return Expr::Unary { operator,
                                 right: Box::new(right) };
        }

        self.parse_primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER | STRING | "true" | "false" | "nil"
    ///              | IDENTIFIER
    ///              | "(" expression ")"
    /// ```
    ///
    /// When the current token cannot start an expression, an error is
    /// recorded, nothing is consumed, and `nil` stands in for the missing
    /// expression.
    fn parse_primary(&mut self) -> Expr {
        if self.matches(&[TokenKind::False]) {
            return Expr::literal(false);
        }
        if self.matches(&[TokenKind::True]) {
            return Expr::literal(true);
        }
        if self.matches(&[TokenKind::Nil]) {
            return Expr::nil();
        }

        if self.matches(&[TokenKind::Number, TokenKind::String]) {
            let value = self.previous()
                            .literal
                            .clone()
                            .map_or(LiteralValue::Nil, LiteralValue::from);
            return Expr::Literal { value };
        }

        if self.matches(&[TokenKind::Identifier]) {
            return Expr::Variable { name: self.previous().clone() };
        }

        if self.matches(&[TokenKind::LeftParen]) {
            if !self.enter_nested() {
                return Expr::nil();
            }
            let inner = self.parse_expression();
            self.leave_nested();
            self.consume(TokenKind::RightParen, "Expected ')' after expression.");
            return Expr::Grouping { inner: Box::new(inner) };
        }

        self.error_at_current("Expected expression.");
        Expr::nil()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, LiteralValue},
        interpreter::{
            lexer::scan,
            parser::core::{MAX_NESTING, Parser},
        },
    };

    fn parse_one(source: &str) -> (Expr, usize) {
        let (tokens, _) = scan(source);
        let mut parser = Parser::new(&tokens);
        let expr = parser.parse_expression();
        (expr, parser.errors().len())
    }

    #[test]
    fn literals() {
        assert_eq!(parse_one("12.5"), (Expr::literal(12.5), 0));
        assert_eq!(parse_one("\"text\""), (Expr::literal("text"), 0));
        assert_eq!(parse_one("true"), (Expr::literal(true), 0));
        assert_eq!(parse_one("nil"),
                   (Expr::Literal { value: LiteralValue::Nil }, 0));
    }

    #[test]
    fn nested_unary_operators() {
        let (expr, errors) = parse_one("!-x");
        assert_eq!(errors, 0);
        assert_eq!(expr.to_string(), "(! (- (var x)))");
    }

    #[test]
    fn unclosed_group_is_reported() {
        let (expr, errors) = parse_one("(1 + 2");
        assert_eq!(errors, 1);
        assert_eq!(expr.to_string(), "(group (+ 1 2))");
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        let depth = MAX_NESTING - 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let (_, errors) = parse_one(&source);
        assert_eq!(errors, 0);
    }

    #[test]
    fn runaway_nesting_is_reported_once() {
        let source = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
        let (tokens, _) = scan(&source);
        let mut parser = Parser::new(&tokens);
        parser.parse_expression();

        assert_eq!(parser.errors().len(), 1);
        assert_eq!(parser.errors()[0].to_string(),
                   "error on line 1 at \"(\": Too much nesting.");

        let (_, errors) = parse_one(&format!("{}x", "-".repeat(3000)));
        assert_eq!(errors, 1);
    }

    #[test]
    fn missing_operand_yields_nil() {
        let (expr, errors) = parse_one("1 +");
        assert_eq!(errors, 1);
        assert_eq!(expr.to_string(), "(+ 1 nil)");
    }
}
