use crate::{
    ast::Expr,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses an assignment, or falls through to equality.
    ///
    /// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
    /// The left-hand side is parsed as an ordinary expression first and only
    /// becomes an assignment target if it turns out to be a variable.
    ///
    /// Grammar: `assignment := equality ("=" assignment)?`
    ///
    /// # Returns
    /// An `Expr::Assign` when the target is a variable. For any other target
    /// an error is recorded at the `=` and the left-hand side is returned
    /// unchanged.
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> Expr {
        let expr = self.parse_equality();

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            if !self.enter_nested() {
                return expr;
            }
            let value = self.parse_assignment();
            self.leave_nested();

            if let Expr::Variable { name } = expr {
                return Expr::Assign { name,
                                      value: Box::new(value) };
            }

            self.error_at(&equals, "Invalid assignment target.");
        }

        expr
    }

    /// Parses equality operators.
    ///
    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    fn parse_equality(&mut self) -> Expr {
        self.parse_left_assoc(&[TokenKind::BangEqual, TokenKind::EqualEqual],
                              Self::parse_comparison)
    }

    /// Parses relational operators.
    ///
    /// Grammar: `comparison := addition ((">" | ">=" | "<" | "<=") addition)*`
    fn parse_comparison(&mut self) -> Expr {
        self.parse_left_assoc(&[TokenKind::Greater,
                                TokenKind::GreaterEqual,
                                TokenKind::Less,
                                TokenKind::LessEqual],
                              Self::parse_addition)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `addition := multiplication (("+" | "-") multiplication)*`
    fn parse_addition(&mut self) -> Expr {
        self.parse_left_assoc(&[TokenKind::Plus, TokenKind::Minus],
                              Self::parse_multiplication)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `multiplication := exponent (("/" | "*") exponent)*`
    fn parse_multiplication(&mut self) -> Expr {
        self.parse_left_assoc(&[TokenKind::Slash, TokenKind::Star],
                              Self::parse_exponent)
    }

    /// Parses exponentiation.
    ///
    /// `**` binds tighter than `*` and `/` and is left-associative:
    /// `2 ** 3 ** 2` parses as `(2 ** 3) ** 2`.
    ///
    /// Grammar: `exponent := unary ("**" unary)*`
    fn parse_exponent(&mut self) -> Expr {
        self.parse_left_assoc(&[TokenKind::StarStar], Self::parse_unary)
    }

    /// Folds `operand (op operand)*` into a left-leaning chain of
    /// `Expr::Binary` nodes. Every link deepens the tree, so each one counts
    /// as a level of nesting until the chain ends.
    fn parse_left_assoc(&mut self, operators: &[TokenKind], operand: fn(&mut Self) -> Expr) -> Expr {
        let depth = self.depth();
        let mut left = operand(self);

        while self.matches(operators) {
            let operator = self.previous().clone();
            if !self.enter_nested() {
                break;
            }
            let right = operand(self);
            left = Expr::Binary { left: Box::new(left),
                                  operator,
                                  right: Box::new(right) };
        }

        self.restore_depth(depth);
        left
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{lexer::scan, parser::core::Parser};

    fn render(source: &str) -> String {
        let (tokens, _) = scan(source);
        let mut parser = Parser::new(&tokens);
        let expr = parser.parse_expression();
        assert!(parser.errors().is_empty(),
                "unexpected errors: {:?}",
                parser.errors());
        expr.to_string()
    }

    #[test]
    fn exponent_binds_tighter_than_addition() {
        assert_eq!(render("2 + 3 ** 2"), "(+ 2 (** 3 2))");
        assert_eq!(render("2 * 3 ** 2"), "(* 2 (** 3 2))");
    }

    #[test]
    fn exponent_is_left_associative() {
        assert_eq!(render("2 ** 3 ** 2"), "(** (** 2 3) 2)");
    }

    #[test]
    fn exponent_binds_looser_than_unary() {
        assert_eq!(render("-2 ** 2"), "(** (- 2) 2)");
    }

    #[test]
    fn precedence_ladder() {
        assert_eq!(render("1 + 2 * 3 - 4 / 2"), "(- (+ 1 (* 2 3)) (/ 4 2))");
        assert_eq!(render("1 < 2 == 3 >= 4"), "(== (< 1 2) (>= 3 4))");
        assert_eq!(render("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(render("a = b = 1 + 2"), "(assign a (assign b (+ 1 2)))");
    }

    #[test]
    fn long_operator_chains_count_as_nesting() {
        let (tokens, _) = scan(&format!("1{}", " + 1".repeat(500)));
        let mut parser = Parser::new(&tokens);
        parser.parse_expression();

        assert_eq!(parser.errors().len(), 1);
        assert_eq!(parser.errors()[0].message, "Too much nesting.");

        let (tokens, _) = scan(&format!("1{}", " * 2".repeat(100)));
        let mut parser = Parser::new(&tokens);
        parser.parse_expression();
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn invalid_assignment_target_is_reported() {
        let (tokens, _) = scan("1 + a = 3");
        let mut parser = Parser::new(&tokens);
        let expr = parser.parse_expression();

        assert_eq!(expr.to_string(), "(+ 1 (var a))");
        assert_eq!(parser.errors().len(), 1);
        assert_eq!(parser.errors()[0].to_string(),
                   "error on line 1 at \"=\": Invalid assignment target.");
    }
}
