use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Applies a prefix operator to an already evaluated operand.
    ///
    /// Supported operators:
    /// - `!`: negates the operand's truthiness; defined for every value.
    /// - `-`: numeric negation. Any other operand reports
    ///   `OperandMustBeNumber` and yields `nil`.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let minus = Token::new(TokenKind::Minus, "-", 1);
    /// let bang = Token::new(TokenKind::Bang, "!", 1);
    ///
    /// assert_eq!(interpreter.eval_unary(&minus, Value::Number(5.0)), Value::Number(-5.0));
    /// assert_eq!(interpreter.eval_unary(&bang, Value::from("")), Value::Bool(true));
    /// assert_eq!(interpreter.eval_unary(&minus, Value::from("x")), Value::Nil);
    /// ```
    pub fn eval_unary(&mut self, operator: &Token, right: Value) -> Value {
        match operator.kind {
            TokenKind::Bang => Value::Bool(!right.is_truthy()),
            TokenKind::Minus => {
                if let Value::Number(n) = right {
                    return Value::Number(-n);
                }
                self.report(RuntimeError::OperandMustBeNumber { operator: operator.lexeme.clone(),
                                                                line:     operator.line, });
                Value::Nil
            },
            _ => Value::Nil,
        }
    }
}
