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
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// - `==` and `!=` compare any two values without coercion.
    /// - `+` adds two numbers or concatenates two strings; other combinations
    ///   report `InvalidPlusOperands`.
    /// - `-`, `*`, `/`, `**`, `<`, `<=`, `>`, `>=` require two numbers and
    ///   report `OperandsMustBeNumbers` otherwise.
    ///
    /// Every reported combination yields `nil`. Division follows IEEE-754, so
    /// dividing by zero produces an infinity or `NaN` rather than a
    /// diagnostic.
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
    /// let pow = Token::new(TokenKind::StarStar, "**", 1);
    ///
    /// let v = interpreter.eval_binary(&pow, Value::Number(2.0), Value::Number(10.0));
    /// assert_eq!(v, Value::Number(1024.0));
    /// ```
    pub fn eval_binary(&mut self, operator: &Token, left: Value, right: Value) -> Value {
        match operator.kind {
            TokenKind::EqualEqual => Value::Bool(left == right),
            TokenKind::BangEqual => Value::Bool(left != right),
            TokenKind::Plus => self.eval_plus(operator, left, right),
            TokenKind::Minus => self.eval_arithmetic(operator, &left, &right, |a, b| a - b),
            TokenKind::Star => self.eval_arithmetic(operator, &left, &right, |a, b| a * b),
            TokenKind::Slash => self.eval_arithmetic(operator, &left, &right, |a, b| a / b),
            TokenKind::StarStar => self.eval_arithmetic(operator, &left, &right, f64::powf),
            TokenKind::Greater => self.eval_comparison(operator, &left, &right, |a, b| a > b),
            TokenKind::GreaterEqual => self.eval_comparison(operator, &left, &right, |a, b| a >= b),
            TokenKind::Less => self.eval_comparison(operator, &left, &right, |a, b| a < b),
            TokenKind::LessEqual => self.eval_comparison(operator, &left, &right, |a, b| a <= b),
            _ => Value::Nil,
        }
    }

    fn eval_plus(&mut self, operator: &Token, left: Value, right: Value) -> Value {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            (Value::Str(a), Value::Str(b)) => Value::Str(a + &b),
            _ => {
                self.report(RuntimeError::InvalidPlusOperands { line: operator.line });
                Value::Nil
            },
        }
    }

    fn eval_arithmetic(&mut self,
                       operator: &Token,
                       left: &Value,
                       right: &Value,
                       op: impl Fn(f64, f64) -> f64)
                       -> Value {
        self.numeric_operands(operator, left, right)
            .map_or(Value::Nil, |(a, b)| Value::Number(op(a, b)))
    }

    fn eval_comparison(&mut self,
                       operator: &Token,
                       left: &Value,
                       right: &Value,
                       op: impl Fn(f64, f64) -> bool)
                       -> Value {
        self.numeric_operands(operator, left, right)
            .map_or(Value::Nil, |(a, b)| Value::Bool(op(a, b)))
    }

    /// Unwraps both operands as numbers, reporting `OperandsMustBeNumbers`
    /// when either one is not.
    fn numeric_operands(&mut self,
                        operator: &Token,
                        left: &Value,
                        right: &Value)
                        -> Option<(f64, f64)> {
        if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
            return Some((a, b));
        }
        self.report(RuntimeError::OperandsMustBeNumbers { operator: operator.lexeme.clone(),
                                                          line:     operator.line, });
        None
    }
}
