use std::io::{self, Write};

use log::debug;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, lexer::Token, value::core::Value},
};

/// A tree-walking interpreter.
///
/// The interpreter owns the variable environment and the sink that `print`
/// writes to. Global bindings persist across calls to
/// [`interpret`](Self::interpret), which lets a prompt feed it one line at a
/// time.
///
/// Evaluation never aborts on type errors or undefined variables. Such
/// problems are recorded as [`RuntimeError`] diagnostics and the offending
/// expression evaluates to `nil`. The only errors returned are I/O errors
/// from writing output.
pub struct Interpreter<W: Write> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    out: W,
    diagnostics: Vec<RuntimeError>,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope that prints to `out`.
    pub fn new(out: W) -> Self {
        Self { environment: Environment::new(),
               out,
               diagnostics: Vec::new() }
    }

    /// Executes statements in order against the current environment.
    ///
    /// # Errors
    /// Returns an error if writing `print` output fails. Execution stops at
    /// the failing statement.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse};
    ///
    /// let (tokens, _) = scan("var x = 3; x = x + 1; print x;");
    /// let (statements, _) = parse(&tokens);
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.interpret(&statements).unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"4\n");
    /// ```
    pub fn interpret(&mut self, statements: &[Stmt]) -> io::Result<()> {
        debug!("interpreting {} statements", statements.len());
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns an error if writing `print` output fails.
    pub fn execute(&mut self, statement: &Stmt) -> io::Result<()> {
        match statement {
            Stmt::Expression { expr } => {
                self.eval(expr);
            },
            Stmt::Print { expr } => {
                let value = self.eval(expr);
                writeln!(self.out, "{value}")?;
            },
            Stmt::VarDecl { name, initializer } => {
                let value = initializer.as_ref().map_or(Value::Nil, |init| self.eval(init));
                self.environment.define(&name.lexeme, value);
            },
            Stmt::Block { statements } => self.execute_block(statements)?,
            Stmt::While { condition, body } => {
                while self.eval(condition).is_truthy() {
                    self.execute(body)?;
                }
            },
        }
        Ok(())
    }

    /// Evaluates an expression to a value.
    pub fn eval(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal { value } => Value::from(value),
            Expr::Grouping { inner } => self.eval(inner),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Assign { name, value } => self.eval_assign(name, value),
            Expr::Unary { operator, right } => {
                let right = self.eval(right);
                self.eval_unary(operator, right)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.eval(left);
                let right = self.eval(right);
                self.eval_binary(operator, left, right)
            },
        }
    }

    /// Reads a variable, yielding `nil` when it is not defined.
    fn eval_variable(&mut self, name: &Token) -> Value {
        if let Some(value) = self.environment.get(&name.lexeme) {
            return value.clone();
        }
        self.report(RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                      line: name.line, });
        Value::Nil
    }

    /// Assigns to the nearest binding of `name`. The assigned value is the
    /// value of the whole expression, even when there is nothing to assign
    /// to.
    fn eval_assign(&mut self, name: &Token, value: &Expr) -> Value {
        let value = self.eval(value);
        if !self.environment.assign(&name.lexeme, value.clone()) {
            self.report(RuntimeError::UndefinedAssignment { name: name.lexeme.clone(),
                                                            line: name.line, });
        }
        value
    }

    /// Records a diagnostic.
    pub(in crate::interpreter::evaluator) fn report(&mut self, error: RuntimeError) {
        debug!("runtime diagnostic: {error}");
        self.diagnostics.push(error);
    }

    /// Drains the diagnostics recorded since the last call.
    pub fn take_diagnostics(&mut self) -> Vec<RuntimeError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// The variable environment.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
