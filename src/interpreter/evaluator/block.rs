use std::{
    io::{self, Write},
    ops::{Deref, DerefMut},
};

use crate::{ast::Stmt, interpreter::evaluator::core::Interpreter};

/// Keeps a block scope alive for as long as it exists.
///
/// Created by [`Interpreter::scoped`]. Dereferences to the interpreter so the
/// block body can run through it, and pops the scope when dropped, whether the
/// body finished normally or bailed out early with `?`.
pub struct ScopeGuard<'a, W: Write> {
    interpreter: &'a mut Interpreter<W>,
}

impl<W: Write> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        self.interpreter.environment.pop_scope();
    }
}

impl<W: Write> Deref for ScopeGuard<'_, W> {
    type Target = Interpreter<W>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl<W: Write> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<W: Write> Interpreter<W> {
    /// Pushes a new scope and returns a guard that will pop it automatically.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let before = interpreter.environment().depth();
    ///
    /// {
    ///     let scope = interpreter.scoped();
    ///     assert_eq!(scope.environment().depth(), before + 1);
    /// }
    ///
    /// assert_eq!(interpreter.environment().depth(), before);
    /// ```
    pub fn scoped(&mut self) -> ScopeGuard<'_, W> {
        self.environment.push_scope();
        ScopeGuard { interpreter: self }
    }

    /// Executes `statements` in a new scope enclosed by the current one.
    ///
    /// Declarations inside the block are discarded when it finishes; the
    /// enclosing scope is current again afterwards on every exit path.
    ///
    /// # Errors
    /// Returns an error if writing `print` output fails.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> io::Result<()> {
        let mut scope = self.scoped();
        for statement in statements {
            scope.execute(statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use crate::interpreter::{
        evaluator::core::Interpreter,
        lexer::scan,
        parser::parse,
        value::core::Value,
    };

    /// A sink that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn scope_is_restored_when_the_block_fails() {
        let (tokens, _) = scan("var x = 1; { var x = 2; { print x; } }");
        let (statements, errors) = parse(&tokens);
        assert!(errors.is_empty());

        let mut interpreter = Interpreter::new(BrokenPipe);
        assert!(interpreter.interpret(&statements).is_err());

        assert_eq!(interpreter.environment().depth(), 1);
        assert_eq!(interpreter.environment().get("x"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn block_declarations_do_not_leak() {
        let (tokens, _) = scan("{ var inner = 1; }");
        let (statements, _) = parse(&tokens);

        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.interpret(&statements).unwrap();

        assert_eq!(interpreter.environment().get("inner"), None);
        assert_eq!(interpreter.environment().depth(), 1);
    }
}
