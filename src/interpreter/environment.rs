use std::collections::HashMap;

use log::trace;

use crate::interpreter::value::core::Value;

/// The chain of variable scopes visible to the running program.
///
/// Scopes are stored innermost-last: index 0 is the global scope and the
/// enclosing scope of scope `i` is scope `i - 1`. A block pushes a scope on
/// entry and pops it on exit, so the chain always mirrors the blocks that are
/// currently executing.
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Number of scopes in the chain, including the global scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Adds a fresh empty scope enclosed by the current one.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
        trace!("entered scope {}", self.scopes.len() - 1);
    }

    /// Discards the innermost scope and every binding in it. The global scope
    /// is never removed.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            trace!("left scope {}", self.scopes.len());
        }
    }

    /// Binds `name` in the innermost scope, replacing any binding of the same
    /// name there. Enclosing scopes are never touched, so a declaration in a
    /// block shadows an outer variable instead of overwriting it.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0));
    /// env.push_scope();
    /// env.define("x", Value::Number(2.0));
    /// assert_eq!(env.get("x"), Some(&Value::Number(2.0)));
    ///
    /// env.pop_scope();
    /// assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Overwrites the nearest binding of `name`, searching from the innermost
    /// scope outward.
    ///
    /// # Returns
    /// `false` when no scope binds `name`; nothing is changed in that case.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.scopes
                  .iter_mut()
                  .rev()
                  .find_map(|scope| scope.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Looks `name` up, searching from the innermost scope outward.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}
