use std::collections::BTreeMap;

use crate::{
    error::RuntimeError, interpreter::value::Value, util::position::Position,
};

/// One block's worth of bindings.
type Scope = BTreeMap<String, Value>;

/// The variable bindings visible during evaluation.
///
/// Scopes form a stack: the root scope sits at the bottom and every block
/// pushes a child scope on entry and pops it on exit. The enclosing scope of
/// the scope at index `i` is the one at `i - 1`, so lookups walk the stack
/// from the top down and never need parent pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::new()] }
    }

    /// Binds `name` in the innermost scope.
    ///
    /// Declaring a name that an enclosing scope already binds shadows it for
    /// the rest of the current block.
    ///
    /// # Errors
    /// Returns `RuntimeError::DuplicateDeclaration` if the innermost scope
    /// already binds `name`.
    ///
    /// # Example
    /// ```
    /// use simplelang::{
    ///     interpreter::{environment::Environment, value::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let here = Position::start();
    ///
    /// env.declare("x", Value::Integer(1), here).unwrap();
    /// assert!(env.declare("x", Value::Integer(2), here).is_err());
    ///
    /// env.push_scope();
    /// env.declare("x", Value::Integer(3), here).unwrap();
    /// assert_eq!(env.get("x"), Some(&Value::Integer(3)));
    ///
    /// env.pop_scope();
    /// assert_eq!(env.get("x"), Some(&Value::Integer(1)));
    /// ```
    pub fn declare(&mut self, name: &str, value: Value, position: Position)
                   -> Result<(), RuntimeError> {
        if self.scopes
               .last()
               .is_some_and(|scope| scope.contains_key(name))
        {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string(),
                                                            position });
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Retrieves the value bound to `name`, searching from the innermost scope
    /// outward.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no active scope binds
    /// `name`.
    pub fn lookup(&self, name: &str, position: Position) -> Result<&Value, RuntimeError> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             position })
    }

    /// Like [`lookup`](Self::lookup), but returns `None` instead of an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Pushes a new, empty innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Removes the innermost scope and every binding it holds.
    ///
    /// The root scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The number of active scopes, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The bindings of the root scope, ordered by name.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.scopes
            .first()
            .into_iter()
            .flat_map(|scope| scope.iter().map(|(name, value)| (name.as_str(), value)))
    }
}
