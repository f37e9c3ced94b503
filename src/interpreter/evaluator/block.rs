use crate::{
    ast::{Block, Condition},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Runs `f` inside a freshly pushed scope.
    ///
    /// The scope is popped once `f` returns, whether it produced `Ok` or
    /// `Err`, so an error raised inside a block never leaves that block's
    /// bindings behind.
    ///
    /// # Example
    /// ```
    /// use simplelang::{
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let mut context = Context::new();
    /// let before = context.environment.depth();
    ///
    /// let result = context.scoped(|context| {
    ///     context.environment
    ///            .declare("inner", Value::Integer(1), Position::start())?;
    ///     context.environment
    ///            .lookup("missing", Position::start())
    ///            .map(|_| ())
    /// });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(context.environment.depth(), before);
    /// assert_eq!(context.environment.get("inner"), None);
    /// ```
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> EvalResult<T>) -> EvalResult<T> {
        self.environment.push_scope();
        let result = f(self);
        self.environment.pop_scope();
        result
    }

    /// Evaluates a block's statements in order inside a new scope.
    ///
    /// Declarations made in the block are discarded when it finishes. Names
    /// declared in the block may shadow outer ones without changing them.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by a statement; the remaining
    /// statements do not run.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        self.scoped(|context| {
                block.statements
                     .iter()
                     .try_for_each(|statement| context.eval_statement(statement))
            })
    }

    /// Evaluates an `if` statement.
    ///
    /// The condition is evaluated first. If it holds, the then-block runs;
    /// otherwise the else-block runs when present. Each block gets its own
    /// scope.
    ///
    /// # Errors
    /// Propagates errors from the condition and from the chosen block.
    pub fn eval_if(&mut self,
                   condition: &Condition,
                   then_block: &Block,
                   else_block: Option<&Block>)
                   -> EvalResult<()> {
        if self.eval_condition(condition)? {
            self.eval_block(then_block)
        } else if let Some(else_block) = else_block {
            self.eval_block(else_block)
        } else {
            Ok(())
        }
    }
}
