use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{Value, unescape},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment and the
/// lines printed so far.
///
/// ## Usage
///
/// A `Context` is created once per run. [`eval_program`](Self::eval_program)
/// executes a parsed program against it; afterwards the printed output and the
/// final environment can be read back or taken apart with
/// [`into_parts`](Self::into_parts).
#[derive(Debug, Default)]
pub struct Context {
    /// Variable bindings, root scope first.
    pub environment: Environment,
    pub(super) output: Vec<String>,
    pub(super) echo:   bool,
}

impl Context {
    /// Creates a new evaluation context with an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether printed lines are also written to stdout as they are
    /// produced.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// The lines printed so far, in program order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Splits the context into its printed output and final environment.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Environment) {
        (self.output, self.environment)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variables and
    /// arithmetic operations.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for unknown variables, invalid operand types
    /// and arithmetic failures.
    ///
    /// # Example
    /// ```
    /// use simplelang::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let context = Context::new();
    /// let here = Position::start();
    /// let expr = Expr::BinaryOp { left:     Box::new(Expr::StringLiteral { raw:      "a".into(),
    ///                                                                       position: here, }),
    ///                             op:       BinaryOperator::Add,
    ///                             right:    Box::new(Expr::StringLiteral { raw:      "b".into(),
    ///                                                                       position: here, }),
    ///                             position: here, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::from("ab"));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { raw, .. } => Ok(Value::Text(unescape(raw))),
            Expr::Variable { name, position } => {
                self.environment.lookup(name, *position).cloned()
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
        }
    }

    /// Executes a single statement.
    ///
    /// Declarations check the initializer's type against the declared type
    /// before binding the name in the innermost scope. `print` renders its
    /// value and records it. `if` evaluates its condition and runs at most one
    /// block.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while executing the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDeclaration { declared_type,
                                             name,
                                             value,
                                             position, } => {
                let value = self.eval(value)?;
                if value.value_type() != *declared_type {
                    return Err(RuntimeError::DeclarationTypeMismatch { name:     name.clone(),
                                                                       declared: *declared_type,
                                                                       found:    value.value_type(),
                                                                       position: *position, });
                }
                self.environment.declare(name, value, *position)
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.print(&value);
                Ok(())
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => self.eval_if(condition, then_block, else_block.as_ref()),
        }
    }

    /// Executes every top-level statement of a program in order.
    ///
    /// Execution stops at the first error; statements after it do not run.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        program.statements
               .iter()
               .try_for_each(|statement| self.eval_statement(statement))
    }
}
