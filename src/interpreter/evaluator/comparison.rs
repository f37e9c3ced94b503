use crate::{
    ast::{ComparisonOperator, Condition},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::position::Position,
};

/// Maps an equality operator and a boolean equality result to the final
/// boolean value, inverting it for `!=`.
#[must_use]
pub const fn equality_op_result(op: ComparisonOperator, is_equal: bool) -> bool {
    match op {
        ComparisonOperator::NotEqual => !is_equal,
        _ => is_equal,
    }
}

impl Context {
    /// Evaluates an `if` condition.
    ///
    /// The left side is evaluated before the right side.
    ///
    /// # Errors
    /// Propagates operand errors and those of
    /// [`eval_comparison`](Self::eval_comparison).
    pub fn eval_condition(&self, condition: &Condition) -> EvalResult<bool> {
        let left = self.eval(&condition.left)?;
        let right = self.eval(&condition.right)?;
        Self::eval_comparison(condition.op, &left, &right, condition.position)
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` compare two values of the same type structurally. The
    /// ordering operators `<`, `<=`, `>` and `>=` are only defined on two
    /// integers.
    ///
    /// # Errors
    /// Returns `InvalidOperands` for mixed operand types and for ordering
    /// comparisons between texts.
    ///
    /// # Example
    /// ```
    /// use simplelang::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let here = Position::start();
    ///
    /// assert!(Context::eval_comparison(ComparisonOperator::Less, &3.into(), &5.into(), here)
    ///         .unwrap());
    /// assert!(Context::eval_comparison(ComparisonOperator::Equal, &"a".into(), &"a".into(), here)
    ///         .unwrap());
    /// assert!(Context::eval_comparison(ComparisonOperator::Less, &"a".into(), &"b".into(), here)
    ///         .is_err());
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<bool> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(match op {
                ComparisonOperator::Equal | ComparisonOperator::NotEqual => {
                    equality_op_result(op, a == b)
                },
                ComparisonOperator::Less => a < b,
                ComparisonOperator::LessEqual => a <= b,
                ComparisonOperator::Greater => a > b,
                ComparisonOperator::GreaterEqual => a >= b,
            }),
            (Value::Text(a), Value::Text(b)) if op.is_equality() => {
                Ok(equality_op_result(op, a == b))
            },
            _ => Err(RuntimeError::InvalidOperands { operator: op.symbol(),
                                                     left: left.value_type(),
                                                     right: right.value_type(),
                                                     position }),
        }
    }
}
