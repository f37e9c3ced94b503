use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::position::Position,
};

impl Context {
    /// Evaluates both operands of a binary operation, left first, then applies
    /// the operator.
    ///
    /// # Errors
    /// Propagates operand errors and those of [`eval_binary`](Self::eval_binary).
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          position: Position)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, position)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// Two integers support all four operators with checked 64-bit
    /// arithmetic; division truncates toward zero. Two texts support `+`
    /// only, as concatenation. Every other combination is a type error.
    ///
    /// # Errors
    /// - `InvalidOperands` for unsupported operand types.
    /// - `DivisionByZero` when dividing by zero.
    /// - `Overflow` when the result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use simplelang::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeErrorKind,
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let here = Position::start();
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Sub, &7.into(), &10.into(), here).unwrap();
    /// assert_eq!(sum, Value::Integer(-3));
    ///
    /// let err = Context::eval_binary(BinaryOperator::Mul, &"a".into(), &"b".into(), here)
    ///               .unwrap_err();
    /// assert_eq!(err.kind(), RuntimeErrorKind::Type);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                Self::eval_integer(op, *a, *b, position).map(Value::Integer)
            },
            (Value::Text(a), Value::Text(b)) if op == BinaryOperator::Add => {
                Ok(Value::Text(format!("{a}{b}")))
            },
            _ => Err(RuntimeError::InvalidOperands { operator: op.symbol(),
                                                     left: left.value_type(),
                                                     right: right.value_type(),
                                                     position }),
        }
    }

    fn eval_integer(op: BinaryOperator, a: i64, b: i64, position: Position) -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                a.checked_div(b)
            },
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}
