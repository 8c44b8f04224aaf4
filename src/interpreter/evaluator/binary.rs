use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, comparisons to
    /// `eval_comparison`, bitwise and shift operators to `eval_bitwise`.
    /// `&&` and `||` are applied to already evaluated operands here; tree and
    /// AST-string evaluation short-circuit them before reaching this point.
    ///
    /// # Errors
    /// `TypeMismatch` for a boolean operand of a numeric operator,
    /// `DivisionByZero` for `/` or `%` with a zero divisor, and
    /// `ExpectedNonNegativeInteger` for bad bitwise operands.
    ///
    /// # Example
    /// ```
    /// use exprima::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, Value::Number(3.0), Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Pow, Shl, Shr, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod | Pow => Self::eval_arithmetic(op, left, right),
            Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right)
            },
            BitAnd | BitOr | BitXor | Shl | Shr => Self::eval_bitwise(op, left, right),
            And => Ok(Value::Bool(left.truthy() && right.truthy())),
            Or => Ok(Value::Bool(left.truthy() || right.truthy())),
        }
    }

    /// Evaluates `+ - * / % **` on two numbers.
    ///
    /// `%` is the truncated remainder, so its sign follows the dividend.
    /// `**` may produce NaN or an infinity, which is returned unchanged.
    fn eval_arithmetic(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        let (a, b) = numbers(op, left, right)?;
        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div | BinaryOperator::Mod if b == 0.0 => {
                return Err(EvalError::DivisionByZero { operator: op });
            },
            BinaryOperator::Div => a / b,
            BinaryOperator::Mod => a % b,
            _ => a.powf(b),
        };
        Ok(Value::Number(result))
    }

    /// Compares two numbers, producing a boolean.
    ///
    /// Comparisons follow IEEE-754: every comparison involving NaN is false
    /// except `!=`.
    #[allow(clippy::float_cmp)]
    fn eval_comparison(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        let (a, b) = numbers(op, left, right)?;
        let result = match op {
            BinaryOperator::Less => a < b,
            BinaryOperator::LessEqual => a <= b,
            BinaryOperator::Greater => a > b,
            BinaryOperator::GreaterEqual => a >= b,
            BinaryOperator::Equal => a == b,
            _ => a != b,
        };
        Ok(Value::Bool(result))
    }
}

/// Extracts both operands as numbers, naming `op` in the error.
pub(super) fn numbers(op: BinaryOperator, left: Value, right: Value) -> EvalResult<(f64, f64)> {
    Ok((left.as_number(op.symbol())?, right.as_number(op.symbol())?))
}
