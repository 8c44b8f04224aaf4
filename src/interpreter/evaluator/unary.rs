use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on an evaluated operand.
    ///
    /// - `+` returns its numeric operand unchanged.
    /// - `-` subtracts it from zero, so `-0` is `0` rather than `-0`.
    /// - `!` coerces the operand with [`Value::truthy`] and inverts it.
    ///
    /// # Errors
    /// `TypeMismatch` when `+` or `-` is applied to a boolean.
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(Value::Number(value.as_number(op.symbol())?)),
            UnaryOperator::Minus => Ok(Value::Number(0.0 - value.as_number(op.symbol())?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.truthy())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn plus_and_minus_act_on_numbers() {
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, Value::Number(5.0)).unwrap(),
                   Value::Number(5.0));
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Minus, Value::Number(5.0)).unwrap(),
                   Value::Number(-5.0));
    }

    #[test]
    fn negated_zero_is_plain_zero() {
        let value = Evaluator::eval_unary(UnaryOperator::Minus, Value::Number(0.0)).unwrap();
        assert_eq!(value.to_string(), "0");
    }

    #[test]
    fn not_coerces_numbers() {
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, Value::Number(0.0)).unwrap(),
                   Value::Bool(true));
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, Value::Number(2.0)).unwrap(),
                   Value::Bool(false));
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, Value::Bool(false)).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn negating_a_boolean_is_a_type_mismatch() {
        let err = Evaluator::eval_unary(UnaryOperator::Minus, Value::Bool(true)).unwrap_err();
        assert!(matches!(err, EvalError::TypeMismatch { ref operator, .. } if operator == "-"));
    }
}
