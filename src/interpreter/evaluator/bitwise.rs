use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::numbers,
            core::{EvalResult, Evaluator},
        },
        value::Value,
    },
    util::num::{f64_to_u64_checked, u64_to_f64},
};

impl Evaluator {
    /// Evaluates `& | ^ << >>`.
    ///
    /// Both operands must be non-negative integers no larger than 2^53 - 1.
    /// `&`, `|` and `^` operate on the integer bits. Shifts are defined
    /// arithmetically, so a large left shift yields a large (or infinite)
    /// number rather than wrapping:
    ///
    /// ```text
    /// a << b = a * 2^b        (0 when a is 0)
    /// a >> b = (a - a mod 2^b) / 2^b
    /// ```
    pub(super) fn eval_bitwise(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        let (a, b) = numbers(op, left, right)?;
        let x = f64_to_u64_checked(a, op)?;
        let y = f64_to_u64_checked(b, op)?;

        let result = match op {
            BinaryOperator::BitAnd => u64_to_f64(x & y),
            BinaryOperator::BitOr => u64_to_f64(x | y),
            BinaryOperator::BitXor => u64_to_f64(x ^ y),
            BinaryOperator::Shl if x == 0 => 0.0,
            BinaryOperator::Shl => a * 2f64.powf(b),
            _ => {
                let scale = 2f64.powf(b);
                (a - a % scale) / scale
            },
        };
        log::trace!("{a} {op} {b} = {result}");
        Ok(Value::Number(result))
    }
}
