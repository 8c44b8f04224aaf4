use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator, Operand},
    value::Value,
};

impl Evaluator {
    /// Evaluates `left && right`, skipping `right` when `left` is false.
    ///
    /// Both sides are coerced with [`Value::truthy`]; the result is a boolean.
    pub(super) fn eval_and<'a, O>(&self, left: O, right: O, depth: usize) -> EvalResult<Value>
        where O: Operand<'a>
    {
        if !self.eval(left, depth + 1)?.truthy() {
            return Ok(Value::Bool(false));
        }
        Ok(Value::Bool(self.eval(right, depth + 1)?.truthy()))
    }

    /// Evaluates `left || right`, skipping `right` when `left` is true.
    pub(super) fn eval_or<'a, O>(&self, left: O, right: O, depth: usize) -> EvalResult<Value>
        where O: Operand<'a>
    {
        if self.eval(left, depth + 1)?.truthy() {
            return Ok(Value::Bool(true));
        }
        Ok(Value::Bool(self.eval(right, depth + 1)?.truthy()))
    }

    /// Evaluates a conditional expression.
    ///
    /// Only the branch selected by the condition is evaluated and its value
    /// is returned as is, number or boolean.
    pub(super) fn eval_conditional<'a, O>(&self,
                                          condition: O,
                                          then_branch: O,
                                          else_branch: O,
                                          depth: usize)
                                          -> EvalResult<Value>
        where O: Operand<'a>
    {
        let branch = if self.eval(condition, depth + 1)?.truthy() {
            then_branch
        } else {
            else_branch
        };
        self.eval(branch, depth + 1)
    }
}
