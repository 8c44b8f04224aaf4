use std::fmt;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    config::Limits,
    error::EvalError,
    interpreter::value::Value,
    util::num::is_number_literal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// One level of an expression, with its operands left unevaluated.
///
/// The evaluator only ever looks at a node through its shape, so the same
/// operator semantics apply to an [`Expr`] tree and to an AST string decoded
/// one node at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a, T> {
    /// A literal with its digits.
    Literal(&'a str),
    /// A prefix operator and its operand.
    Unary(UnaryOperator, T),
    /// An infix operator and its operands.
    Binary(BinaryOperator, T, T),
    /// Condition, then branch and else branch.
    Conditional(T, T, T),
}

/// Something the evaluator can walk: a tree node or an encoded AST string.
///
/// `shape` exposes the top level only. Operands stay in their original form
/// until the evaluator decides to evaluate them.
pub trait Operand<'a>: Copy + fmt::Display {
    /// Reveals the outermost node.
    ///
    /// # Errors
    /// Returns an `EvalError` if the node is not a well-formed expression.
    fn shape(self) -> EvalResult<Shape<'a, Self>>;
}

impl<'a> Operand<'a> for &'a Expr {
    fn shape(self) -> EvalResult<Shape<'a, Self>> {
        Ok(match self {
            Expr::Literal(digits) => Shape::Literal(digits),
            Expr::Unary { op, operand } => Shape::Unary(*op, &**operand),
            Expr::Binary { op, left, right } => Shape::Binary(*op, &**left, &**right),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                Shape::Conditional(&**condition, &**then_branch, &**else_branch)
            },
        })
    }
}

/// Evaluates expressions within configurable resource limits.
///
/// The evaluator holds no state besides its limits; every call is a pure
/// function of its input.
///
/// # Example
/// ```
/// use exprima::{
///     Limits,
///     interpreter::{evaluator::core::Evaluator, value::Value},
/// };
///
/// let evaluator = Evaluator::new();
/// assert_eq!(evaluator.eval_ast("*(+(n:1,n:2),n:3)").unwrap(), Value::Number(9.0));
///
/// let shallow = Evaluator::with_limits(Limits { max_depth: 2, ..Limits::default() });
/// assert!(shallow.eval_ast("-(-(n:1))").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    limits: Limits,
}

impl Evaluator {
    /// Creates an evaluator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator bounded by `limits`. Only `max_depth` applies to
    /// evaluation.
    #[must_use]
    pub const fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    /// Evaluates an expression tree.
    ///
    /// # Errors
    /// Any `EvalError` raised by an operator, or `DepthLimitExceeded` for a
    /// tree deeper than `max_depth`.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr, 1)
    }

    /// Evaluates an AST string without building a tree.
    ///
    /// Nodes are decoded only when reached, so an operand skipped by `&&`,
    /// `||` or `?:` is never decoded and cannot fail.
    ///
    /// # Errors
    /// `MalformedAst`, `UnknownOperator`, `WrongArity` or `InvalidLiteral` for
    /// a bad encoding, and every error [`Evaluator::eval_expr`] can return.
    pub fn eval_ast(&self, ast: &str) -> EvalResult<Value> {
        self.eval(ast, 1)
    }

    /// Evaluates `node`, which sits at `depth` in its tree (the root is 1).
    pub(super) fn eval<'a, O>(&self, node: O, depth: usize) -> EvalResult<Value>
        where O: Operand<'a>
    {
        self.check_depth(depth)?;
        log::trace!("eval at depth {depth}: {node}");

        match node.shape()? {
            Shape::Literal(digits) => literal_value(digits),
            Shape::Unary(op, operand) => {
                let value = self.eval(operand, depth + 1)?;
                Self::eval_unary(op, value)
            },
            Shape::Binary(BinaryOperator::And, left, right) => self.eval_and(left, right, depth),
            Shape::Binary(BinaryOperator::Or, left, right) => self.eval_or(left, right, depth),
            Shape::Binary(op, left, right) => {
                let left = self.eval(left, depth + 1)?;
                let right = self.eval(right, depth + 1)?;
                Self::eval_binary(op, left, right)
            },
            Shape::Conditional(condition, then_branch, else_branch) => {
                self.eval_conditional(condition, then_branch, else_branch, depth)
            },
        }
    }

    /// Fails once `depth` goes past `max_depth`.
    pub(super) fn check_depth(&self, depth: usize) -> EvalResult<()> {
        if depth > self.limits.max_depth {
            return Err(EvalError::DepthLimitExceeded { limit: self.limits.max_depth });
        }
        Ok(())
    }
}

/// Converts literal digits into a number.
///
/// # Errors
/// `EvalError::InvalidLiteral` unless `digits` has the form
/// `digit+ ('.' digit+)?`.
pub fn literal_value(digits: &str) -> EvalResult<Value> {
    if !is_number_literal(digits) {
        return Err(EvalError::InvalidLiteral { literal: digits.to_string() });
    }
    digits.parse::<f64>()
          .map(Value::Number)
          .map_err(|_| EvalError::InvalidLiteral { literal: digits.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(digits: &str) -> Expr {
        Expr::literal(digits)
    }

    #[test]
    fn literals_evaluate_to_their_value() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.eval_expr(&lit("5")).unwrap(), Value::Number(5.0));
        assert_eq!(evaluator.eval_expr(&lit("2.75")).unwrap(), Value::Number(2.75));
    }

    #[test]
    fn hand_built_literal_is_validated() {
        let err = Evaluator::new().eval_expr(&lit("1e3")).unwrap_err();
        assert_eq!(err, EvalError::InvalidLiteral { literal: "1e3".to_string() });
    }

    #[test]
    fn tree_shapes_expose_children_by_reference() {
        let expr = Expr::binary(BinaryOperator::Mul, lit("2"), lit("4"));
        match (&expr).shape().unwrap() {
            Shape::Binary(op, left, right) => {
                assert_eq!(op, BinaryOperator::Mul);
                assert_eq!(left, &lit("2"));
                assert_eq!(right, &lit("4"));
            },
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn depth_limit_counts_the_root_as_one() {
        let limits = Limits { max_depth: 2,
                              ..Limits::default() };
        let evaluator = Evaluator::with_limits(limits);
        let two = Expr::unary(UnaryOperator::Minus, lit("1"));
        assert_eq!(evaluator.eval_expr(&two).unwrap(), Value::Number(-1.0));
        let three = Expr::unary(UnaryOperator::Minus, two);
        assert_eq!(evaluator.eval_expr(&three).unwrap_err(),
                   EvalError::DepthLimitExceeded { limit: 2 });
    }

    #[test]
    fn evaluation_is_repeatable() {
        let expr = Expr::binary(BinaryOperator::Add, lit("1"), lit("2"));
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.eval_expr(&expr), evaluator.eval_expr(&expr));
    }
}
