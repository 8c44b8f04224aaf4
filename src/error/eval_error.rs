use thiserror::Error;

use crate::{ast::BinaryOperator, interpreter::value::Value};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An AST string that does not follow the encoding grammar.
    #[error("malformed AST {ast:?}: {reason}")]
    MalformedAst {
        /// The offending (sub)string.
        ast:    String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// A literal whose digits are not `digit+ ('.' digit+)?`.
    #[error("invalid number literal {literal:?}")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
    },
    /// An operator symbol outside the known set.
    #[error("unknown operator {symbol:?}")]
    UnknownOperator {
        /// The symbol found.
        symbol: String,
    },
    /// An operator applied to the wrong number of operands.
    #[error("operator '{operator}' takes {expected} operand(s), found {found}")]
    WrongArity {
        /// The operator symbol.
        operator: String,
        /// Accepted operand counts.
        expected: &'static str,
        /// The number of operands given.
        found:    usize,
    },
    /// Division or modulo with a zero divisor.
    #[error("division by zero in '{operator}'")]
    DivisionByZero {
        /// `/` or `%`.
        operator: BinaryOperator,
    },
    /// An operand of the wrong kind, e.g. a boolean added to a number.
    #[error("operator '{operator}' expects {expected}, found {found}")]
    TypeMismatch {
        /// The operator symbol.
        operator: String,
        /// The kind of value required.
        expected: &'static str,
        /// The value received.
        found:    Value,
    },
    /// A bitwise or shift operand that is negative, fractional, non-finite or
    /// larger than 2^53 - 1.
    #[error("operator '{operator}' expects non-negative integers, found {value}")]
    ExpectedNonNegativeInteger {
        /// The bitwise operator.
        operator: BinaryOperator,
        /// The rejected operand.
        value:    f64,
    },
    /// The tree or AST string is nested deeper than the evaluator allows.
    #[error("evaluation depth exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// The configured depth limit.
        limit: usize,
    },
}
