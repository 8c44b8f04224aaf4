/// Core evaluation logic.
///
/// Contains the evaluator, the node shape shared by trees and AST strings,
/// literal conversion and depth checks.
pub mod core;

/// AST string decoding.
///
/// Splits operand lists at depth-0 commas and decodes one node at a time, so
/// evaluation never touches operands it skips. Also implements `FromStr` for
/// [`Expr`](crate::ast::Expr).
pub mod ast_string;

/// Binary operator evaluation logic.
///
/// Handles arithmetic and comparison operators on evaluated operands.
pub mod binary;

/// Bitwise and shift operators over non-negative integers.
pub mod bitwise;

/// Short-circuit logic and the conditional.
pub mod logic;

/// Unary operator evaluation logic.
///
/// Implements identity, arithmetic negation and logical NOT.
pub mod unary;

pub use self::core::{EvalResult, Evaluator};
