/// The evaluator module computes values from expression trees and AST strings.
///
/// The evaluator walks an [`Expr`](crate::ast::Expr) or decodes the canonical
/// AST string one node at a time, applies every operator's semantics and
/// produces a [`Value`](value::Value). Logical operators and the conditional
/// evaluate only the operands they need.
///
/// # Responsibilities
/// - Evaluates arithmetic, bitwise, shift, comparison and logical operators.
/// - Decodes AST strings lazily, splitting operands at depth-0 commas.
/// - Reports division by zero, type mismatches and depth violations.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression and produces number, operator and
/// parenthesis tokens, each paired with its byte offset. Multi-character
/// operators are matched greedily so `**` and `<<` never split in two.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Validates number literals (one decimal point, digits on both sides).
/// - Reports lexical errors for invalid or unfinished input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a recursive-descent, precedence-climbing parser with one
/// function per precedence level, from the conditional down to primaries.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Applies precedence and associativity, including right-associative `**`.
/// - Rejects missing operands, unmatched parentheses and trailing input.
pub mod parser;
/// The value module defines the runtime result type.
///
/// Evaluation produces either a number or a boolean; this module declares the
/// [`Value`](value::Value) enum and its coercions.
pub mod value;
