//! # exprima
//!
//! exprima is an arithmetic and logical expression evaluator written in Rust.
//! Source text goes through a tokenizer, a precedence-climbing parser that
//! builds an [`Expr`](ast::Expr) tree, and an evaluator that produces a
//! number or a boolean.
//!
//! The tree renders to a compact prefix encoding (`+(n:1,*(n:2,n:3))`), and
//! that encoding can be evaluated directly without rebuilding the tree.
//!
//! ```
//! use exprima::{Value, evaluate, run, to_ast_string};
//!
//! assert_eq!(run("5 + 3 * 2").unwrap(), Value::Number(11.0));
//! assert_eq!(to_ast_string("5 + 3 * 2").unwrap(), "+(n:5,*(n:3,n:2))");
//! assert_eq!(evaluate("+(n:5,*(n:3,n:2))").unwrap(), Value::Number(11.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{EvalError, ParseError},
    interpreter::{evaluator::Evaluator, lexer::Token, parser::parse_tokens},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator; its `Display` output is the canonical AST string.
///
/// # Responsibilities
/// - Defines literal, unary, binary and conditional nodes.
/// - Renders trees in the prefix encoding `op(args)` / `n:digits`.
/// - Maps operators to and from their symbols.
pub mod ast;
/// Resource limits for parsing and evaluation.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised by each stage of the
/// pipeline, plus the [`Error`] facade that wraps them with the stage name.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets to lexer and parser errors.
/// - Converts stage errors into [`Error`] with `?`.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides the building blocks behind the crate-level entry points.
pub mod interpreter;
/// General utilities for numeric conversion and literal validation.
pub mod util;

pub use crate::{config::Limits, error::Error, interpreter::value::Value};

/// Converts source text into positioned tokens.
///
/// # Errors
/// Returns a [`LexError`](error::LexError) for input the tokenizer rejects.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, error::LexError> {
    interpreter::lexer::tokenize(source)
}

/// Parses tokens into an expression tree with the default [`Limits`].
///
/// # Example
/// ```
/// use exprima::{parse, tokenize};
///
/// let tokens = tokenize("(5 + 3) * 2").unwrap();
/// assert_eq!(parse(&tokens).unwrap().to_string(), "*(+(n:5,n:3),n:2)");
///
/// let tokens = tokenize("5 + + +").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> Result<Expr, ParseError> {
    parse_with_limits(tokens, &Limits::default())
}

/// Parses tokens into an expression tree bounded by `limits`.
pub fn parse_with_limits(tokens: &[(Token, usize)], limits: &Limits) -> Result<Expr, ParseError> {
    parse_tokens(tokens, limits)
}

/// Tokenizes and parses `source`, then renders the AST string.
///
/// # Example
/// ```
/// use exprima::to_ast_string;
///
/// assert_eq!(to_ast_string("1 > 2 ? 8 : 9").unwrap(), "?:(>(n:1,n:2),n:8,n:9)");
/// ```
pub fn to_ast_string(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    Ok(expr.to_string())
}

/// Evaluates an AST string with the default [`Limits`].
///
/// Operands are decoded only when evaluation reaches them: the right side of
/// a short-circuited `&&`/`||` and the unselected branch of `?:` are never
/// decoded.
///
/// # Example
/// ```
/// use exprima::{Value, evaluate};
///
/// assert_eq!(evaluate("?:(>(n:1,n:2),n:8,n:9)").unwrap(), Value::Number(9.0));
/// assert_eq!(evaluate("&&(n:0,/(n:1,n:0))").unwrap(), Value::Bool(false));
/// assert!(evaluate("/(n:1,n:0)").is_err());
/// ```
pub fn evaluate(ast: &str) -> Result<Value, EvalError> {
    Evaluator::new().eval_ast(ast)
}

/// Evaluates an expression tree with the default [`Limits`].
pub fn evaluate_expr(expr: &Expr) -> Result<Value, EvalError> {
    Evaluator::new().eval_expr(expr)
}

/// Runs the whole pipeline on `source` with the default [`Limits`].
///
/// # Example
/// ```
/// use exprima::{Value, run};
///
/// assert_eq!(run("2 ** 3 ** 2").unwrap(), Value::Number(512.0));
/// assert_eq!(run("1 < 2 && 2 < 3").unwrap(), Value::Bool(true));
/// assert_eq!(run("5 + + +").unwrap_err().stage(), "parse");
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    run_with_limits(source, &Limits::default())
}

/// Runs the whole pipeline on `source` bounded by `limits`.
///
/// The first failing stage ends the run; its error is returned wrapped in
/// [`Error`].
pub fn run_with_limits(source: &str, limits: &Limits) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    log::debug!("tokenized {} token(s)", tokens.len());

    let expr = parse_with_limits(&tokens, limits)?;
    log::debug!("parsed {expr}");

    let value = Evaluator::with_limits(*limits).eval_expr(&expr)?;
    log::debug!("evaluated to {value}");
    Ok(value)
}
