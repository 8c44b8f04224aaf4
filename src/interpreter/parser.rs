/// Core parsing logic.
///
/// Contains the parser state, the entry point, the conditional (`?:`) level,
/// and the helpers that enforce nesting and depth limits.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels from `||` down to `*`,
/// and the right-associative `**` level.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `+`/`-`, number literals and parenthesized groups.
pub mod unary;

pub use self::core::{ParseResult, Parser, parse_tokens};
