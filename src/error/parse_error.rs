use thiserror::Error;

/// Represents all errors that can occur during parsing.
///
/// Positions are byte offsets into the source the tokens came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A primary expression (number, `(`, unary `+`/`-`) was expected.
    #[error("expected an operand at position {position}, found '{found}'")]
    ExpectedOperand {
        /// The token encountered instead.
        found:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// The tokens ran out where an operand or operator was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A `(` without its matching `)`.
    #[error("expected ')' to close the parenthesis opened at position {position}")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A `?` without the `:` that introduces the else branch.
    #[error("expected ':' for the conditional started at position {position}")]
    ExpectedColon {
        /// Byte offset of the `?`.
        position: usize,
    },
    /// Tokens left over after a complete expression.
    #[error("unexpected trailing input '{token}' at position {position}")]
    UnexpectedTrailingInput {
        /// The first unconsumed token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// Parentheses, prefix operators or conditionals nested beyond the limit.
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
    /// The expression tree would be deeper than the limit.
    #[error("expression tree depth exceeds the limit of {limit}")]
    TreeTooDeep {
        /// The configured depth limit.
        limit: usize,
    },
}
