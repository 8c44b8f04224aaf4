/// Lexing errors.
///
/// Defines the failures the tokenizer can report: unrecognized characters,
/// malformed number literals, incomplete operators and input that ends in the
/// middle of a token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// an expression tree. Parse errors include missing operands, unmatched
/// parentheses, malformed conditionals, trailing input and nesting limits.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree or an AST string: malformed encodings, division by zero, type
/// mismatches, invalid bitwise operands and depth limits.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
use thiserror::Error;

/// The first failure reported by any stage of the pipeline.
///
/// Each variant wraps the stage-specific error untouched; the `Display` output
/// prefixes the stage name so callers can surface it verbatim.
///
/// # Example
/// ```
/// use exprima::run;
///
/// let err = run("1 / 0").unwrap_err();
/// assert_eq!(err.stage(), "eval");
/// assert!(err.to_string().starts_with("eval error: "));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// The token sequence does not form an expression.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the name of the stage that failed.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex",
            Self::Parse(_) => "parse",
            Self::Eval(_) => "eval",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn errors_are_send_sync_static() {
        _assert_send_sync_static::<Error>();
        _assert_send_sync_static::<LexError>();
        _assert_send_sync_static::<ParseError>();
        _assert_send_sync_static::<EvalError>();
    }

    #[test]
    fn stage_prefix_wraps_inner_message() {
        let inner = ParseError::UnexpectedEndOfInput;
        let err: Error = inner.clone().into();
        assert_eq!(err.stage(), "parse");
        assert_eq!(err.to_string(), format!("parse error: {inner}"));
    }

    #[test]
    fn lex_errors_convert_with_question_mark() {
        fn fails() -> Result<(), Error> {
            Err(LexError::UnrecognizedCharacter { character: '$',
                                                  position:  3, })?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, Error::Lex(LexError::UnrecognizedCharacter { position: 3, .. })));
    }
}
