use thiserror::Error;

/// Represents all errors that can occur during tokenization.
///
/// Every variant carries the byte offset in the source where the offending
/// token starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the expression alphabet.
    #[error("unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A number literal with more than one decimal point, or a decimal point
    /// that is not followed by a digit.
    #[error("malformed number literal {literal:?} at position {position}")]
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A bare `=` or `!` that is not part of `==` or `!=`.
    #[error("incomplete operator '{operator}' at position {position}, expected '{operator}='")]
    IncompleteOperator {
        /// The lone operator character.
        operator: char,
        /// Byte offset of the character.
        position: usize,
    },
    /// The input ended in the middle of a token, e.g. `5.`.
    #[error("unexpected end of input in {literal:?} at position {position}")]
    UnexpectedEndOfInput {
        /// The unfinished token text.
        literal:  String,
        /// Byte offset where the token starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::IncompleteOperator { position, .. }
            | Self::UnexpectedEndOfInput { position, .. } => *position,
        }
    }
}
