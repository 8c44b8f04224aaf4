use std::fmt;

use logos::Logos;

use crate::{error::LexError, util::num::is_number_literal};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer:
/// a number literal, an operator, or a parenthesis.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Numeric literal tokens such as `42` or `3.14`, kept as written.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(String),
    /// Operator tokens. Longer operators win over their prefixes.
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("**", |_| Operator::StarStar)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    #[token("&", |_| Operator::Ampersand)]
    #[token("&&", |_| Operator::DoubleAmpersand)]
    #[token("|", |_| Operator::Pipe)]
    #[token("||", |_| Operator::DoublePipe)]
    #[token("^", |_| Operator::Caret)]
    #[token("<<", |_| Operator::ShiftLeft)]
    #[token(">>", |_| Operator::ShiftRight)]
    #[token("<", |_| Operator::Less)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">", |_| Operator::Greater)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("==", |_| Operator::EqualEqual)]
    #[token("!=", |_| Operator::BangEqual)]
    #[token("?", |_| Operator::Question)]
    #[token(":", |_| Operator::Colon)]
    Operator(Operator),
    /// `(` or `)`.
    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
}

/// The operator alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    StarStar,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `&&`
    DoubleAmpersand,
    /// `|`
    Pipe,
    /// `||`
    DoublePipe,
    /// `^`
    Caret,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `?`
    Question,
    /// `:`
    Colon,
}

impl Operator {
    /// Returns the operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::StarStar => "**",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::DoubleAmpersand => "&&",
            Self::Pipe => "|",
            Self::DoublePipe => "||",
            Self::Caret => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Question => "?",
            Self::Colon => ":",
        }
    }
}

/// Parenthesis kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(digits) => f.write_str(digits),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Paren(Paren::Open) => f.write_str("("),
            Self::Paren(Paren::Close) => f.write_str(")"),
        }
    }
}

/// Failure classes reported by the generated lexer.
///
/// These carry no position; [`tokenize`] attaches one when converting them to
/// a [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token matches at this position.
    #[default]
    Unrecognized,
    /// More than one decimal point, or a decimal point without digits after
    /// it.
    MalformedNumber,
    /// A number ending in `.` with only whitespace after it.
    UnexpectedEnd,
}

/// Validates a number literal from the current token slice.
///
/// The regex accepts any run of digits and dots starting with a digit; this
/// callback narrows it to `digit+ ('.' digit+)?`.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    if is_number_literal(slice) {
        return Ok(slice.to_string());
    }
    let at_end = lex.remainder().trim_start().is_empty();
    if slice.ends_with('.') && slice.matches('.').count() == 1 && at_end {
        Err(LexErrorKind::UnexpectedEnd)
    } else {
        Err(LexErrorKind::MalformedNumber)
    }
}

/// Converts the source text into tokens paired with their byte offsets.
///
/// Whitespace (space, tab, CR, LF) separates tokens and is otherwise ignored.
/// Tokens are returned in source order.
///
/// # Errors
/// Returns a [`LexError`] for an unrecognized character, a malformed number, a
/// bare `=` or `!`, or a number cut off by the end of input.
///
/// # Example
/// ```
/// use exprima::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("2 ** 10").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("2".into()), 0),
///                 (Token::Operator(Operator::StarStar), 2),
///                 (Token::Number("10".into()), 5)]);
///
/// assert!(tokenize("1 = 1").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let position = lexer.span().start;
        match result {
            Ok(token) => {
                log::trace!("token {token} at {position}");
                tokens.push((token, position));
            },
            Err(kind) => return Err(lex_error(kind, source, lexer.slice(), position)),
        }
    }

    Ok(tokens)
}

/// Attaches position and text to a lexer failure.
fn lex_error(kind: LexErrorKind, source: &str, slice: &str, position: usize) -> LexError {
    match kind {
        LexErrorKind::MalformedNumber => LexError::MalformedNumber { literal: slice.to_string(),
                                                                     position },
        LexErrorKind::UnexpectedEnd => {
            LexError::UnexpectedEndOfInput { literal: slice.to_string(),
                                             position }
        },
        LexErrorKind::Unrecognized => {
            let character = source[position..].chars().next().unwrap_or_default();
            match character {
                '=' | '!' => LexError::IncompleteOperator { operator: character,
                                                            position },
                _ => LexError::UnrecognizedCharacter { character,
                                                       position },
            }
        },
    }
}
