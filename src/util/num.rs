use crate::{ast::BinaryOperator, error::EvalError};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns `EvalError::ExpectedNonNegativeInteger` naming `operator` for any
/// other value.
///
/// ## Example
/// ```
/// use exprima::{ast::BinaryOperator, error::EvalError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0, BinaryOperator::BitAnd).unwrap(), 7);
///
/// let err = f64_to_u64_checked(-5.0, BinaryOperator::BitAnd).unwrap_err();
/// assert!(matches!(err, EvalError::ExpectedNonNegativeInteger { .. }));
///
/// let err = f64_to_u64_checked(1.5, BinaryOperator::Shl).unwrap_err();
/// assert!(matches!(err, EvalError::ExpectedNonNegativeInteger { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, operator: BinaryOperator) -> Result<u64, EvalError> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 || value.fract() != 0.0
    {
        return Err(EvalError::ExpectedNonNegativeInteger { operator, value });
    }
    Ok(value as u64)
}

/// Converts a `u64` produced by a bitwise operation back to `f64`.
///
/// Both operands were at most `MAX_SAFE_U64_INT`, so the `&`, `|` and `^`
/// results are too and the conversion is exact.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

/// Returns `true` if `text` has the literal form `digit+ ('.' digit+)?`.
///
/// ## Example
/// ```
/// use exprima::util::num::is_number_literal;
///
/// assert!(is_number_literal("42"));
/// assert!(is_number_literal("3.14"));
/// assert!(!is_number_literal(".5"));
/// assert!(!is_number_literal("5."));
/// assert!(!is_number_literal("1.2.3"));
/// assert!(!is_number_literal("-1"));
/// ```
#[must_use]
pub fn is_number_literal(text: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}
