use std::fmt;

use crate::error::EvalError;

/// Represents a runtime value produced by evaluation.
///
/// Arithmetic and bitwise operators produce numbers; comparisons, logical
/// operators and `!` produce booleans. A conditional yields whatever its
/// selected branch yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
}

impl Value {
    /// Returns the numeric payload, or a `TypeMismatch` naming `operator`.
    ///
    /// # Example
    /// ```
    /// use exprima::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number("+").unwrap(), 2.5);
    /// assert!(Value::Bool(true).as_number("+").is_err());
    /// ```
    pub fn as_number(self, operator: &str) -> Result<f64, EvalError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Bool(_) => Err(EvalError::TypeMismatch { operator: operator.to_string(),
                                                           expected: "a number",
                                                           found:    self, }),
        }
    }

    /// Coerces the value to a boolean: numbers are `true` unless zero or NaN.
    #[must_use]
    pub fn truthy(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::Number(n) => n != 0.0 && !n.is_nan(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(Value::Number(512.0).to_string(), "512");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn truthiness_follows_zero_rule() {
        assert!(!Value::Number(0.0).truthy());
        assert!(!Value::Number(-0.0).truthy());
        assert!(!Value::Number(f64::NAN).truthy());
        assert!(Value::Number(0.5).truthy());
        assert!(Value::Bool(true).truthy());
    }

    #[test]
    fn booleans_are_not_numbers() {
        let err = Value::Bool(true).as_number("*").unwrap_err();
        assert!(matches!(err, EvalError::TypeMismatch { ref operator, .. } if operator == "*"));
    }
}
