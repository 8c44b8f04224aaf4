use std::str::FromStr;

use crate::{
    ast::{BinaryOperator, CONDITIONAL_SYMBOL, Expr, UnaryOperator},
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator, Operand, Shape, literal_value},
};

/// Prefix marking a literal in the AST encoding.
pub const LITERAL_PREFIX: &str = "n:";

impl<'a> Operand<'a> for &'a str {
    fn shape(self) -> EvalResult<Shape<'a, Self>> {
        decode_node(self)
    }
}

/// Splits an operand list at every comma outside nested parentheses.
///
/// Operands are trimmed. An empty or all-blank list has no operands.
///
/// # Errors
/// `EvalError::MalformedAst` if the parentheses in `body` are unbalanced.
///
/// # Example
/// ```
/// use exprima::interpreter::evaluator::ast_string::split_top_level;
///
/// assert_eq!(split_top_level("+(n:1,n:2), n:3").unwrap(), vec!["+(n:1,n:2)", "n:3"]);
/// assert!(split_top_level("").unwrap().is_empty());
/// assert!(split_top_level("(n:1").is_err());
/// ```
pub fn split_top_level(body: &str) -> EvalResult<Vec<&str>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let unbalanced = || EvalError::MalformedAst { ast:    body.to_string(),
                                                  reason: "unbalanced parentheses", };
    let mut operands = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;

    for (i, byte) in body.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            b',' if depth == 0 => {
                operands.push(body[start..i].trim());
                start = i + 1;
            },
            _ => {},
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    operands.push(body[start..].trim());
    Ok(operands)
}

/// Decodes the outermost node of an AST string.
///
/// The operands are returned as trimmed substrings and are not examined
/// beyond the parenthesis balance needed to find their boundaries.
///
/// # Errors
/// - `MalformedAst` when the text is neither `n:<digits>` nor
///   `<op>(<operands>)`, or an operand is empty.
/// - `UnknownOperator` for a symbol outside the operator set.
/// - `WrongArity` when the operand count does not fit the operator.
fn decode_node(ast: &str) -> EvalResult<Shape<'_, &str>> {
    let ast = ast.trim();
    if let Some(digits) = ast.strip_prefix(LITERAL_PREFIX) {
        return Ok(Shape::Literal(digits));
    }

    let malformed = |reason| EvalError::MalformedAst { ast: ast.to_string(),
                                                       reason };
    let Some(open) = ast.find('(') else {
        return Err(malformed("expected a literal or an operator application"));
    };
    let Some(body) = ast[open + 1..].strip_suffix(')') else {
        return Err(malformed("missing closing parenthesis"));
    };
    let symbol = ast[..open].trim();
    let operands = split_top_level(body)?;
    if operands.iter().any(|operand| operand.is_empty()) {
        return Err(malformed("empty operand"));
    }

    if symbol == CONDITIONAL_SYMBOL {
        return match operands.as_slice() {
            &[condition, then_branch, else_branch] => {
                Ok(Shape::Conditional(condition, then_branch, else_branch))
            },
            _ => Err(wrong_arity(symbol, "3", operands.len())),
        };
    }

    match (operands.as_slice(),
           UnaryOperator::from_symbol(symbol),
           BinaryOperator::from_symbol(symbol))
    {
        (&[operand], Some(op), _) => Ok(Shape::Unary(op, operand)),
        (&[left, right], _, Some(op)) => Ok(Shape::Binary(op, left, right)),
        _ => Err(arity_or_unknown(symbol, operands.len())),
    }
}

/// Builds the error for a symbol whose operand count did not match.
fn arity_or_unknown(symbol: &str, found: usize) -> EvalError {
    match (UnaryOperator::from_symbol(symbol), BinaryOperator::from_symbol(symbol)) {
        (Some(_), Some(_)) => wrong_arity(symbol, "1 or 2", found),
        (Some(_), None) => wrong_arity(symbol, "1", found),
        (None, Some(_)) => wrong_arity(symbol, "2", found),
        (None, None) => EvalError::UnknownOperator { symbol: symbol.to_string() },
    }
}

fn wrong_arity(symbol: &str, expected: &'static str, found: usize) -> EvalError {
    EvalError::WrongArity { operator: symbol.to_string(),
                            expected,
                            found }
}

impl Evaluator {
    /// Decodes a complete AST string into an expression tree.
    ///
    /// Unlike [`Evaluator::eval_ast`], every node is decoded, including
    /// branches evaluation would skip.
    ///
    /// # Errors
    /// Any decoding error, an invalid literal, or `DepthLimitExceeded` when
    /// the encoding nests deeper than `max_depth`.
    pub fn decode(&self, ast: &str) -> EvalResult<Expr> {
        self.decode_at(ast, 1)
    }

    fn decode_at(&self, ast: &str, depth: usize) -> EvalResult<Expr> {
        self.check_depth(depth)?;
        Ok(match decode_node(ast)? {
            Shape::Literal(digits) => {
                literal_value(digits)?;
                Expr::literal(digits)
            },
            Shape::Unary(op, operand) => Expr::unary(op, self.decode_at(operand, depth + 1)?),
            Shape::Binary(op, left, right) => Expr::binary(op,
                                                           self.decode_at(left, depth + 1)?,
                                                           self.decode_at(right, depth + 1)?),
            Shape::Conditional(condition, then_branch, else_branch) => {
                Expr::conditional(self.decode_at(condition, depth + 1)?,
                                  self.decode_at(then_branch, depth + 1)?,
                                  self.decode_at(else_branch, depth + 1)?)
            },
        })
    }
}

impl FromStr for Expr {
    type Err = EvalError;

    /// Decodes the canonical AST string with the default depth limit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Evaluator::new().decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Limits, interpreter::value::Value};

    fn eval(ast: &str) -> EvalResult<Value> {
        Evaluator::new().eval_ast(ast)
    }

    #[test]
    fn literals_decode_with_decimals() {
        assert_eq!(eval("n:5").unwrap(), Value::Number(5.0));
        assert_eq!(eval("n:0.25").unwrap(), Value::Number(0.25));
    }

    #[test]
    fn nested_operands_split_at_depth_zero_commas() {
        assert_eq!(eval("*(+(n:1,n:2),n:3)").unwrap(), Value::Number(9.0));
        assert_eq!(eval("-(n:10,-(n:4,n:3))").unwrap(), Value::Number(9.0));
    }

    #[test]
    fn plus_and_minus_pick_arity_from_operand_count() {
        assert_eq!(eval("-(n:5)").unwrap(), Value::Number(-5.0));
        assert_eq!(eval("-(n:5,n:2)").unwrap(), Value::Number(3.0));
        assert_eq!(eval("+(-(n:5))").unwrap(), Value::Number(-5.0));
    }

    #[test]
    fn whitespace_around_operands_is_trimmed() {
        assert_eq!(eval(" +( n:1 , *( n:2 ,n:3 ) ) ").unwrap(), Value::Number(7.0));
    }

    #[test]
    fn not_is_available_in_the_encoding() {
        assert_eq!(eval("!(n:0)").unwrap(), Value::Bool(true));
        assert_eq!(eval("!(<(n:1,n:2))").unwrap(), Value::Bool(false));
    }

    #[test]
    fn conditional_skips_the_unselected_branch() {
        assert_eq!(eval("?:(>(n:1,n:2),n:8,n:9)").unwrap(), Value::Number(9.0));
        assert_eq!(eval("?:(>(n:1,n:2),/(n:1,n:0),n:9)").unwrap(), Value::Number(9.0));
        assert_eq!(eval("?:(n:1,n:8,garbage)").unwrap(), Value::Number(8.0));
    }

    #[test]
    fn short_circuit_never_decodes_the_right_operand() {
        assert_eq!(eval("&&(n:0,/(n:1,n:0))").unwrap(), Value::Bool(false));
        assert_eq!(eval("||(n:1,%%(n:1))").unwrap(), Value::Bool(true));
    }

    #[test]
    fn malformed_encodings_are_rejected() {
        assert!(matches!(eval("5"), Err(EvalError::MalformedAst { .. })));
        assert!(matches!(eval("+(n:1,n:2"), Err(EvalError::MalformedAst { .. })));
        assert!(matches!(eval("+(n:1,)"), Err(EvalError::MalformedAst { .. })));
        assert!(matches!(eval("+(n:1))(n:2)"), Err(EvalError::MalformedAst { .. })));
        assert!(matches!(eval("n:1.2.3"), Err(EvalError::InvalidLiteral { .. })));
        assert!(matches!(eval("n:"), Err(EvalError::InvalidLiteral { .. })));
    }

    #[test]
    fn unknown_operators_and_bad_arity() {
        assert_eq!(eval("@(n:1,n:2)").unwrap_err(),
                   EvalError::UnknownOperator { symbol: "@".to_string() });
        assert_eq!(eval("*(n:1)").unwrap_err(),
                   EvalError::WrongArity { operator: "*".to_string(),
                                           expected: "2",
                                           found:    1, });
        assert_eq!(eval("+(n:1,n:2,n:3)").unwrap_err(),
                   EvalError::WrongArity { operator: "+".to_string(),
                                           expected: "1 or 2",
                                           found:    3, });
        assert_eq!(eval("?:(n:1,n:2)").unwrap_err(),
                   EvalError::WrongArity { operator: "?:".to_string(),
                                           expected: "3",
                                           found:    2, });
        assert_eq!(eval("!()").unwrap_err(),
                   EvalError::WrongArity { operator: "!".to_string(),
                                           expected: "1",
                                           found:    0, });
    }

    #[test]
    fn from_str_decodes_every_node() {
        let expr: Expr = "?:(n:1,n:2,-(n:3))".parse().unwrap();
        assert_eq!(expr.to_string(), "?:(n:1,n:2,-(n:3))");
        assert!("?:(n:1,n:2,garbage)".parse::<Expr>().is_err());
    }

    #[test]
    fn depth_limit_applies_to_strings() {
        let deep = format!("{}n:1{}", "-(".repeat(600), ")".repeat(600));
        assert_eq!(eval(&deep).unwrap_err(), EvalError::DepthLimitExceeded { limit: 512 });
        assert!(deep.parse::<Expr>().is_err());

        let limits = Limits { max_depth: 1000,
                              ..Limits::default() };
        assert_eq!(Evaluator::with_limits(limits).eval_ast(&deep).unwrap(), Value::Number(1.0));
    }
}
