use crate::{
    ast::UnaryOperator,
    error::ParseError,
    interpreter::{
        lexer::{Operator, Paren, Token},
        parser::core::{Node, ParseResult, Parser},
    },
};

impl<'a, I> Parser<I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `+`  (identity)
    /// - `-`  (numeric negation)
    ///
    /// Unary operators are right-associative, so an input like `+-5` is parsed
    /// as `+(-5)`. They bind tighter than `**`: `-2 ** 2` is `(-2) ** 2`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-") unary
    ///            | primary
    /// ```
    pub(super) fn parse_unary(&mut self) -> ParseResult<Node> {
        let op = match self.tokens.peek() {
            Some((Token::Operator(Operator::Plus), _)) => UnaryOperator::Plus,
            Some((Token::Operator(Operator::Minus), _)) => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };
        self.tokens.next();
        let operand = self.nested(Self::parse_unary)?;
        self.unary(op, operand)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" conditional ")"
    /// ```
    ///
    /// # Errors
    /// - `ParseError::UnexpectedEndOfInput` if no token is left.
    /// - `ParseError::ExpectedOperand` for an operator or `)` in operand
    ///   position.
    /// - `ParseError::ExpectedClosingParen` for an unmatched `(`.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.tokens.next() {
            Some((Token::Number(digits), _)) => self.literal(digits),
            Some((Token::Paren(Paren::Open), open)) => {
                let inner = self.nested(Self::parse_expression)?;
                match self.tokens.next() {
                    Some((Token::Paren(Paren::Close), _)) => Ok(inner),
                    _ => Err(ParseError::ExpectedClosingParen { position: *open }),
                }
            },
            Some((token, position)) => Err(ParseError::ExpectedOperand { found:    token.to_string(),
                                                                         position: *position, }),
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Limits,
        error::ParseError,
        interpreter::{lexer::tokenize, parser::parse_tokens},
    };

    fn ast(source: &str) -> String {
        let tokens = tokenize(source).unwrap();
        parse_tokens(&tokens, &Limits::default()).unwrap().to_string()
    }

    fn parse_err(source: &str) -> ParseError {
        let tokens = tokenize(source).unwrap();
        parse_tokens(&tokens, &Limits::default()).unwrap_err()
    }

    #[test]
    fn negation_binds_tighter_than_multiplication() {
        assert_eq!(ast("-5 * 2"), "*(-(n:5),n:2)");
    }

    #[test]
    fn stacked_prefix_operators_nest() {
        assert_eq!(ast("+-5"), "+(-(n:5))");
        assert_eq!(ast("- - 1"), "-(-(n:1))");
    }

    #[test]
    fn prefix_applies_to_parenthesized_group() {
        assert_eq!(ast("- (5 + 2)"), "-(+(n:5,n:2))");
    }

    #[test]
    fn prefix_binds_tighter_than_power() {
        assert_eq!(ast("-2 ** 2"), "**(-(n:2),n:2)");
        assert_eq!(ast("2 ** -1"), "**(n:2,-(n:1))");
    }

    #[test]
    fn subtraction_of_negative_operand() {
        assert_eq!(ast("1 - -1"), "-(n:1,-(n:1))");
    }

    #[test]
    fn parentheses_leave_no_trace_in_the_tree() {
        assert_eq!(ast("((7))"), "n:7");
    }

    #[test]
    fn dangling_prefix_operators_run_out_of_input() {
        assert_eq!(parse_err("5 + + +"), ParseError::UnexpectedEndOfInput);
        assert_eq!(parse_err("-"), ParseError::UnexpectedEndOfInput);
    }

    #[test]
    fn operator_in_operand_position_is_reported() {
        assert_eq!(parse_err("* 2"),
                   ParseError::ExpectedOperand { found:    "*".to_string(),
                                                 position: 0, });
        assert_eq!(parse_err("()"),
                   ParseError::ExpectedOperand { found:    ")".to_string(),
                                                 position: 1, });
    }

    #[test]
    fn unmatched_parenthesis_names_its_opening_position() {
        assert_eq!(parse_err("2 * (1 + 3"), ParseError::ExpectedClosingParen { position: 4 });
        assert_eq!(parse_err("(1 2)"), ParseError::ExpectedClosingParen { position: 0 });
    }
}
