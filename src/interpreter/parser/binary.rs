use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::{Operator, Token},
        parser::core::{Node, ParseResult, Parser},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is an infix operator and
/// `None` for numbers, parentheses, `?` and `:`.
///
/// # Example
/// ```
/// use exprima::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Operator, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator(Operator::Caret)),
///            Some(BinaryOperator::BitXor));
/// assert_eq!(token_to_binary_operator(&Token::Operator(Operator::Colon)), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let Token::Operator(op) = token else {
        return None;
    };
    match op {
        Operator::Plus => Some(BinaryOperator::Add),
        Operator::Minus => Some(BinaryOperator::Sub),
        Operator::Star => Some(BinaryOperator::Mul),
        Operator::StarStar => Some(BinaryOperator::Pow),
        Operator::Slash => Some(BinaryOperator::Div),
        Operator::Percent => Some(BinaryOperator::Mod),
        Operator::Ampersand => Some(BinaryOperator::BitAnd),
        Operator::DoubleAmpersand => Some(BinaryOperator::And),
        Operator::Pipe => Some(BinaryOperator::BitOr),
        Operator::DoublePipe => Some(BinaryOperator::Or),
        Operator::Caret => Some(BinaryOperator::BitXor),
        Operator::ShiftLeft => Some(BinaryOperator::Shl),
        Operator::ShiftRight => Some(BinaryOperator::Shr),
        Operator::Less => Some(BinaryOperator::Less),
        Operator::LessEqual => Some(BinaryOperator::LessEqual),
        Operator::Greater => Some(BinaryOperator::Greater),
        Operator::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Operator::EqualEqual => Some(BinaryOperator::Equal),
        Operator::BangEqual => Some(BinaryOperator::NotEqual),
        Operator::Question | Operator::Colon => None,
    }
}

impl<'a, I> Parser<I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Parses logical OR expressions.
    ///
    /// Grammar: `logical_or := logical_and ("||" logical_and)*`
    pub(super) fn parse_logical_or(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_logical_and, |op| op == BinaryOperator::Or)
    }

    /// Parses logical AND expressions.
    ///
    /// Grammar: `logical_and := comparison ("&&" comparison)*`
    fn parse_logical_and(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_comparison, |op| op == BinaryOperator::And)
    }

    /// Parses relational and equality operators.
    ///
    /// Chains are not special-cased: `1 < 2 < 3` folds left into
    /// `<(<(n:1,n:2),n:3)`, which then fails at evaluation because a boolean
    /// is compared with a number.
    ///
    /// Grammar: `comparison := bit_or (cmp bit_or)*`
    fn parse_comparison(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_bit_or, BinaryOperator::is_comparison)
    }

    /// Grammar: `bit_or := bit_xor ("|" bit_xor)*`
    fn parse_bit_or(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_bit_xor, |op| op == BinaryOperator::BitOr)
    }

    /// Grammar: `bit_xor := bit_and ("^" bit_and)*`
    fn parse_bit_xor(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_bit_and, |op| op == BinaryOperator::BitXor)
    }

    /// Grammar: `bit_and := shift ("&" shift)*`
    fn parse_bit_and(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_shift, |op| op == BinaryOperator::BitAnd)
    }

    /// Grammar: `shift := additive (("<<" | ">>") additive)*`
    fn parse_shift(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_additive, |op| {
                matches!(op, BinaryOperator::Shl | BinaryOperator::Shr)
            })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// A `+` or `-` seen where an operand is expected is a prefix operator and
    /// is handled further down by [`Parser::parse_unary`].
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_multiplicative, |op| {
                matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            })
    }

    /// Parses multiplication-level expressions.
    ///
    /// Grammar: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_exponent, |op| {
                matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
            })
    }

    /// Parses exponentiation expressions.
    ///
    /// Exponentiation is right-associative: `a ** b ** c` parses as
    /// `a ** (b ** c)`. The right operand recurses into this level, one
    /// nesting step deeper.
    ///
    /// Grammar: `exponent := unary ("**" exponent)?`
    fn parse_exponent(&mut self) -> ParseResult<Node> {
        let base = self.parse_unary()?;
        match self.next_operator_if(|op| op == BinaryOperator::Pow) {
            Some(op) => {
                let exponent = self.nested(Self::parse_exponent)?;
                self.binary(op, base, exponent)
            },
            None => Ok(base),
        }
    }

    /// Parses one left-associative precedence level.
    ///
    /// Parses an operand with `operand`, then repeatedly consumes an operator
    /// accepted by `accepts` and another operand, folding to the left.
    fn parse_left_assoc<F, P>(&mut self, operand: F, accepts: P) -> ParseResult<Node>
        where F: Fn(&mut Self) -> ParseResult<Node>,
              P: Fn(BinaryOperator) -> bool + Copy
    {
        let mut left = operand(self)?;
        while let Some(op) = self.next_operator_if(accepts) {
            let right = operand(self)?;
            left = self.binary(op, left, right)?;
        }
        Ok(left)
    }

    /// Consumes the next token if it is a binary operator accepted by
    /// `accepts`.
    fn next_operator_if<P>(&mut self, accepts: P) -> Option<BinaryOperator>
        where P: Fn(BinaryOperator) -> bool
    {
        let op = self.tokens
                     .peek()
                     .and_then(|(token, _)| token_to_binary_operator(token))
                     .filter(|op| accepts(*op))?;
        self.tokens.next();
        Some(op)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Limits,
        interpreter::{lexer::tokenize, parser::parse_tokens},
    };

    fn ast(source: &str) -> String {
        let tokens = tokenize(source).unwrap();
        parse_tokens(&tokens, &Limits::default()).unwrap().to_string()
    }

    #[test]
    fn simple_binary_operations() {
        assert_eq!(ast("5 + 3"), "+(n:5,n:3)");
        assert_eq!(ast("10 - 4"), "-(n:10,n:4)");
        assert_eq!(ast("6 * 7"), "*(n:6,n:7)");
        assert_eq!(ast("20 / 5"), "/(n:20,n:5)");
        assert_eq!(ast("7 % 3"), "%(n:7,n:3)");
        assert_eq!(ast("2 ** 3"), "**(n:2,n:3)");
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(ast("5 + 3 * 2"), "+(n:5,*(n:3,n:2))");
        assert_eq!(ast("(5 + 3) * 2"), "*(+(n:5,n:3),n:2)");
    }

    #[test]
    fn same_level_operators_fold_left() {
        assert_eq!(ast("2 * (3 + 4) * 5"), "*(*(n:2,+(n:3,n:4)),n:5)");
        assert_eq!(ast("10 - 4 - 3"), "-(-(n:10,n:4),n:3)");
        assert_eq!(ast("1 ^ 2 ^ 4"), "^(^(n:1,n:2),n:4)");
    }

    #[test]
    fn exponentiation_is_right_associative() {
        assert_eq!(ast("2 ** 3 ** 2"), "**(n:2,**(n:3,n:2))");
        assert_eq!(ast("2 ** 2 ** 2 ** 2"), "**(n:2,**(n:2,**(n:2,n:2)))");
    }

    #[test]
    fn exponent_binds_tighter_than_multiplication() {
        assert_eq!(ast("2 * 3 ** 2"), "*(n:2,**(n:3,n:2))");
    }

    #[test]
    fn bitwise_levels_follow_and_xor_or_order() {
        assert_eq!(ast("4 & 1 | 2"), "|(&(n:4,n:1),n:2)");
        assert_eq!(ast("1 | 2 ^ 3 & 4"), "|(n:1,^(n:2,&(n:3,n:4)))");
    }

    #[test]
    fn shifts_sit_between_bit_and_and_additive() {
        assert_eq!(ast("1 << 4 >> 2"), ">>(<<(n:1,n:4),n:2)");
        assert_eq!(ast("1 + 1 << 2"), "<<(+(n:1,n:1),n:2)");
        assert_eq!(ast("3 & 1 << 1"), "&(n:3,<<(n:1,n:1))");
    }

    #[test]
    fn comparisons_are_looser_than_bitwise_and_arithmetic() {
        assert_eq!(ast("3 + 2 == 5"), "==(+(n:3,n:2),n:5)");
        assert_eq!(ast("1 | 2 < 4"), "<(|(n:1,n:2),n:4)");
        assert_eq!(ast("1 < 2 < 3"), "<(<(n:1,n:2),n:3)");
    }

    #[test]
    fn logical_and_binds_tighter_than_logical_or() {
        assert_eq!(ast("1 || 0 && 0"), "||(n:1,&&(n:0,n:0))");
        assert_eq!(ast("1 < 2 && 2 < 3"), "&&(<(n:1,n:2),<(n:2,n:3))");
    }

    #[test]
    fn decimal_literals_keep_their_digits() {
        assert_eq!(ast("1.5 + 2.50"), "+(n:1.5,n:2.50)");
    }
}
