use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    config::Limits,
    error::ParseError,
    interpreter::lexer::{Operator, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its depth.
///
/// Tracking depth while folding lets the parser reject trees the evaluator
/// could not walk without recomputing depths.
#[derive(Debug)]
pub(super) struct Node {
    pub(super) expr:  Expr,
    pub(super) depth: usize,
}

/// Recursive-descent parser over a stream of positioned tokens.
///
/// The parser owns a peekable cursor over `(Token, offset)` pairs and never
/// mutates the tokens themselves. Each precedence level is a method; a level
/// parses its operands at the next tighter level and folds operators to their
/// right.
///
/// Precedence, loosest first:
///
/// ```text
/// conditional     := logical_or ("?" conditional ":" conditional)?
/// logical_or      := logical_and ("||" logical_and)*
/// logical_and     := comparison ("&&" comparison)*
/// comparison      := bit_or (("<" | "<=" | ">" | ">=" | "==" | "!=") bit_or)*
/// bit_or          := bit_xor ("|" bit_xor)*
/// bit_xor         := bit_and ("^" bit_and)*
/// bit_and         := shift ("&" shift)*
/// shift           := additive (("<<" | ">>") additive)*
/// additive        := multiplicative (("+" | "-") multiplicative)*
/// multiplicative  := exponent (("*" | "/" | "%") exponent)*
/// exponent        := unary ("**" exponent)?
/// unary           := ("+" | "-") unary | primary
/// primary         := NUMBER | "(" conditional ")"
/// ```
pub struct Parser<I>
    where I: Iterator
{
    pub(super) tokens: Peekable<I>,
    limits:            Limits,
    nesting:           usize,
}

impl<'a, I> Parser<I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Creates a parser over `tokens` bounded by `limits`.
    pub fn new(tokens: I, limits: Limits) -> Self {
        Self { tokens: tokens.peekable(),
               limits,
               nesting: 0 }
    }

    /// Parses one complete expression and requires the input to end there.
    ///
    /// # Errors
    /// Returns the first grammar violation, or
    /// `ParseError::UnexpectedTrailingInput` when tokens remain after a
    /// complete expression.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let node = self.parse_expression()?;
        if let Some((token, position)) = self.tokens.next() {
            return Err(ParseError::UnexpectedTrailingInput { token:    token.to_string(),
                                                             position: *position, });
        }
        log::debug!("parsed expression of depth {}", node.depth);
        Ok(node.expr)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing and for the inside of
    /// parentheses. It begins at the lowest-precedence level, the conditional.
    pub(super) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_conditional()
    }

    /// Parses a conditional expression `cond ? then : else`.
    ///
    /// The condition is parsed at the `||` level; both branches recurse into
    /// the conditional level, so the operator is right-associative:
    /// `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`.
    ///
    /// # Errors
    /// `ParseError::ExpectedColon` if the `:` branch is missing.
    fn parse_conditional(&mut self) -> ParseResult<Node> {
        let condition = self.parse_logical_or()?;

        let Some((Token::Operator(Operator::Question), question)) = self.tokens.peek() else {
            return Ok(condition);
        };
        let question = *question;
        self.tokens.next();

        let then_branch = self.nested(Self::parse_conditional)?;

        match self.tokens.next() {
            Some((Token::Operator(Operator::Colon), _)) => {},
            _ => return Err(ParseError::ExpectedColon { position: question }),
        }

        let else_branch = self.nested(Self::parse_conditional)?;
        self.conditional(condition, then_branch, else_branch)
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` once `max_nesting` levels are open.
    pub(super) fn nested<F>(&mut self, parse: F) -> ParseResult<Node>
        where F: FnOnce(&mut Self) -> ParseResult<Node>
    {
        if self.nesting >= self.limits.max_nesting {
            return Err(ParseError::NestingTooDeep { limit: self.limits.max_nesting });
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    /// Wraps a literal into a node.
    pub(super) fn literal(&self, digits: &str) -> ParseResult<Node> {
        self.node(Expr::literal(digits), 1)
    }

    /// Folds a prefix operator onto its operand.
    pub(super) fn unary(&self, op: UnaryOperator, operand: Node) -> ParseResult<Node> {
        let depth = operand.depth + 1;
        self.node(Expr::unary(op, operand.expr), depth)
    }

    /// Folds an infix operator onto its operands.
    pub(super) fn binary(&self, op: BinaryOperator, left: Node, right: Node) -> ParseResult<Node> {
        let depth = left.depth.max(right.depth) + 1;
        self.node(Expr::binary(op, left.expr, right.expr), depth)
    }

    fn conditional(&self, condition: Node, then_branch: Node, else_branch: Node) -> ParseResult<Node> {
        let depth = condition.depth.max(then_branch.depth).max(else_branch.depth) + 1;
        self.node(Expr::conditional(condition.expr, then_branch.expr, else_branch.expr),
                  depth)
    }

    fn node(&self, expr: Expr, depth: usize) -> ParseResult<Node> {
        if depth > self.limits.max_depth {
            return Err(ParseError::TreeTooDeep { limit: self.limits.max_depth });
        }
        log::trace!("fold {expr}");
        Ok(Node { expr, depth })
    }
}

/// Parses a token sequence into an expression tree.
///
/// # Errors
/// Returns a [`ParseError`] when the tokens do not form exactly one
/// expression.
///
/// # Example
/// ```
/// use exprima::{
///     Limits,
///     interpreter::{lexer::tokenize, parser::parse_tokens},
/// };
///
/// let tokens = tokenize("2 ** 3 ** 2").unwrap();
/// let expr = parse_tokens(&tokens, &Limits::default()).unwrap();
/// assert_eq!(expr.to_string(), "**(n:2,**(n:3,n:2))");
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)], limits: &Limits) -> ParseResult<Expr> {
    Parser::new(tokens.iter(), *limits).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn ast(source: &str) -> String {
        let tokens = tokenize(source).unwrap();
        parse_tokens(&tokens, &Limits::default()).unwrap().to_string()
    }

    fn parse_err(source: &str) -> ParseError {
        let tokens = tokenize(source).unwrap();
        parse_tokens(&tokens, &Limits::default()).unwrap_err()
    }

    #[test]
    fn conditional_encodes_three_operands() {
        assert_eq!(ast("1 > 2 ? 8 : 9"), "?:(>(n:1,n:2),n:8,n:9)");
    }

    #[test]
    fn conditional_chains_on_the_else_branch() {
        assert_eq!(ast("1 > 2 ? 1 : 3 > 2 ? 2 : 3"),
                   "?:(>(n:1,n:2),n:1,?:(>(n:3,n:2),n:2,n:3))");
    }

    #[test]
    fn conditional_nests_in_the_then_branch() {
        assert_eq!(ast("1 ? 2 ? 3 : 4 : 5"), "?:(n:1,?:(n:2,n:3,n:4),n:5)");
    }

    #[test]
    fn conditional_condition_takes_logical_operators() {
        assert_eq!(ast("1 && 0 ? 1 : 2"), "?:(&&(n:1,n:0),n:1,n:2)");
    }

    #[test]
    fn missing_colon_is_reported_at_question_mark() {
        assert_eq!(parse_err("1 ? 2"), ParseError::ExpectedColon { position: 2 });
        assert_eq!(parse_err("1 ? 2 3"), ParseError::ExpectedColon { position: 2 });
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse_err("1 2"),
                   ParseError::UnexpectedTrailingInput { token:    "2".to_string(),
                                                         position: 2, });
        assert!(matches!(parse_err("(1))"), ParseError::UnexpectedTrailingInput { .. }));
        assert!(matches!(parse_err("1 : 2"), ParseError::UnexpectedTrailingInput { .. }));
    }

    #[test]
    fn empty_input_has_no_expression() {
        assert_eq!(parse_err(""), ParseError::UnexpectedEndOfInput);
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let limits = Limits { max_nesting: 3,
                              ..Limits::default() };
        let ok = tokenize("(((1)))").unwrap();
        assert!(parse_tokens(&ok, &limits).is_ok());
        let deep = tokenize("((((1))))").unwrap();
        assert_eq!(parse_tokens(&deep, &limits).unwrap_err(),
                   ParseError::NestingTooDeep { limit: 3 });
    }

    #[test]
    fn deeply_nested_input_fails_without_overflowing() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let tokens = tokenize(&source).unwrap();
        assert!(matches!(parse_tokens(&tokens, &Limits::default()),
                         Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn depth_limit_applies_to_long_operator_chains() {
        let limits = Limits { max_depth: 4,
                              ..Limits::default() };
        let ok = tokenize("1 + 2 + 3 + 4").unwrap();
        assert_eq!(parse_tokens(&ok, &limits).unwrap().depth(), 4);
        let long = tokenize("1 + 2 + 3 + 4 + 5").unwrap();
        assert_eq!(parse_tokens(&long, &limits).unwrap_err(),
                   ParseError::TreeTooDeep { limit: 4 });
    }
}
