use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is the structure handed from the parser to the evaluator. Its
/// `Display` implementation renders the canonical prefix encoding:
///
/// ```text
/// n:<digits[.digits]>              literal
/// <op>(<operand>)                  unary
/// <op>(<left>,<right>)             binary
/// ?:(<cond>,<then>,<else>)         conditional
/// ```
///
/// The encoding round-trips: decoding the rendered string with
/// [`str::parse`] yields an identical tree.
///
/// # Example
/// ```
/// use exprima::ast::{BinaryOperator, Expr};
///
/// let expr = Expr::binary(BinaryOperator::Add,
///                         Expr::literal("1"),
///                         Expr::binary(BinaryOperator::Mul, Expr::literal("2"), Expr::literal("3")));
///
/// assert_eq!(expr.to_string(), "+(n:1,*(n:2,n:3))");
/// assert_eq!("+(n:1,*(n:2,n:3))".parse::<Expr>().unwrap(), expr);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, kept as its exact source digits.
    Literal(String),
    /// A prefix operator applied to one operand.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An infix operator applied to two operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// The ternary conditional `cond ? then : else`.
    Conditional {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition holds.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise.
        else_branch: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node from its digits.
    #[must_use]
    pub fn literal(digits: impl Into<String>) -> Self {
        Self::Literal(digits.into())
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a conditional node.
    #[must_use]
    pub fn conditional(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::Conditional { condition:   Box::new(condition),
                            then_branch: Box::new(then_branch),
                            else_branch: Box::new(else_branch), }
    }

    /// Returns the depth of the tree; a literal has depth 1.
    ///
    /// # Example
    /// ```
    /// use exprima::ast::{Expr, UnaryOperator};
    ///
    /// let expr = Expr::unary(UnaryOperator::Minus, Expr::literal("5"));
    /// assert_eq!(expr.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                1 + condition.depth()
                             .max(then_branch.depth())
                             .max(else_branch.depth())
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(digits) => write!(f, "n:{digits}"),
            Self::Unary { op, operand } => write!(f, "{op}({operand})"),
            Self::Binary { op, left, right } => write!(f, "{op}({left},{right})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                write!(f, "{CONDITIONAL_SYMBOL}({condition},{then_branch},{else_branch})")
            },
        }
    }
}

/// Symbol used for the conditional node in the AST encoding.
pub const CONDITIONAL_SYMBOL: &str = "?:";

/// Represents a binary operator.
///
/// Operators are listed by precedence group, loosest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical or (`||`), short-circuiting
    Or,
    /// Logical and (`&&`), short-circuiting
    And,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Every binary operator, used for symbol lookup.
    pub const ALL: [Self; 19] = [Self::Or,
                                 Self::And,
                                 Self::Less,
                                 Self::LessEqual,
                                 Self::Greater,
                                 Self::GreaterEqual,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::BitOr,
                                 Self::BitXor,
                                 Self::BitAnd,
                                 Self::Shl,
                                 Self::Shr,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Mod,
                                 Self::Pow];

    /// Returns the operator's symbol as written in source and in the AST
    /// encoding.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
        }
    }

    /// Looks up a binary operator by its symbol.
    ///
    /// # Example
    /// ```
    /// use exprima::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("**"), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol("?"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns `true` for `<`, `<=`, `>`, `>=`, `==` and `!=`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }

    /// Returns `true` for the bitwise and shift operators, whose operands must
    /// be non-negative integers.
    #[must_use]
    pub const fn is_bitwise(self) -> bool {
        matches!(self,
                 Self::BitAnd | Self::BitOr | Self::BitXor | Self::Shl | Self::Shr)
    }

    /// Returns `true` for the short-circuiting operators `&&` and `||`.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
    /// Logical NOT; only reachable through the AST encoding `!(x)`.
    Not,
}

impl UnaryOperator {
    /// Returns the operator's symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
        }
    }

    /// Looks up a unary operator by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "!" => Some(Self::Not),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(digits: &str) -> Expr {
        Expr::literal(digits)
    }

    #[test]
    fn renders_literals_with_exact_digits() {
        assert_eq!(lit("3.14").to_string(), "n:3.14");
        assert_eq!(lit("007").to_string(), "n:007");
    }

    #[test]
    fn renders_unary_as_single_operand_application() {
        let expr = Expr::unary(UnaryOperator::Minus, Expr::unary(UnaryOperator::Plus, lit("5")));
        assert_eq!(expr.to_string(), "-(+(n:5))");
    }

    #[test]
    fn renders_conditional_with_three_operands() {
        let expr = Expr::conditional(Expr::binary(BinaryOperator::Greater, lit("1"), lit("2")),
                                     lit("8"),
                                     lit("9"));
        assert_eq!(expr.to_string(), "?:(>(n:1,n:2),n:8,n:9)");
    }

    #[test]
    fn every_binary_symbol_maps_back_to_its_operator() {
        for op in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn operator_classes_are_disjoint() {
        for op in BinaryOperator::ALL {
            let classes = [op.is_comparison(), op.is_bitwise(), op.is_logical()];
            assert!(classes.iter().filter(|c| **c).count() <= 1, "{op} in several classes");
        }
    }

    #[test]
    fn depth_counts_the_longest_path() {
        let expr = Expr::binary(BinaryOperator::Add,
                                lit("1"),
                                Expr::binary(BinaryOperator::Mul, lit("2"), lit("3")));
        assert_eq!(expr.depth(), 3);
        assert_eq!(lit("1").depth(), 1);
    }
}
