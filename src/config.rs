/// Default bound on parser recursion.
pub const DEFAULT_MAX_NESTING: usize = 128;
/// Default bound on expression-tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Resource bounds applied while parsing and evaluating.
///
/// Recursion in the parser and evaluator follows the nesting of the input, so
/// both are capped and report a dedicated error instead of exhausting the call
/// stack.
///
/// - `max_nesting` counts nested parentheses, prefix operators, conditional
///   branches and `**` chains while parsing.
/// - `max_depth` caps the depth of the expression tree. The parser enforces it
///   when folding operators, the evaluator when descending into operands.
///
/// # Example
/// ```
/// use exprima::{Limits, run_with_limits};
///
/// let limits = Limits { max_nesting: 2, ..Limits::default() };
/// assert!(run_with_limits("(1)", &limits).is_ok());
/// assert!(run_with_limits("(((1)))", &limits).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum parser recursion depth.
    pub max_nesting: usize,
    /// Maximum expression-tree depth.
    pub max_depth:   usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_nesting: DEFAULT_MAX_NESTING,
               max_depth:   DEFAULT_MAX_DEPTH, }
    }
}
