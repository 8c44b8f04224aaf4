/// Numeric conversion helpers.
///
/// Safe conversions between `f64` and `u64` for the bitwise operators, and the
/// number-literal check shared by the tokenizer and the AST-string evaluator.
pub mod num;
