/// The lexer turns raw expression text into tokens.
///
/// Whitespace is dropped and decimal commas become decimal points before
/// scanning. Numeric literals absorb a leading sign where a `-` cannot be a
/// subtraction, and operator symbols are matched longest-first.
///
/// # Responsibilities
/// - Produces `Number`, `Operator` and `Parenthesis` tokens in infix order.
/// - Reports malformed literals and unknown characters.
pub mod lexer;
/// The converter reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm over the precedences in the
/// operator registry, with left-associative tie-breaking for every operator.
///
/// # Responsibilities
/// - Resolves precedence and explicit grouping.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The evaluator reduces a postfix sequence to a single number.
///
/// # Responsibilities
/// - Applies operators to an operand stack according to their class.
/// - Enforces whole-number operands for integer-only operators.
/// - Reports missing operands, leftover operands and division by zero.
pub mod evaluator;
