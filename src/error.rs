/// Lexing errors.
///
/// Raised while turning the raw expression text into tokens: malformed
/// numeric literals and characters that match no operator symbol.
pub mod lex_error;
/// Conversion errors.
///
/// Raised while reordering infix tokens into postfix order.
pub mod parse_error;
/// Evaluation errors.
///
/// The complete set of failures `eval` can report. Errors from earlier
/// stages convert into it, so a caller only ever handles one type.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
