#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix tokens to
/// postfix order.
pub enum ParseError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses in expression."),
        }
    }
}

impl std::error::Error for ParseError {}
