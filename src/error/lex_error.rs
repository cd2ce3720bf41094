#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// A numeric literal could not be read, e.g. `1.2.3` or a lone `-`.
    InvalidOperand {
        /// The offending literal text.
        operand: String,
    },
    /// A character matched no operator, number or parenthesis.
    InvalidOperator {
        /// The offending text.
        operator: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { operand } => write!(f, "Invalid operand: {operand}"),
            Self::InvalidOperator { operator } => write!(f, "Invalid operator: {operator}"),
        }
    }
}

impl std::error::Error for LexError {}
