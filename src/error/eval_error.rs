use crate::error::{LexError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way evaluating an expression can fail.
pub enum EvalError {
    /// A numeric literal could not be read.
    InvalidOperand {
        /// The offending literal text.
        operand: String,
    },
    /// Text matched no known operator symbol.
    InvalidOperator {
        /// The offending text.
        operator: String,
    },
    /// Unbalanced `(` or `)`.
    MismatchedParentheses,
    /// An integer-only operator received a fractional operand.
    InvalidOperandType {
        /// The operand type the operator needs.
        expected: &'static str,
        /// The operand type it received.
        actual:   &'static str,
    },
    /// An operator found too few operands, or nothing was left to return.
    UnexpectedEnd,
    /// Division with a zero right-hand operand.
    DivisionByZero,
    /// More than one value was left once every operator had been applied,
    /// as in `(1)(2)`.
    TrailingOperands {
        /// How many values were left on the stack.
        count: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { operand } => write!(f, "Invalid operand: {operand}"),
            Self::InvalidOperator { operator } => write!(f, "Invalid operator: {operator}"),
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses in expression."),
            Self::InvalidOperandType { expected, actual } => {
                write!(f, "Expected operand type: {expected}, but got: {actual}")
            },
            Self::UnexpectedEnd => write!(f, "Unexpected end of expression."),
            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),
            Self::TrailingOperands { count } => {
                write!(f, "Too many operands: {count} values left after evaluation.")
            },
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        match error {
            LexError::InvalidOperand { operand } => Self::InvalidOperand { operand },
            LexError::InvalidOperator { operator } => Self::InvalidOperator { operator },
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::MismatchedParentheses => Self::MismatchedParentheses,
        }
    }
}
