use crate::operator::OperatorKind;

/// Which side of a group a parenthesis token stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parenthesis {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// A single unit of an expression.
///
/// Tokens are produced by the lexer in infix order and reordered by the
/// converter into postfix order. Postfix sequences never contain
/// `Parenthesis` tokens.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal. A leading unary minus is already folded in.
    Number(f64),
    /// An operator registered in [`OperatorKind`].
    Operator(OperatorKind),
    /// `(` or `)`.
    Parenthesis(Parenthesis),
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<OperatorKind> for Token {
    fn from(kind: OperatorKind) -> Self {
        Self::Operator(kind)
    }
}

impl From<Parenthesis> for Token {
    fn from(paren: Parenthesis) -> Self {
        Self::Parenthesis(paren)
    }
}

impl std::fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(kind) => write!(f, "{kind}"),
            Self::Parenthesis(paren) => write!(f, "{paren}"),
        }
    }
}

/// Renders a token sequence separated by single spaces.
///
/// Used when logging token streams.
///
/// # Example
/// ```
/// use rpncalc::{
///     operator::OperatorKind,
///     token::{Token, render},
/// };
///
/// let tokens = [Token::Number(2.0), Token::Number(-3.5), Token::Operator(OperatorKind::Mul)];
/// assert_eq!(render(&tokens), "2 -3.5 *");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
